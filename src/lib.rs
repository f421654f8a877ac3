mod error;
mod options;
mod run;
mod spacing;
mod utils;

pub use error::{Error, Result};
pub use options::{CjkRange, SpacingOptions};
pub use run::{Class, Run, join_runs, split_runs};
pub use spacing::{collapse_cjk_gaps, format, format_with, space_cjk_latin, space_latin_cjk};
pub use utils::{is_cjk, is_cjk_extended, is_gap, is_latin_alnum};

use wasm_minimal_protocol::*;

initiate_protocol!();

/// Input: UTF-8 text bytes, e.g. "中文english"
/// Output: spaced text, e.g. "中文 english"
#[wasm_func]
pub fn autospace(input: &[u8]) -> Result<Vec<u8>> {
    autospace_with(input, &[])
}

/// Same as `autospace`, with JSON options as the second argument,
/// e.g. `{"cjk_range": "extended", "fold_width": true}`.
#[wasm_func]
pub fn autospace_with(input: &[u8], options: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input)?;
    let options = SpacingOptions::from_json(options)?;

    Ok(format_with(Some(text), &options)
        .unwrap_or_default()
        .into_bytes())
}

/// Output: JSON array of the runs of the spaced text, e.g.
/// `[{"class":"cjk","text":"中文"},{"class":"space","text":" "},…]`
#[wasm_func]
pub fn runs(input: &[u8], options: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input)?;
    let options = SpacingOptions::from_json(options)?;
    let spaced = format_with(Some(text), &options).unwrap_or_default();
    let runs = split_runs(&spaced, options.cjk_range);

    Ok(serde_json::to_vec(&runs)?)
}
