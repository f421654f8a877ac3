use serde::Deserialize;

use crate::error::Result;
use crate::utils::{is_cjk, is_cjk_extended};

/// Which code points count as CJK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CjkRange {
    /// U+4E00..=U+9FA5
    #[default]
    Common,
    /// Unified ideographs, extensions A–E and compatibility ideographs.
    Extended,
}

impl CjkRange {
    pub fn contains(self, ch: char) -> bool {
        match self {
            CjkRange::Common => is_cjk(ch),
            CjkRange::Extended => is_cjk_extended(ch),
        }
    }
}

/// Options accepted by `format_with` and the plugin exports.
///
/// JSON form, every field optional:
/// `{ "cjk_range": "extended", "fold_width": true }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingOptions {
    pub cjk_range: CjkRange,
    /// NFKC-normalize before spacing, so full-width Latin (ｅｎｇ１) becomes ASCII.
    pub fold_width: bool,
}

impl SpacingOptions {
    /// Parse options from a JSON payload. Empty or blank input → defaults.
    pub fn from_json(input: &[u8]) -> Result<Self> {
        if input.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let options: SpacingOptions = serde_json::from_slice(input)?;
        tracing::debug!(?options, "Parsed spacing options.");
        Ok(options)
    }
}
