use serde::Serialize;

use crate::options::CjkRange;
use crate::utils::{is_gap, is_latin_alnum};

/// Script class of a single character.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Cjk,
    Alnum,
    Space,
    Other,
}

impl Class {
    pub fn of(ch: char, range: CjkRange) -> Class {
        if range.contains(ch) {
            Class::Cjk
        } else if is_latin_alnum(ch) {
            Class::Alnum
        } else if is_gap(ch) {
            Class::Space
        } else {
            Class::Other
        }
    }
}

/// A maximal stretch of same-class characters.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Run {
    pub class: Class,
    pub text: String,
}

impl Run {
    pub fn new(class: Class, text: impl Into<String>) -> Self {
        Run { class, text: text.into() }
    }

    /// The single ASCII space inserted at CJK/Latin boundaries.
    pub fn space() -> Self {
        Run::new(Class::Space, " ")
    }
}

/// Split `text` into maximal runs. Joining the runs gives back `text`.
pub fn split_runs(text: &str, range: CjkRange) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for ch in text.chars() {
        let class = Class::of(ch, range);
        match runs.last_mut() {
            Some(last) if last.class == class => last.text.push(ch),
            _ => runs.push(Run::new(class, ch)),
        }
    }

    runs
}

pub fn join_runs(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
