use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::options::SpacingOptions;
use crate::run::{Class, Run, join_runs, split_runs};

/// Normalize spacing between CJK and Latin text with default options.
///
/// `None` stays `None`:
///   format(Some("中文english")) → Some("中文 english")
///   format(None)                → None
pub fn format(text: Option<&str>) -> Option<String> {
    format_with(text, &SpacingOptions::default())
}

/// Three passes, in order, each over the output of the previous one:
///   1. "中文abc"  → "中文 abc"   (CJK then Latin)
///   2. "abc中文"  → "abc 中文"   (Latin then CJK)
///   3. "中 \t文"  → "中文"       (whitespace between CJK dropped)
pub fn format_with(text: Option<&str>, options: &SpacingOptions) -> Option<String> {
    text.map(|t| prepare(t, options))
        .map(|t| split_runs(&t, options.cjk_range))
        .map(space_cjk_latin)
        .map(space_latin_cjk)
        .map(collapse_cjk_gaps)
        .map(|runs| join_runs(&runs))
}

fn prepare<'a>(text: &'a str, options: &SpacingOptions) -> Cow<'a, str> {
    tracing::trace!(len = text.len(), fold_width = options.fold_width, "Formatting text.");
    if options.fold_width {
        Cow::Owned(text.nfkc().collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Insert one space wherever a CJK run is directly followed by a Latin-alnum run.
pub fn space_cjk_latin(runs: Vec<Run>) -> Vec<Run> {
    insert_spaces(runs, Class::Cjk, Class::Alnum)
}

/// Insert one space wherever a Latin-alnum run is directly followed by a CJK run.
pub fn space_latin_cjk(runs: Vec<Run>) -> Vec<Run> {
    insert_spaces(runs, Class::Alnum, Class::Cjk)
}

fn insert_spaces(runs: Vec<Run>, left: Class, right: Class) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    let mut inserted = 0usize;

    for run in runs {
        if run.class == right && out.last().is_some_and(|prev| prev.class == left) {
            out.push(Run::space());
            inserted += 1;
        }
        out.push(run);
    }

    tracing::trace!(?left, ?right, inserted, "Inserted boundary spaces.");
    out
}

/// Drop whitespace runs sitting between two CJK runs. The CJK runs on
/// either side merge, so "中 文 字" collapses all the way to "中文字".
pub fn collapse_cjk_gaps(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    let mut collapsed = 0usize;
    let mut iter = runs.into_iter().peekable();

    while let Some(run) = iter.next() {
        let after_cjk = out.last().is_some_and(|prev| prev.class == Class::Cjk);

        if run.class == Class::Space
            && after_cjk
            && iter.peek().is_some_and(|next| next.class == Class::Cjk)
        {
            collapsed += 1;
            continue;
        }

        match out.last_mut() {
            Some(prev) if run.class == Class::Cjk && prev.class == Class::Cjk => {
                prev.text.push_str(&run.text);
            }
            _ => out.push(run),
        }
    }

    tracing::trace!(collapsed, "Collapsed CJK gaps.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CjkRange;

    fn step(f: fn(Vec<Run>) -> Vec<Run>, input: &str) -> String {
        join_runs(&f(split_runs(input, CjkRange::Common)))
    }

    #[test]
    fn test_format() {
        let cases: Vec<(&str, &str)> = vec![
            // --- literal scenarios ---
            ("中文测试english test中文测试", "中文测试 english test 中文测试"),
            ("中文測試english test中文測試", "中文測試 english test 中文測試"),
            ("中 文  测   试english test中 文  测   试", "中文测试 english test 中文测试"),
            ("中 文  測   試english test中 文  測   試", "中文測試 english test 中文測試"),
            // --- single-char runs ---
            ("中a", "中 a"),
            ("a中", "a 中"),
            ("中1中", "中 1 中"),
            ("a中b", "a 中 b"),
            // --- mixed whitespace between CJK collapses to nothing ---
            ("中 \t文", "中文"),
            ("中\n\n文", "中文"),
            ("中\u{3000}文", "中文"),
            // --- existing separators at CJK/Latin boundaries are kept ---
            ("中 a", "中 a"),
            ("中  a", "中  a"),
            ("a\t中", "a\t中"),
            // --- punctuation is never spaced ---
            ("中文，english", "中文，english"),
            ("(中)a", "(中)a"),
            ("版本v1.0发布", "版本 v1.0 发布"),
            // --- whitespace not between two CJK runs is untouched ---
            ("  中文  ", "  中文  "),
            ("中 , 文", "中 , 文"),
            // --- no CJK at all ---
            ("hello   world", "hello   world"),
            ("", ""),
        ];

        for (input, expected) in &cases {
            assert_eq!(
                format(Some(*input)).as_deref(),
                Some(*expected),
                "format mismatch for {:?}", input
            );
        }
    }

    #[test]
    fn test_format_none() {
        assert_eq!(format(None), None);
        let options = SpacingOptions { cjk_range: CjkRange::Extended, fold_width: true };
        assert_eq!(format_with(None, &options), None);
    }

    #[test]
    fn test_steps_in_isolation() {
        // each step only touches its own boundary kind
        assert_eq!(step(space_cjk_latin, "中a中"), "中 a中");
        assert_eq!(step(space_latin_cjk, "中a中"), "中a 中");
        assert_eq!(step(collapse_cjk_gaps, "中 a 中"), "中 a 中");
        assert_eq!(step(collapse_cjk_gaps, "中 文 字a"), "中文字a");
        assert_eq!(step(space_cjk_latin, "a 中 文"), "a 中 文");
    }

    #[test]
    fn test_collapse_merges_runs() {
        let runs = collapse_cjk_gaps(split_runs("中 文\t字", CjkRange::Common));
        assert_eq!(runs, vec![Run::new(Class::Cjk, "中文字")]);
    }

    #[test]
    fn test_extended_range() {
        let options = SpacingOptions { cjk_range: CjkRange::Extended, ..Default::default() };
        assert_eq!(format(Some("𠮩a")).as_deref(), Some("𠮩a"));
        assert_eq!(format_with(Some("𠮩a"), &options).as_deref(), Some("𠮩 a"));
        assert_eq!(format_with(Some("\u{9FFF} 中"), &options).as_deref(), Some("\u{9FFF}中"));
    }

    #[test]
    fn test_fold_width() {
        let options = SpacingOptions { fold_width: true, ..Default::default() };
        assert_eq!(format(Some("中文ｅｎｇ１")).as_deref(), Some("中文ｅｎｇ１"));
        assert_eq!(format_with(Some("中文ｅｎｇ１"), &options).as_deref(), Some("中文 eng1"));
    }
}
