/// True for the common Han ideographs (U+4E00..=U+9FA5), the range the
/// spacer treats as CJK unless the extended range is requested.
pub fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FA5}')
}

/// True for CJK ideographs, including extension blocks needed for
/// rare characters like 𠮩 (U+20BA9) and 𠹌 (U+20E4C).
pub fn is_cjk_extended(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{20000}'..='\u{2A6DF}' // CJK Extension B
        | '\u{2A700}'..='\u{2B73F}' // CJK Extension C
        | '\u{2B740}'..='\u{2B81F}' // CJK Extension D
        | '\u{2B820}'..='\u{2CEAF}' // CJK Extension E
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
    )
}

/// True for ASCII letters and digits only.
/// Accented letters (é) and full-width forms (ａ, １) are not Latin-alnum.
pub fn is_latin_alnum(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// True for any Unicode whitespace: space, tab, newline, U+3000 …
pub fn is_gap(ch: char) -> bool {
    ch.is_whitespace()
}
