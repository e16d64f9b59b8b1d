//! Kana classification and katakana to hiragana folding

const KATAKANA_OFFSET: u32 = 0x60;

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || c == 'ー'
}

/// Hiragana counterpart of a katakana character; other characters unchanged
pub fn katakana_to_hiragana(c: char) -> char {
    if matches!(c, '\u{30A1}'..='\u{30F6}') {
        char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

pub fn to_hiragana(text: &str) -> String {
    text.chars().map(katakana_to_hiragana).collect()
}

/// Characters read silently: punctuation, brackets and spaces
pub fn is_silent(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '、' | '。' | '，' | '．' | '・' | '！' | '？' | '!' | '?' | '「' | '」' | '『' | '』'
                | '（' | '）' | '(' | ')' | '…' | '〜' | '~' | ',' | '.'
        )
}
