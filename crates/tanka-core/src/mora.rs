//! Mora counting over hiragana readings.
//!
//! The designated script is the hiragana block from `ぁ` to `ん` plus the
//! prolonged sound mark `ー`. Every such character counts as one mora,
//! small kana included.

/// Prolonged sound mark, shared with katakana
pub const CHOONPU: char = 'ー';

pub fn is_mora_char(c: char) -> bool {
    matches!(c, 'ぁ'..='ん') || c == CHOONPU
}

/// Number of designated-script characters in `reading`; anything else is ignored
pub fn count_mora(reading: &str) -> usize {
    reading.chars().filter(|c| is_mora_char(*c)).count()
}

/// Non-empty and written only in the designated script
pub fn is_hiragana_reading(reading: &str) -> bool {
    !reading.is_empty() && reading.chars().all(is_mora_char)
}
