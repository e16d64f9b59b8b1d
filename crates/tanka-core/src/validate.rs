use std::sync::Arc;

use tanka_config::validation::ValidationPolicy;
use tanka_types::PhraseClass;

use crate::error::InvalidPhrase;
use crate::mora::{count_mora, is_hiragana_reading};
use crate::reading::ReadingProvider;

/// Longest phrase accepted under any policy, in characters
pub const MAX_PHRASE_CHARS: usize = 20;

/// Judges candidate phrases under one policy
#[derive(Clone)]
pub struct Validator {
    policy: ValidationPolicy,
    reader: Option<Arc<dyn ReadingProvider>>,
}

impl Validator {
    /// `reader` derives readings the user left out; without it such phrases are rejected
    pub fn new(policy: ValidationPolicy, reader: Option<Arc<dyn ReadingProvider>>) -> Self {
        Self { policy, reader }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn has_reader(&self) -> bool {
        self.reader.is_some()
    }

    pub fn validate(&self, phrase: &str, reading: Option<&str>, class: PhraseClass) -> bool {
        self.check(phrase, reading, class).is_ok()
    }

    /// Check `phrase` and return the reading it was judged by, if the policy uses one
    pub fn check(
        &self,
        phrase: &str,
        reading: Option<&str>,
        class: PhraseClass,
    ) -> Result<Option<String>, InvalidPhrase> {
        let len = phrase.chars().count();
        if len == 0 {
            return Err(InvalidPhrase::Empty);
        }
        if len > MAX_PHRASE_CHARS {
            return Err(InvalidPhrase::TooLong {
                len,
                max: MAX_PHRASE_CHARS,
            });
        }

        match self.policy {
            ValidationPolicy::Mora => self.check_mora(phrase, reading, class).map(Some),
            ValidationPolicy::CharLength => check_char_length(phrase, len, class).map(|_| None),
        }
    }

    fn check_mora(
        &self,
        phrase: &str,
        reading: Option<&str>,
        class: PhraseClass,
    ) -> Result<String, InvalidPhrase> {
        let reading = match reading.map(str::trim).filter(|r| !r.is_empty()) {
            Some(given) => given.to_string(),
            None => self
                .reader
                .as_ref()
                .and_then(|reader| reader.derive_reading(phrase))
                .ok_or(InvalidPhrase::MissingReading)?,
        };

        if !is_hiragana_reading(&reading) {
            return Err(InvalidPhrase::ReadingNotHiragana(reading));
        }

        let mora = count_mora(&reading);
        let fits = match class {
            PhraseClass::Five => mora == 5,
            PhraseClass::Seven => mora == 7 || mora == 8,
        };
        if !fits {
            return Err(InvalidPhrase::MoraMismatch { class, mora });
        }

        Ok(reading)
    }
}

fn min_chars(class: PhraseClass) -> usize {
    match class {
        PhraseClass::Five => 2,
        PhraseClass::Seven => 3,
    }
}

/// Kana, ideographs and alphanumerics, half or full width
fn is_allowed_char(c: char) -> bool {
    matches!(c,
        'ぁ'..='ゖ'
        | 'ァ'..='ヺ'
        | 'ー'
        | '々'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '０'..='９'
        | 'Ａ'..='Ｚ'
        | 'ａ'..='ｚ'
    ) || c.is_ascii_alphanumeric()
}

fn check_char_length(phrase: &str, len: usize, class: PhraseClass) -> Result<(), InvalidPhrase> {
    if let Some(bad) = phrase.chars().find(|c| !is_allowed_char(*c)) {
        return Err(InvalidPhrase::DisallowedCharacter(bad));
    }

    let min = min_chars(class);
    if len < min {
        return Err(InvalidPhrase::TooShort { class, len, min });
    }

    Ok(())
}
