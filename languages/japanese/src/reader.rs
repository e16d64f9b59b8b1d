use std::path::Path;

use tanka_core::ReadingProvider;
use unicode_normalization::UnicodeNormalization;

use crate::kana::{is_kana, is_silent, katakana_to_hiragana, to_hiragana};
use crate::lexicon::{Lexicon, LexiconError};
use crate::loader::LexiconLoader;

/// One token of segmented text with its hiragana reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub surface: String,
    pub reading: String,
}

/// Japanese reading derivation: lexicon longest match, kana read as written
pub struct JapaneseReader {
    lexicon: Lexicon,
}

impl JapaneseReader {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Embedded lexicon, extended by `additional` when given.
    ///
    /// Fails if either source cannot be loaded; callers then run without a
    /// reader.
    pub fn init(additional: Option<&Path>) -> Result<Self, LexiconError> {
        let mut lexicon = LexiconLoader::load_embedded()?;

        if let Some(path) = additional {
            let extra = LexiconLoader::load_from_file(path)?;
            tracing::info!("Merging additional lexicon from: {}", path.display());
            lexicon = LexiconLoader::merge(lexicon, extra);
        }

        Ok(Self::new(lexicon))
    }

    pub fn normalize(&self, text: &str) -> String {
        text.nfkc().collect()
    }

    /// Split `text` into read segments, `None` if any part has no known reading
    pub fn segment(&self, text: &str) -> Option<Vec<Segment>> {
        let normalized = self.normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, reading)) = self.lexicon.longest_match(&chars[i..]) {
                segments.push(Segment {
                    surface: chars[i..i + len].iter().collect(),
                    reading: to_hiragana(reading),
                });
                i += len;
                continue;
            }

            let c = chars[i];
            if is_kana(c) {
                segments.push(Segment {
                    surface: c.to_string(),
                    reading: katakana_to_hiragana(c).to_string(),
                });
            } else if !is_silent(c) {
                tracing::debug!("No reading for '{}' in '{}'", c, text);
                return None;
            }
            i += 1;
        }

        Some(segments)
    }
}

impl ReadingProvider for JapaneseReader {
    fn derive_reading(&self, text: &str) -> Option<String> {
        let reading: String = self
            .segment(text)?
            .into_iter()
            .map(|s| s.reading)
            .collect();

        if reading.is_empty() { None } else { Some(reading) }
    }
}
