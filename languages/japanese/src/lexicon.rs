use std::collections::HashMap;

/// Surface form -> reading table used for longest-match segmentation
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
    max_chars: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object of `"surface": "reading"` pairs
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;

        let mut lexicon = Self::new();
        for (surface, reading) in entries {
            lexicon.insert(surface, reading);
        }
        Ok(lexicon)
    }

    pub fn insert(&mut self, surface: String, reading: String) {
        if surface.is_empty() || reading.is_empty() {
            return;
        }
        self.max_chars = self.max_chars.max(surface.chars().count());
        self.entries.insert(surface, reading);
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `other` win over ours
    pub fn merge(mut self, other: Lexicon) -> Self {
        for (surface, reading) in other.entries {
            self.insert(surface, reading);
        }
        self
    }

    /// Longest entry that prefixes `chars`, as (length in chars, reading)
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let limit = self.max_chars.min(chars.len());

        (1..=limit).rev().find_map(|len| {
            let surface: String = chars[..len].iter().collect();
            self.get(&surface).map(|reading| (len, reading))
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_entry_wins() {
        let lexicon = Lexicon::from_json(r#"{ "古": "ふる", "古池": "ふるいけ", "池": "いけ" }"#)
            .unwrap();
        let chars: Vec<char> = "古池や".chars().collect();

        assert_eq!(lexicon.longest_match(&chars), Some((2, "ふるいけ")));
        assert_eq!(lexicon.longest_match(&chars[1..]), Some((1, "いけ")));
        assert_eq!(lexicon.longest_match(&chars[2..]), None);
    }

    #[test]
    fn test_merge_overrides_readings() {
        let base = Lexicon::from_json(r#"{ "行": "い" }"#).unwrap();
        let extra = Lexicon::from_json(r#"{ "行": "ゆ", "道": "みち" }"#).unwrap();

        let merged = base.merge(extra);
        assert_eq!(merged.get("行"), Some("ゆ"));
        assert_eq!(merged.entry_count(), 2);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let lexicon = Lexicon::from_json(r#"{ "": "あ", "空": "" }"#).unwrap();
        assert!(lexicon.is_empty());
    }
}
