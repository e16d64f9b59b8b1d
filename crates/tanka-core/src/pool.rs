use std::collections::HashSet;

use rand::Rng;
use tanka_types::PhraseClass;

/// Phrases of one class, unique by exact text
#[derive(Debug, Clone, Default)]
pub struct PhrasePool {
    phrases: Vec<String>,
    index: HashSet<String>,
}

impl PhrasePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `text` unless already present; returns whether it was added
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.index.contains(&text) {
            return false;
        }
        self.index.insert(text.clone());
        self.phrases.push(text);
        true
    }

    /// Insert every phrase, returning how many were new
    pub fn extend<I, S>(&mut self, phrases: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for phrase in phrases {
            if self.insert(phrase) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    /// Uniform pick, `None` when empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.phrases.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..self.phrases.len());
        Some(&self.phrases[i])
    }
}

/// Both class pools plus the time of the last accepted submission
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    pub five: PhrasePool,
    pub seven: PhrasePool,
    /// Milliseconds since the Unix epoch
    pub last_accepted_at: Option<u64>,
}

impl PhraseBook {
    pub fn pool(&self, class: PhraseClass) -> &PhrasePool {
        match class {
            PhraseClass::Five => &self.five,
            PhraseClass::Seven => &self.seven,
        }
    }

    pub fn pool_mut(&mut self, class: PhraseClass) -> &mut PhrasePool {
        match class {
            PhraseClass::Five => &mut self.five,
            PhraseClass::Seven => &mut self.seven,
        }
    }

    /// (class 5, class 7) sizes
    pub fn counts(&self) -> (usize, usize) {
        (self.five.len(), self.seven.len())
    }
}
