use std::path::Path;

use crate::lexicon::{Lexicon, LexiconError};

pub struct LexiconLoader;

impl LexiconLoader {
    /// Load embedded lexicon data
    pub fn load_embedded() -> Result<Lexicon, LexiconError> {
        let json = include_str!("../data/lexicon.json");
        tracing::info!("Loading embedded reading lexicon...");
        let lexicon = Lexicon::from_json(json)?;
        tracing::info!("Loaded {} lexicon entries", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Load lexicon from file path
    pub fn load_from_file(path: &Path) -> Result<Lexicon, LexiconError> {
        tracing::info!("Loading reading lexicon from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let lexicon = Lexicon::from_json(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Merge two lexicons (later entries override earlier ones by surface)
    pub fn merge(base: Lexicon, additional: Lexicon) -> Lexicon {
        base.merge(additional)
    }
}
