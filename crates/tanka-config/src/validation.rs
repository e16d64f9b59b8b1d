use std::env;

use serde::{Deserialize, Serialize};

/// How a candidate phrase is judged
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Count hiragana mora of the reading: 5, or 7 to 8
    #[default]
    Mora,
    /// No reading: allowed characters and per-class length bounds only
    CharLength,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ValidationConfig {
    pub policy: ValidationPolicy,
    /// JSON lexicon (surface -> reading) used to derive missing readings
    pub lexicon_path: Option<String>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        let policy = match env::var("TANKA_VALIDATION_POLICY").as_deref() {
            Ok("char_length") => ValidationPolicy::CharLength,
            _ => ValidationPolicy::Mora,
        };

        Self {
            policy,
            lexicon_path: env::var("TANKA_LEXICON").ok(),
        }
    }
}
