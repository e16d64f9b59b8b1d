use std::path::Path;

use serde::{Deserialize, Serialize};
use tanka_types::PhraseClass;

use crate::error::BundleError;

/// Baseline phrases shipped with the program
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseBundle {
    #[serde(default)]
    pub phrases5: Vec<String>,
    #[serde(default)]
    pub phrases7: Vec<String>,
}

impl PhraseBundle {
    pub fn from_json(json: &str) -> Result<Self, BundleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load embedded bundle data
    pub fn load_embedded() -> Result<Self, BundleError> {
        let json = include_str!("../data/phrase.json");
        let bundle = Self::from_json(json)?;
        tracing::info!(
            "Loaded embedded phrase bundle ({} + {} phrases)",
            bundle.phrases5.len(),
            bundle.phrases7.len()
        );
        Ok(bundle)
    }

    /// Load bundle from file path
    pub fn load_from_file(path: &Path) -> Result<Self, BundleError> {
        tracing::info!("Loading phrase bundle from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn phrases(&self, class: PhraseClass) -> &[String] {
        match class {
            PhraseClass::Five => &self.phrases5,
            PhraseClass::Seven => &self.phrases7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_bundle_has_both_classes() {
        let bundle = PhraseBundle::load_embedded().unwrap();
        assert!(!bundle.phrases(PhraseClass::Five).is_empty());
        assert!(!bundle.phrases(PhraseClass::Seven).is_empty());
    }

    #[test]
    fn test_missing_field_is_empty() {
        let bundle = PhraseBundle::from_json(r#"{ "phrases5": ["はる"] }"#).unwrap();
        assert_eq!(bundle.phrases5, vec!["はる"]);
        assert!(bundle.phrases7.is_empty());
    }

    #[test]
    fn test_file_errors_surface() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrase.json");

        assert!(matches!(
            PhraseBundle::load_from_file(&path),
            Err(BundleError::IoError(_))
        ));

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            PhraseBundle::load_from_file(&path),
            Err(BundleError::ParseError(_))
        ));
    }
}
