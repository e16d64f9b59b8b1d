use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    SubmitPhrase(PhraseSubmission),
    GenerateTanka,
    ShowTanka(Tanka),
    Status(StatusMessage),
    Help,
    Shutdown,
}

/// Syllable-count class of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseClass {
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "7")]
    Seven,
}

impl PhraseClass {
    pub const ALL: [PhraseClass; 2] = [PhraseClass::Five, PhraseClass::Seven];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseClass::Five => "5",
            PhraseClass::Seven => "7",
        }
    }
}

impl fmt::Display for PhraseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClass(pub String);

impl fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown phrase class '{}', expected 5 or 7", self.0)
    }
}

impl std::error::Error for UnknownClass {}

impl FromStr for PhraseClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5" => Ok(PhraseClass::Five),
            "7" => Ok(PhraseClass::Seven),
            other => Err(UnknownClass(other.to_string())),
        }
    }
}

/// A phrase offered by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSubmission {
    pub class: PhraseClass,
    pub text: String,
    pub reading: Option<String>,
}

/// Shared document stored in the remote collection, keyed by `text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseDocument {
    #[serde(rename = "type")]
    pub class: PhraseClass,
    pub text: String,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

/// Five composed lines, 5-7-5-7-7
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tanka {
    pub lines: [String; 5],
}

impl fmt::Display for Tanka {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_parses_both_spellings() {
        assert_eq!("5".parse::<PhraseClass>(), Ok(PhraseClass::Five));
        assert_eq!(" 7 ".parse::<PhraseClass>(), Ok(PhraseClass::Seven));
        assert!("6".parse::<PhraseClass>().is_err());
    }

    #[test]
    fn test_document_uses_shared_field_names() {
        let doc = PhraseDocument {
            class: PhraseClass::Seven,
            text: "しずかさや".to_string(),
            reading: None,
            created_at: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "7");
        assert_eq!(json["createdAt"], 1_700_000_000_000u64);

        let back: PhraseDocument =
            serde_json::from_str(r#"{"type":"5","text":"ふるいけや","createdAt":1}"#).unwrap();
        assert_eq!(back.class, PhraseClass::Five);
        assert_eq!(back.reading, None);
    }

    #[test]
    fn test_tanka_displays_one_line_each() {
        let tanka = Tanka {
            lines: ["a", "b", "c", "d", "e"].map(String::from),
        };
        assert_eq!(tanka.to_string(), "a\nb\nc\nd\ne");
    }
}
