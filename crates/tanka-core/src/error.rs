use tanka_config::validation::ValidationPolicy;
use tanka_types::PhraseClass;

/// Why a phrase failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPhrase {
    #[error("phrase is empty")]
    Empty,

    #[error("phrase has {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },

    #[error("phrase has {len} characters, class {class} needs at least {min}")]
    TooShort {
        class: PhraseClass,
        len: usize,
        min: usize,
    },

    #[error("character '{0}' is not allowed")]
    DisallowedCharacter(char),

    #[error("no reading given and none could be derived")]
    MissingReading,

    #[error("reading '{0}' is not written in hiragana")]
    ReadingNotHiragana(String),

    #[error("reading has {mora} mora, class {class} does not accept that")]
    MoraMismatch { class: PhraseClass, mora: usize },
}

/// Submission refused; the display text is the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{}", invalid_message(.policy))]
    Invalid {
        policy: ValidationPolicy,
        reason: InvalidPhrase,
    },

    #[error("この{0}音フレーズはすでに登録されています。")]
    Duplicate(PhraseClass),

    #[error("連続投稿は{limit_seconds}秒あけてください。")]
    RateLimited {
        limit_seconds: u64,
        retry_after_ms: u64,
    },
}

fn invalid_message(policy: &ValidationPolicy) -> &'static str {
    match policy {
        ValidationPolicy::Mora => "読みが正しくありません。（ひらがなで5音/7〜8音）",
        ValidationPolicy::CharLength => {
            "使用できない文字が含まれているか、長さが正しくありません。"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("no phrases available for class {0}")]
    NoPhrases(PhraseClass),
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
