use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("input is empty")]
    EmptyInput,

    #[error("missing or empty field: {0}")]
    EmptyField(String),

    #[error("wrong {name} count: expected {expected}, got {actual}")]
    Cardinality {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid field path: {0}")]
    InvalidFieldPath(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown tone: {0}")]
    UnknownTone(String),

    #[error("unknown font style: {0}")]
    UnknownFontStyle(String),
}
