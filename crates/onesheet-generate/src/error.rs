use thiserror::Error;

use onesheet_core::error::CoreError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no credentials configured for the generation backend")]
    CredentialsMissing,

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to the one-pager schema: {0}")]
    SchemaViolation(String),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoreError),
}
