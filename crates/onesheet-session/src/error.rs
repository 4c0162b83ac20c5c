use thiserror::Error;

use onesheet_core::models::field::FieldPath;
use onesheet_generate::GenerateError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("submit refused: input is empty")]
    EmptyInput,

    #[error("submit refused: a generation is already in flight")]
    AlreadyGenerating,

    #[error("submit is only available from the input screen")]
    NotInInput,

    #[error("only available in the preview")]
    NotInPreview,

    #[error("field index out of range: {0}")]
    FieldOutOfRange(FieldPath),

    #[error("stale generation result discarded")]
    StaleResult,

    #[error(transparent)]
    Generation(#[from] GenerateError),
}
