//! Record envelope errors.

use crate::form::FlattenError;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("record field {0:?} is not a mapping")]
    NotAMapping(&'static str),

    #[error("record is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flatten(#[from] FlattenError),
}
