use thiserror::Error;

/// Result type alias using [`QaError`].
pub type Result<T> = std::result::Result<T, QaError>;

/// Errors raised while answering a question against the stored document.
///
/// Each external failure keeps its kind instead of collapsing to an empty
/// sentinel, so the handler can decide policy (which failures become a 400,
/// which degrade to an empty answer) at one place.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to invoke text generation model: {0}")]
    ModelError(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<anyhow::Error> for QaError {
    fn from(error: anyhow::Error) -> Self {
        QaError::AwsError(error.to_string())
    }
}
