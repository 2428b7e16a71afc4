use thiserror::Error;

use moniker_resolver::error::ResolverError;
use moniker_storage::error::StorageError;
use moniker_types::error::MonikerError;

/// Errors surfaced by the moniker tool.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("{0}")]
    Invalid(#[from] MonikerError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("resolver error: {0}")]
    ResolverError(#[from] ResolverError),

    #[error("wallet name for {address} was not saved")]
    NameNotSaved { address: String },

    #[error("rename screen closed before producing a view state")]
    ScreenClosed,

    #[error("prompt error: {0}")]
    PromptError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}
