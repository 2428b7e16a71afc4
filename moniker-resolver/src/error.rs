use thiserror::Error;

/// Errors from a name resolution attempt.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("resolution timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
