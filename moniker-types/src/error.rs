use thiserror::Error;

/// Errors raised while parsing Moniker values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonikerError {
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },
}
