use thiserror::Error;

/// Errors returned by the transform engine.
///
/// A run that changes nothing is not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
