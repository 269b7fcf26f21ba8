use thiserror::Error;

/// Errors that can occur when building a configured [`Normalizer`](crate::Normalizer).
///
/// The free normalization functions are total and never produce one of
/// these; only configuration validation can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
