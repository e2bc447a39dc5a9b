//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur when constructing or configuring a filter
///
/// `add` and `check` are total; only construction and configuration fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid filter parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilterError {
    pub(crate) fn invalid_expected_items(n: usize) -> Self {
        Self::InvalidParameter(format!("expected item count must be positive, got {n}"))
    }

    pub(crate) fn invalid_fpr(eps: f64) -> Self {
        Self::InvalidParameter(format!(
            "false positive rate must be strictly between 0 and 1, got {eps}"
        ))
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;
