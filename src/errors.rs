//! Error types for hdd-diversity.
//!
//! Every fallible operation in the crate surfaces one of these variants.
//! Degenerate scores (empty text under a length-normalizing aggregation)
//! are not errors; they come back as `Ok(None)` from the scoring entry
//! points.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HddError>;

/// Main error type for hdd-diversity
#[derive(Error, Debug, Clone)]
pub enum HddError {
    /// `fit` was called with zero texts
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Input shape and tokenizer configuration disagree:
    /// raw text needs a tokenizer, pre-tokenized text forbids one
    #[error("Tokenizer mismatch: {message}")]
    TokenizerMismatch { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Scoring was requested before the corpus was fitted
    #[error("Corpus not fitted: call fit before {operation}")]
    NotFitted { operation: String },
}

impl HddError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a tokenizer mismatch error
    pub fn tokenizer_mismatch(message: impl Into<String>) -> Self {
        Self::TokenizerMismatch {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a not-fitted error naming the refused operation
    pub fn not_fitted(operation: impl Into<String>) -> Self {
        Self::NotFitted {
            operation: operation.into(),
        }
    }
}
