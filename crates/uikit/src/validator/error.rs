//! Error types for validator construction and evaluation.

use thiserror::Error;

/// An error raised while building or evaluating a [`ValidatorRule`].
///
/// [`ValidatorRule`]: crate::ValidatorRule
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The rule was evaluated without a value.
    #[error("validator '{rule}' received no input value")]
    InvalidInput { rule: String },
}
