//! Validator factory for form field values.
//!
//! A [`ValidatorRule`] binds a pattern matcher once and can then be evaluated
//! any number of times, from any thread. Rules report a plain pass/fail; the
//! caller decides which message key a failure maps to.

mod error;
mod matcher;
mod rule;

pub use error::ValidatorError;
pub use matcher::{Captures, Matcher};
pub use rule::{ValidatorRule, build_validator};
