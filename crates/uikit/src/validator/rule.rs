//! Immutable validator rules and the factory that builds them.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::validator::{Matcher, ValidatorError};

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A reusable pass/fail predicate over a field value.
///
/// Rules are cheap to clone and share one immutable predicate. Evaluation has
/// no side effects, so a rule may be called concurrently from any number of
/// threads.
///
/// # Example
///
/// ```
/// use uikit::build_validator;
///
/// let digits = build_validator(r"^\d+$").unwrap();
/// assert!(digits.is_match("123"));
/// assert!(!digits.is_match("12a"));
/// ```
#[derive(Clone)]
pub struct ValidatorRule {
    description: Arc<str>,
    predicate: Arc<Predicate>,
}

/// Compile `pattern` and bind it into a [`ValidatorRule`].
///
/// The rule passes when the pattern matches anywhere in the value. Supply `^`
/// and `$` in the pattern for whole-value matching.
pub fn build_validator(pattern: &str) -> Result<ValidatorRule, ValidatorError> {
    let regex = Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(ValidatorRule::from_matcher(regex))
}

impl ValidatorRule {
    /// Bind any [`Matcher`] implementation into a rule.
    pub fn from_matcher<M>(matcher: M) -> Self
    where
        M: Matcher + Send + Sync + 'static,
    {
        let description = matcher.describe();
        Self::from_fn(description, move |value| matcher.matches(value).is_some())
    }

    /// Wrap an arbitrary predicate.
    pub fn from_fn(
        description: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            description: Arc::from(description.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the rule against a present value.
    pub fn is_match(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// Evaluate the rule against a value that may be absent.
    ///
    /// Absent values are a caller bug and are rejected rather than treated as
    /// the empty string.
    pub fn check(&self, value: Option<&str>) -> Result<bool, ValidatorError> {
        let value = value.ok_or_else(|| ValidatorError::InvalidInput {
            rule: self.description.to_string(),
        })?;
        Ok(self.is_match(value))
    }

    /// Pattern or description this rule was built from.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// A rule that passes only when both rules pass.
    pub fn and(&self, other: &ValidatorRule) -> ValidatorRule {
        let (left, right) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Self::from_fn(
            format!("({}) and ({})", self.description, other.description),
            move |value| left(value) && right(value),
        )
    }

    /// A rule that passes when either rule passes.
    pub fn or(&self, other: &ValidatorRule) -> ValidatorRule {
        let (left, right) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Self::from_fn(
            format!("({}) or ({})", self.description, other.description),
            move |value| left(value) || right(value),
        )
    }

    /// A rule that passes exactly when this one fails.
    pub fn negate(&self) -> ValidatorRule {
        let inner = Arc::clone(&self.predicate);
        Self::from_fn(format!("not ({})", self.description), move |value| {
            !inner(value)
        })
    }

    /// Unwrap the rule into a plain closure.
    pub fn into_fn(self) -> impl Fn(&str) -> bool + Send + Sync + Clone {
        move |value: &str| self.is_match(value)
    }
}

impl fmt::Debug for ValidatorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_combines_predicates() {
        let digits = build_validator(r"\d").unwrap();
        let letters = build_validator("[a-z]").unwrap();

        let both = digits.and(&letters);
        assert!(both.is_match("a1"));
        assert!(!both.is_match("11"));

        let either = digits.or(&letters);
        assert!(either.is_match("11"));
        assert!(!either.is_match("--"));

        assert!(digits.negate().is_match("abc"));
        assert_eq!(digits.negate().description(), r"not (\d)");
    }

    #[test]
    fn into_fn_keeps_semantics() {
        let check = build_validator("^ok$").unwrap().into_fn();
        assert!(check("ok"));
        assert!(!check("okay"));
    }
}
