//! Field validation: validators paired with the message keys they report.

use crate::plugin::RenderContext;
use crate::validator::{ValidatorError, ValidatorRule, build_validator};

/// Message key reported for an empty required field.
pub const REQUIRED: &str = "required";

/// Message key reported by [`FieldRules::pattern`] by default.
pub const INVALID_FORMAT: &str = "invalid-format";

/// The validation rules of one form field.
///
/// Rules are checked in the order they were added; the first failing rule
/// decides the message key. An empty value skips all rules: it fails with
/// [`REQUIRED`] when the field is required and passes otherwise.
///
/// # Example
///
/// ```
/// use uikit::FieldRules;
///
/// let rules = FieldRules::new().required().pattern(r"^\d+$").unwrap();
/// assert_eq!(rules.check(""), Some("required"));
/// assert_eq!(rules.check("12a"), Some("invalid-format"));
/// assert_eq!(rules.check("123"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    required: bool,
    rules: Vec<(ValidatorRule, String)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Add a rule reporting `message_key` when it fails.
    pub fn rule(mut self, rule: ValidatorRule, message_key: impl Into<String>) -> Self {
        self.rules.push((rule, message_key.into()));
        self
    }

    /// Add a pattern rule reporting [`INVALID_FORMAT`] when it fails.
    pub fn pattern(self, pattern: &str) -> Result<Self, ValidatorError> {
        let rule = build_validator(pattern)?;
        Ok(self.rule(rule, INVALID_FORMAT))
    }

    /// Message key of the first failed rule, or `None` if the value passes.
    pub fn check(&self, value: &str) -> Option<&str> {
        if value.is_empty() {
            return self.required.then_some(REQUIRED);
        }
        self.rules
            .iter()
            .find(|(rule, _)| !rule.is_match(value))
            .map(|(_, key)| key.as_str())
    }

    /// Like [`check`](Self::check), rejecting an absent value.
    pub fn check_present(&self, value: Option<&str>) -> Result<Option<&str>, ValidatorError> {
        let value = value.ok_or_else(|| ValidatorError::InvalidInput {
            rule: String::from("field"),
        })?;
        Ok(self.check(value))
    }

    /// Localized error message for `value`, or `None` if it passes.
    pub fn error_message(&self, value: &str, ctx: &RenderContext<'_>) -> Option<String> {
        self.check(value).map(|key| ctx.t(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_empty_value_passes() {
        let rules = FieldRules::new().pattern("^a").unwrap();
        assert_eq!(rules.check(""), None);
        assert_eq!(rules.check("b"), Some(INVALID_FORMAT));
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = FieldRules::new()
            .rule(build_validator(".{3,}").unwrap(), "too-short")
            .pattern(r"^\d+$")
            .unwrap();
        assert_eq!(rules.check("1a"), Some("too-short"));
        assert_eq!(rules.check("12a"), Some(INVALID_FORMAT));
    }

    #[test]
    fn absent_value_is_rejected() {
        let rules = FieldRules::new().required();
        assert!(matches!(
            rules.check_present(None),
            Err(ValidatorError::InvalidInput { .. })
        ));
        assert_eq!(rules.check_present(Some("")).unwrap(), Some(REQUIRED));
    }
}
