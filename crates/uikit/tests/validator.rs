//! Integration tests for the validator factory.

use std::thread;

use proptest::prelude::*;
use regex::Regex;
use uikit::{Captures, Matcher, ValidatorError, ValidatorRule, build_validator};

// =========================================================================
// Matching Semantics
// =========================================================================

#[test]
fn digits_only_pattern() {
    let rule = build_validator(r"^\d+$").unwrap();
    assert!(rule.is_match("123"));
    assert!(!rule.is_match("12a"));
}

#[test]
fn unanchored_pattern_matches_anywhere() {
    let rule = build_validator(r"\d").unwrap();
    assert!(rule.is_match("abc1def"));
    assert!(!rule.is_match("abcdef"));
}

#[test]
fn empty_input_follows_pattern() {
    assert!(build_validator("^$").unwrap().is_match(""));
    assert!(build_validator("x*").unwrap().is_match(""));
    assert!(!build_validator(".").unwrap().is_match(""));
}

#[test]
fn rule_is_reusable() {
    let rule = build_validator("^[a-z]+@[a-z]+$").unwrap();
    for _ in 0..3 {
        assert!(rule.is_match("ada@example"));
        assert!(!rule.is_match("ada@"));
    }
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn invalid_pattern_is_rejected() {
    let err = build_validator("(unclosed").unwrap_err();
    match err {
        ValidatorError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn absent_input_is_rejected() {
    let rule = build_validator("^a").unwrap();
    let err = rule.check(None).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"validator '^a' received no input value");
    assert!(rule.check(Some("abc")).unwrap());
    assert!(!rule.check(Some("")).unwrap());
}

// =========================================================================
// Custom Matchers
// =========================================================================

/// Matches inputs containing a fixed ASCII word, ignoring ASCII case.
struct ContainsWord(&'static str);

impl Matcher for ContainsWord {
    fn matches<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        input
            .char_indices()
            .filter_map(|(start, _)| input.get(start..start + self.0.len()))
            .find(|candidate| candidate.eq_ignore_ascii_case(self.0))
            .map(|found| Captures::new(vec![Some(found)]))
    }
}

#[test]
fn custom_matcher_is_bound() {
    let rule = ValidatorRule::from_matcher(ContainsWord("fish"));
    assert!(rule.is_match("Red Fish"));
    assert!(!rule.is_match("Shark"));
    assert_eq!(rule.description(), "<matcher>");
}

#[test]
fn custom_matcher_captures_after_multibyte_text() {
    // 'İ' lowercases to three bytes, so offsets into a lowercased copy drift.
    let matcher = ContainsWord("fish");
    let captures = matcher.matches("İİ FISH").unwrap();
    assert_eq!(captures.full(), Some("FISH"));
    assert_eq!(matcher.matches("ßß Fish!").unwrap().full(), Some("Fish"));
    assert!(matcher.matches("İİ FIS").is_none());

    let rule = ValidatorRule::from_matcher(ContainsWord("fish"));
    assert!(rule.is_match("İİİİ fIsH"));
}

#[test]
fn regex_matcher_describes_itself() {
    let rule = ValidatorRule::from_matcher(Regex::new("^a+$").unwrap());
    assert_eq!(rule.description(), "^a+$");
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn rule_is_shared_across_threads() {
    let rule = build_validator(r"^\d{3}$").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rule = rule.clone();
            thread::spawn(move || (rule.is_match(&format!("{i}{i}{i}")), rule.is_match("1")))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }
}

// =========================================================================
// Properties
// =========================================================================

const PATTERNS: &[&str] = &[r"^\d+$", r"\d", "^$", "[aeiou]{2}", r"^\w+@\w+\.\w+$", "ab|cd"];

proptest! {
    #[test]
    fn agrees_with_partial_regex_match(index in 0..PATTERNS.len(), input in ".{0,24}") {
        let pattern = PATTERNS[index];
        let rule = build_validator(pattern).unwrap();
        let expected = Regex::new(pattern).unwrap().is_match(&input);
        prop_assert_eq!(rule.is_match(&input), expected);
    }

    #[test]
    fn negation_inverts(input in "[a-z0-9]{0,12}") {
        let rule = build_validator(r"\d").unwrap();
        prop_assert_eq!(rule.negate().is_match(&input), !rule.is_match(&input));
    }
}
