//! The matcher capability bound into validator rules.

use regex::Regex;

/// Capture groups produced by a successful match.
///
/// Index 0 is the whole match. Groups that did not participate are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'h> {
    groups: Vec<Option<&'h str>>,
}

impl<'h> Captures<'h> {
    /// Create captures from an ordered list of groups.
    pub fn new(groups: Vec<Option<&'h str>>) -> Self {
        Self { groups }
    }

    /// The text of the whole match.
    pub fn full(&self) -> Option<&'h str> {
        self.get(0)
    }

    /// The text of group `index`, if it participated in the match.
    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.groups.get(index).copied().flatten()
    }

    /// Number of groups, including the whole match.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Anything that can search a string for a pattern.
///
/// `matches` must find a match anywhere in `input`; anchoring is the pattern's
/// business, not the matcher's. Implementations must be free of shared mutable
/// state so one matcher can be evaluated concurrently.
pub trait Matcher {
    /// Search `input`, returning the captures of the first match.
    fn matches<'h>(&self, input: &'h str) -> Option<Captures<'h>>;

    /// Human-readable form of the pattern, used in diagnostics.
    fn describe(&self) -> String {
        String::from("<matcher>")
    }
}

impl Matcher for Regex {
    fn matches<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        self.captures(input).map(|caps| {
            Captures::new(
                caps.iter()
                    .map(|group| group.map(|m| m.as_str()))
                    .collect(),
            )
        })
    }

    fn describe(&self) -> String {
        self.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_matcher_reports_groups() {
        let re = Regex::new(r"(\d+)-(x)?").unwrap();
        let caps = re.matches("id 42-").unwrap();
        assert_eq!(caps.full(), Some("42-"));
        assert_eq!(caps.get(1), Some("42"));
        assert_eq!(caps.get(2), None);
        assert_eq!(caps.len(), 3);
    }

    #[test]
    fn regex_matcher_returns_none_without_match() {
        let re = Regex::new("abc").unwrap();
        assert!(re.matches("xyz").is_none());
    }
}
