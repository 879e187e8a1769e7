use std::borrow::Borrow;
use std::fmt;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::components::Direction;

/// Languages written right to left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "iw", "ur"];

/// An opaque `language-REGION` locale identifier such as `en-US` or `zh-HK`.
///
/// Codes compare as exact, case-sensitive strings. No normalization happens at
/// runtime: `en-us` and `en-US` are different locales, and legacy codes like
/// `iw-IL` stay as written.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag, everything before the first `-`.
    pub fn language(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(language, _)| language)
    }

    /// The region subtag, everything after the first `-`, if present.
    pub fn region(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, region)| region)
    }

    /// Whether the code is syntactically valid BCP-47.
    ///
    /// The code is only checked, never rewritten.
    pub fn is_well_formed(&self) -> bool {
        LanguageIdentifier::try_from_str(&self.0).is_ok()
    }

    /// Text direction for content in this locale.
    pub fn direction(&self) -> Direction {
        if RTL_LANGUAGES.contains(&self.language()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&LocaleCode> for LocaleCode {
    fn from(code: &LocaleCode) -> Self {
        code.clone()
    }
}
