//! Soft diagnostics produced while resolving and checking messages.

use std::fmt;

use crate::locale::LocaleCode;

/// A message key that was absent from both the requested and the fallback
/// bundle. Resolution returned the key itself.
///
/// One record exists per locale and key; repeated misses bump `hits`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingMessageKey {
    /// Locale the lookup was made for.
    pub locale: LocaleCode,
    /// Fallback locale that was also consulted.
    pub fallback: LocaleCode,
    pub key: String,
    /// Similar keys present in the requested bundle.
    pub suggestions: Vec<String>,
    /// Number of lookups that missed this key.
    pub hits: usize,
}

impl fmt::Display for MissingMessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing message key '{}' in '{}' (fallback '{}')",
            self.key, self.locale, self.fallback
        )?;
        if !self.suggestions.is_empty() {
            write!(f, "; did you mean: {}?", self.suggestions.join(", "))?;
        }
        Ok(())
    }
}

/// A coverage gap between a translated bundle and its source bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BundleWarning {
    /// The source defines a key the translation lacks.
    MissingKey { key: String, locale: LocaleCode },
    /// The translation defines a key the source does not.
    UnknownKey { key: String, locale: LocaleCode },
}

impl fmt::Display for BundleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleWarning::MissingKey { key, locale } => {
                write!(f, "'{locale}' has no translation for '{key}'")
            }
            BundleWarning::UnknownKey { key, locale } => {
                write!(f, "'{locale}' defines '{key}', which the source bundle does not")
            }
        }
    }
}
