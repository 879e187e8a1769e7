//! Error types for locale registration and selection.

use thiserror::Error;

use crate::locale::LocaleCode;

/// An error raised by [`MessageRegistry`] or [`LocaleStore`] operations.
///
/// [`MessageRegistry`]: crate::MessageRegistry
/// [`LocaleStore`]: crate::LocaleStore
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The locale was never registered.
    #[error("unknown locale '{locale}'{}", format_suggestions(suggestions))]
    UnknownLocale {
        locale: LocaleCode,
        suggestions: Vec<String>,
    },

    /// A bundle with no messages was offered for registration.
    #[error("message bundle for '{locale}' is empty")]
    EmptyBundle { locale: LocaleCode },

    /// A registry was built from no bundles at all.
    #[error("message registry needs at least one bundle")]
    EmptyRegistry,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}
