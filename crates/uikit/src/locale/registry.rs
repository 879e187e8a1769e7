//! The set of loaded message bundles plus active and fallback pointers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::locale::{LocaleCode, LocaleError, MessageBundle, compute_suggestions};

/// All loaded bundles keyed by locale.
///
/// A registry is never empty and every bundle in it holds at least one
/// message. The first registered locale becomes the fallback unless another
/// is chosen with [`with_fallback`](Self::with_fallback); the active locale
/// starts out equal to the fallback.
///
/// # Example
///
/// ```
/// use uikit::{MessageBundle, MessageRegistry};
///
/// let registry = MessageRegistry::from_bundles([
///     ("en-US", MessageBundle::new().with("greet", "Hello")),
///     ("fr-FR", MessageBundle::new().with("greet", "Bonjour")),
/// ])
/// .unwrap()
/// .with_active("fr-FR")
/// .unwrap();
///
/// assert_eq!(registry.fallback().as_str(), "en-US");
/// assert_eq!(registry.active().as_str(), "fr-FR");
/// ```
#[derive(Clone, Debug)]
pub struct MessageRegistry {
    bundles: HashMap<LocaleCode, Arc<MessageBundle>>,
    /// Registration order, for stable iteration.
    order: Vec<LocaleCode>,
    fallback: LocaleCode,
    active: LocaleCode,
}

impl MessageRegistry {
    /// Create a registry holding a single bundle, which becomes both the
    /// fallback and the active locale.
    pub fn new(locale: impl Into<LocaleCode>, bundle: MessageBundle) -> Result<Self, LocaleError> {
        let locale = locale.into();
        if bundle.is_empty() {
            return Err(LocaleError::EmptyBundle { locale });
        }
        Ok(Self {
            bundles: HashMap::from([(locale.clone(), Arc::new(bundle))]),
            order: vec![locale.clone()],
            fallback: locale.clone(),
            active: locale,
        })
    }

    /// Create a registry from bundles in order. The first becomes the
    /// fallback. Later duplicates replace earlier bundles for the same code.
    pub fn from_bundles<I, L>(bundles: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = (L, MessageBundle)>,
        L: Into<LocaleCode>,
    {
        let mut bundles = bundles.into_iter();
        let (locale, bundle) = bundles.next().ok_or(LocaleError::EmptyRegistry)?;
        let mut registry = Self::new(locale, bundle)?;
        for (locale, bundle) in bundles {
            registry.insert(locale, bundle)?;
        }
        Ok(registry)
    }

    /// Choose a different fallback locale.
    pub fn with_fallback(mut self, locale: impl Into<LocaleCode>) -> Result<Self, LocaleError> {
        self.set_fallback(locale)?;
        Ok(self)
    }

    /// Choose a different active locale.
    pub fn with_active(mut self, locale: impl Into<LocaleCode>) -> Result<Self, LocaleError> {
        self.set_active(locale)?;
        Ok(self)
    }

    /// Insert or replace the bundle for `locale`, returning the replaced one.
    pub fn insert(
        &mut self,
        locale: impl Into<LocaleCode>,
        bundle: MessageBundle,
    ) -> Result<Option<Arc<MessageBundle>>, LocaleError> {
        let locale = locale.into();
        if bundle.is_empty() {
            return Err(LocaleError::EmptyBundle { locale });
        }
        if !self.bundles.contains_key(&locale) {
            self.order.push(locale.clone());
        }
        Ok(self.bundles.insert(locale, Arc::new(bundle)))
    }

    pub fn get(&self, locale: &str) -> Option<&Arc<MessageBundle>> {
        self.bundles.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Registered locales in registration order.
    pub fn locales(&self) -> &[LocaleCode] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn fallback(&self) -> &LocaleCode {
        &self.fallback
    }

    pub fn active(&self) -> &LocaleCode {
        &self.active
    }

    /// Switch the active locale. Fails without changing anything if the
    /// locale is not registered.
    pub fn set_active(&mut self, locale: impl Into<LocaleCode>) -> Result<(), LocaleError> {
        let locale = self.registered(locale.into())?;
        self.active = locale;
        Ok(())
    }

    /// Switch the fallback locale. Fails without changing anything if the
    /// locale is not registered.
    pub fn set_fallback(&mut self, locale: impl Into<LocaleCode>) -> Result<(), LocaleError> {
        let locale = self.registered(locale.into())?;
        self.fallback = locale;
        Ok(())
    }

    fn registered(&self, locale: LocaleCode) -> Result<LocaleCode, LocaleError> {
        if self.bundles.contains_key(&locale) {
            Ok(locale)
        } else {
            Err(self.unknown_locale(locale))
        }
    }

    pub(crate) fn unknown_locale(&self, locale: LocaleCode) -> LocaleError {
        let suggestions = compute_suggestions(locale.as_str(), &self.order);
        LocaleError::UnknownLocale {
            locale,
            suggestions,
        }
    }
}
