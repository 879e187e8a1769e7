//! The shared store components resolve messages from.

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::locale::{
    BundleWarning, LocaleCode, LocaleError, MessageBundle, MessageRegistry, MissingMessageKey,
    compute_suggestions, interpolate,
};

/// Thread-safe message store with active and fallback locales.
///
/// Every operation takes `&self`, so one store can be shared by all the
/// components of a tree behind an [`Arc`]. Bundles are swapped whole under a
/// write lock: a reader sees either the old bundle or the new one, never a
/// mix. Concurrent writers are last-writer-wins.
///
/// # Example
///
/// ```
/// use uikit::{LocaleStore, MessageBundle, MessageRegistry};
///
/// let registry = MessageRegistry::from_bundles([
///     ("en-US", MessageBundle::new().with("greet", "Hello")),
///     ("fr-FR", MessageBundle::new().with("greet", "Bonjour")),
/// ])
/// .unwrap();
/// let store = LocaleStore::new(registry);
///
/// store.set_active("fr-FR").unwrap();
/// assert_eq!(store.resolve_active("greet"), "Bonjour");
/// assert_eq!(store.resolve_active("missing"), "missing");
/// assert_eq!(store.diagnostics().len(), 1);
/// ```
#[derive(Debug)]
pub struct LocaleStore {
    registry: RwLock<MessageRegistry>,
    diagnostics: Mutex<Diagnostics>,
}

/// Missing keys by locale and key, in first-seen order.
type Diagnostics = IndexMap<(LocaleCode, String), MissingMessageKey>;

impl LocaleStore {
    pub fn new(registry: MessageRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            diagnostics: Mutex::new(IndexMap::new()),
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Insert or replace the bundle for `locale`.
    ///
    /// Replacement is total: keys from the previous bundle that the new one
    /// lacks resolve through the fallback afterwards.
    pub fn register(
        &self,
        locale: impl Into<LocaleCode>,
        bundle: MessageBundle,
    ) -> Result<(), LocaleError> {
        let locale = locale.into();
        let messages = bundle.len();
        let replaced = self.write().insert(locale.clone(), bundle)?;
        debug!(%locale, messages, replaced = replaced.is_some(), "registered message bundle");
        Ok(())
    }

    /// The bundle currently registered for `locale`.
    pub fn bundle(&self, locale: &str) -> Option<Arc<MessageBundle>> {
        self.read().get(locale).cloned()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.read().contains(locale)
    }

    /// Registered locales in registration order.
    pub fn locales(&self) -> Vec<LocaleCode> {
        self.read().locales().to_vec()
    }

    /// A copy of the whole registry as it is right now.
    pub fn snapshot(&self) -> MessageRegistry {
        self.read().clone()
    }

    // =========================================================================
    // Locale Selection
    // =========================================================================

    pub fn active(&self) -> LocaleCode {
        self.read().active().clone()
    }

    /// Switch the active locale used by [`resolve_active`](Self::resolve_active).
    ///
    /// Unregistered locales are rejected and the active locale stays as it was.
    pub fn set_active(&self, locale: impl Into<LocaleCode>) -> Result<(), LocaleError> {
        let locale = locale.into();
        let mut registry = self.write();
        let previous = registry.active().clone();
        registry.set_active(locale.clone())?;
        debug!(%previous, %locale, "switched active locale");
        Ok(())
    }

    pub fn fallback(&self) -> LocaleCode {
        self.read().fallback().clone()
    }

    pub fn set_fallback(&self, locale: impl Into<LocaleCode>) -> Result<(), LocaleError> {
        self.write().set_fallback(locale)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `key` for `locale`.
    ///
    /// Looks in the bundle for `locale`, then in the fallback bundle. When
    /// neither has the key, returns the key itself and records a
    /// [`MissingMessageKey`], or bumps its `hits` when the same locale and key
    /// missed before. An unregistered `locale` resolves like one with an empty
    /// bundle.
    pub fn resolve(&self, locale: &str, key: &str) -> String {
        let registry = self.read();
        let found = registry
            .get(locale)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                registry
                    .get(registry.fallback().as_str())
                    .and_then(|bundle| bundle.get(key))
            });
        if let Some(text) = found {
            return text.to_string();
        }

        let mut diagnostics = self.lock_diagnostics();
        let locale_code = LocaleCode::from(locale);
        if let Some(missing) = diagnostics.get_mut(&(locale_code.clone(), key.to_string())) {
            missing.hits += 1;
            debug!(locale, key, hits = missing.hits, "missing message key again");
            return key.to_string();
        }

        let nearby = registry
            .get(locale)
            .or_else(|| registry.get(registry.fallback().as_str()))
            .map(|bundle| compute_suggestions(key, &bundle.keys()))
            .unwrap_or_default();
        let missing = MissingMessageKey {
            locale: locale_code.clone(),
            fallback: registry.fallback().clone(),
            key: key.to_string(),
            suggestions: nearby,
            hits: 1,
        };
        warn!(locale, key, fallback = %missing.fallback, "missing message key");
        diagnostics.insert((locale_code, key.to_string()), missing);
        key.to_string()
    }

    /// Resolve `key` for the active locale.
    pub fn resolve_active(&self, key: &str) -> String {
        let active = self.active();
        self.resolve(active.as_str(), key)
    }

    /// Resolve `key` for `locale` and fill its `{name}` placeholders.
    pub fn resolve_with<K, V>(&self, locale: &str, key: &str, args: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        interpolate(&self.resolve(locale, key), args)
    }

    /// Resolve `key` for the active locale and fill its placeholders.
    pub fn resolve_active_with<K, V>(&self, key: &str, args: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let active = self.active();
        self.resolve_with(active.as_str(), key, args)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Missing keys recorded so far, one per locale and key, oldest first.
    pub fn diagnostics(&self) -> Vec<MissingMessageKey> {
        self.lock_diagnostics().values().cloned().collect()
    }

    /// Drain the recorded missing keys.
    pub fn take_diagnostics(&self) -> Vec<MissingMessageKey> {
        mem::take(&mut *self.lock_diagnostics()).into_values().collect()
    }

    /// Compare the bundle for `target` against the bundle for `source`.
    ///
    /// Reports keys the target lacks and keys only the target defines,
    /// sorted by key.
    pub fn validate_bundles(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Vec<BundleWarning>, LocaleError> {
        let registry = self.read();
        let source_bundle = registry
            .get(source)
            .ok_or_else(|| registry.unknown_locale(LocaleCode::from(source)))?;
        let target_bundle = registry
            .get(target)
            .ok_or_else(|| registry.unknown_locale(LocaleCode::from(target)))?;

        let locale = LocaleCode::from(target);
        let mut warnings: Vec<BundleWarning> = source_bundle
            .keys()
            .into_iter()
            .filter(|key| !target_bundle.contains_key(key))
            .map(|key| BundleWarning::MissingKey {
                key: key.to_string(),
                locale: locale.clone(),
            })
            .collect();
        warnings.extend(
            target_bundle
                .keys()
                .into_iter()
                .filter(|key| !source_bundle.contains_key(key))
                .map(|key| BundleWarning::UnknownKey {
                    key: key.to_string(),
                    locale: locale.clone(),
                }),
        );
        Ok(warnings)
    }

    fn read(&self) -> RwLockReadGuard<'_, MessageRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MessageRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_diagnostics(&self) -> MutexGuard<'_, Diagnostics> {
        self.diagnostics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<MessageRegistry> for LocaleStore {
    fn from(registry: MessageRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn store() -> LocaleStore {
        LocaleStore::new(
            MessageRegistry::from_bundles([
                ("en-US", MessageBundle::new().with("greet", "Hello")),
                ("fr-FR", MessageBundle::new().with("greet", "Bonjour")),
            ])
            .unwrap(),
        )
    }

    #[test]
    #[traced_test]
    fn missing_key_is_logged() {
        let store = store();
        assert_eq!(store.resolve("fr-FR", "farewell"), "farewell");
        assert!(logs_contain("missing message key"));
        assert!(logs_contain("farewell"));
    }

    #[test]
    #[traced_test]
    fn locale_switch_is_logged() {
        let store = store();
        store.set_active("fr-FR").unwrap();
        assert!(logs_contain("switched active locale"));
    }

    #[test]
    fn missing_key_carries_suggestions() {
        let store = store();
        store.resolve("en-US", "gret");
        let diagnostics = store.take_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].suggestions, vec!["greet"]);
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    #[traced_test]
    fn repeated_miss_is_counted_not_stored() {
        let store = store();
        for _ in 0..10_000 {
            store.resolve("fr-FR", "farewell");
        }
        let diagnostics = store.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].hits, 10_000);
        assert!(logs_contain("missing message key again"));
    }

    #[test]
    fn unknown_locale_uses_fallback_bundle() {
        let store = store();
        assert_eq!(store.resolve("xx-XX", "greet"), "Hello");
        assert!(store.diagnostics().is_empty());
    }
}
