//! Installs a locale store into a component tree.

use std::ops::Deref;
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info};

use crate::locale::{LocaleCode, LocaleError, LocaleStore, MessageRegistry};
use crate::plugin::{ComponentTree, Plugin, PluginError};

/// Configuration handed to [`install`].
#[derive(Builder, Clone, Debug)]
pub struct InstallOptions {
    /// Bundles to serve. The registry's fallback and active locales carry over.
    messages: MessageRegistry,

    /// Overrides the registry's active locale. Must be registered.
    #[builder(into)]
    active: Option<LocaleCode>,
}

impl InstallOptions {
    fn into_store(self) -> Result<LocaleStore, LocaleError> {
        let mut registry = self.messages;
        if let Some(active) = self.active {
            registry.set_active(active)?;
        }
        Ok(LocaleStore::new(registry))
    }
}

/// Handle to the locale store installed on a tree.
///
/// Cloning the handle shares the store.
#[derive(Clone, Debug)]
pub struct I18n {
    store: Arc<LocaleStore>,
}

impl I18n {
    /// The store installed at the root of `tree`, if any.
    pub fn from_tree(tree: &ComponentTree) -> Option<Self> {
        tree.inject::<LocaleStore>(tree.root())
            .map(|store| Self { store })
    }

    pub fn store(&self) -> &Arc<LocaleStore> {
        &self.store
    }

    /// Whether both handles refer to the same store.
    pub fn same_store(&self, other: &I18n) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl Deref for I18n {
    type Target = LocaleStore;

    fn deref(&self) -> &LocaleStore {
        &self.store
    }
}

/// Attach one locale store to `tree`, built from `options`.
///
/// Installing again on the same tree is a no-op: the options are ignored and
/// the handle of the store installed first is returned. Other trees are not
/// affected.
///
/// # Example
///
/// ```
/// use uikit::{ComponentTree, InstallOptions, MessageBundle, MessageRegistry, install};
///
/// let messages = MessageRegistry::new("en-US", MessageBundle::new().with("greet", "Hello")).unwrap();
/// let mut tree = ComponentTree::new();
/// let i18n = install(&mut tree, InstallOptions::builder().messages(messages).build()).unwrap();
///
/// let ctx = tree.context(tree.root()).unwrap();
/// assert_eq!(ctx.t("greet"), "Hello");
/// assert_eq!(i18n.active().as_str(), "en-US");
/// ```
pub fn install(tree: &mut ComponentTree, options: InstallOptions) -> Result<I18n, PluginError> {
    if let Some(existing) = I18n::from_tree(tree) {
        debug!(tree = tree.id(), "localization already installed");
        return Ok(existing);
    }

    let store = Arc::new(options.into_store()?);
    let root = tree.root();
    tree.provide(root, Arc::clone(&store))?;
    tree.mark_installed::<LocalizationPlugin>();
    info!(
        tree = tree.id(),
        locales = store.locales().len(),
        active = %store.active(),
        fallback = %store.fallback(),
        "localization installed"
    );
    Ok(I18n { store })
}

/// [`install`] packaged as a [`Plugin`], for use with
/// [`ComponentTree::use_plugin`].
#[derive(Clone, Debug)]
pub struct LocalizationPlugin {
    options: InstallOptions,
}

impl LocalizationPlugin {
    pub fn new(options: InstallOptions) -> Self {
        Self { options }
    }
}

impl Plugin for LocalizationPlugin {
    type Error = PluginError;

    fn install(self, tree: &mut ComponentTree) -> Result<(), PluginError> {
        install(tree, self.options).map(drop)
    }
}
