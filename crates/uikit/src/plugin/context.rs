use std::sync::Arc;

use tracing::warn;

use crate::components::{ComponentDescriptor, Direction};
use crate::locale::{LocaleCode, LocaleStore};
use crate::plugin::{ComponentTree, NodeId};

/// What a component sees of its tree while rendering.
///
/// Message lookups go to the nearest [`LocaleStore`] provided above the node.
/// Without one, keys render as themselves.
pub struct RenderContext<'t> {
    tree: &'t ComponentTree,
    node: NodeId,
    store: Option<Arc<LocaleStore>>,
}

impl<'t> RenderContext<'t> {
    pub(crate) fn new(tree: &'t ComponentTree, node: NodeId) -> Self {
        Self {
            tree,
            node,
            store: tree.inject::<LocaleStore>(node),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn tree(&self) -> &'t ComponentTree {
        self.tree
    }

    /// The component mounted at this node; `None` for the root.
    pub fn descriptor(&self) -> Option<&'t ComponentDescriptor> {
        self.tree.descriptor(self.node).ok().flatten()
    }

    /// The store serving this node, if localization is installed.
    pub fn store(&self) -> Option<&Arc<LocaleStore>> {
        self.store.as_ref()
    }

    /// Active locale of the serving store.
    pub fn locale(&self) -> Option<LocaleCode> {
        self.store.as_ref().map(|store| store.active())
    }

    /// Resolve `key` in the active locale.
    pub fn t(&self, key: &str) -> String {
        match &self.store {
            Some(store) => store.resolve_active(key),
            None => {
                warn!(node = %self.node, key, "no localization installed");
                key.to_string()
            }
        }
    }

    /// Resolve `key` in the active locale and fill its placeholders.
    pub fn t_with<K, V>(&self, key: &str, args: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match &self.store {
            Some(store) => store.resolve_active_with(key, args),
            None => self.t(key),
        }
    }

    /// Text direction: the component's own `dir` prop when set, otherwise
    /// the direction of the active locale.
    pub fn direction(&self) -> Direction {
        self.descriptor()
            .and_then(ComponentDescriptor::dir)
            .or_else(|| self.locale().map(|locale| locale.direction()))
            .unwrap_or_default()
    }
}
