//! Component trees with tree-scoped, type-keyed context.

use std::any::{Any, TypeId, type_name};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::components::ComponentDescriptor;
use crate::plugin::{PluginError, RenderContext};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

type ContextValue = Arc<dyn Any + Send + Sync>;

/// Identifies a node within one [`ComponentTree`].
///
/// Ids carry the id of the tree that issued them and are rejected by any
/// other tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u64,
    index: usize,
}

impl NodeId {
    /// Id of the tree this node belongs to.
    pub fn tree(&self) -> u64 {
        self.tree
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.tree)
    }
}

/// Something that can be installed onto a [`ComponentTree`].
///
/// Installation goes through [`ComponentTree::use_plugin`], which installs
/// each plugin type at most once per tree.
pub trait Plugin: Any {
    type Error;

    fn install(self, tree: &mut ComponentTree) -> Result<(), Self::Error>;
}

struct Node {
    parent: Option<NodeId>,
    descriptor: Option<ComponentDescriptor>,
    provided: HashMap<TypeId, ContextValue>,
}

/// One instance of a rendered component hierarchy.
///
/// The tree starts with a bare root node. Context values provided at a node
/// are visible to that node and all of its descendants; the nearest provider
/// wins.
pub struct ComponentTree {
    id: u64,
    nodes: Vec<Node>,
    installed: HashSet<TypeId>,
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: vec![Node {
                parent: None,
                descriptor: None,
                provided: HashMap::new(),
            }],
            installed: HashSet::new(),
        }
    }

    /// Identifier unique among trees created by this process.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn root(&self) -> NodeId {
        NodeId {
            tree: self.id,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mount a component as a child of `parent`.
    pub fn mount(
        &mut self,
        parent: NodeId,
        descriptor: impl Into<ComponentDescriptor>,
    ) -> Result<NodeId, PluginError> {
        self.node(parent)?;
        self.nodes.push(Node {
            parent: Some(parent),
            descriptor: Some(descriptor.into()),
            provided: HashMap::new(),
        });
        Ok(NodeId {
            tree: self.id,
            index: self.nodes.len() - 1,
        })
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, PluginError> {
        Ok(self.node(node)?.parent)
    }

    pub fn descriptor(&self, node: NodeId) -> Result<Option<&ComponentDescriptor>, PluginError> {
        Ok(self.node(node)?.descriptor.as_ref())
    }

    /// Make `value` available to `node` and its descendants, replacing any
    /// value of the same type previously provided at `node`.
    pub fn provide<T>(&mut self, node: NodeId, value: Arc<T>) -> Result<(), PluginError>
    where
        T: Any + Send + Sync,
    {
        let tree = self.id;
        let entry = self
            .nodes
            .get_mut(node.index)
            .filter(|_| node.tree == tree)
            .ok_or(PluginError::UnknownNode { node, tree })?;
        entry.provided.insert(TypeId::of::<T>(), value);
        Ok(())
    }

    /// The nearest value of type `T` provided at `node` or an ancestor.
    ///
    /// `None` for a node of another tree.
    pub fn inject<T>(&self, node: NodeId) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let mut current = Some(node);
        while let Some(id) = current {
            let entry = self.node(id).ok()?;
            if let Some(value) = entry.provided.get(&TypeId::of::<T>()) {
                return Arc::clone(value).downcast::<T>().ok();
            }
            current = entry.parent;
        }
        None
    }

    /// Install `plugin` unless a plugin of the same type already is.
    ///
    /// Returns whether the plugin was installed by this call.
    pub fn use_plugin<P: Plugin>(&mut self, plugin: P) -> Result<bool, P::Error> {
        let type_id = TypeId::of::<P>();
        if self.installed.contains(&type_id) {
            debug!(tree = self.id, plugin = type_name::<P>(), "plugin already installed");
            return Ok(false);
        }
        plugin.install(self)?;
        self.installed.insert(type_id);
        Ok(true)
    }

    pub fn is_installed<P: Plugin>(&self) -> bool {
        self.installed.contains(&TypeId::of::<P>())
    }

    pub(crate) fn mark_installed<P: Plugin>(&mut self) {
        self.installed.insert(TypeId::of::<P>());
    }

    /// Render-time view of `node`.
    pub fn context(&self, node: NodeId) -> Result<RenderContext<'_>, PluginError> {
        self.node(node)?;
        Ok(RenderContext::new(self, node))
    }

    fn node(&self, node: NodeId) -> Result<&Node, PluginError> {
        self.nodes
            .get(node.index)
            .filter(|_| node.tree == self.id)
            .ok_or(PluginError::UnknownNode {
                node,
                tree: self.id,
            })
    }
}

impl fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTree")
            .field("id", &self.id)
            .field("nodes", &self.nodes.len())
            .field("installed", &self.installed.len())
            .finish()
    }
}
