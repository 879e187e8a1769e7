//! Error types for plugin installation and tree access.

use thiserror::Error;

use crate::locale::LocaleError;
use crate::plugin::NodeId;

/// An error raised while installing a plugin or addressing tree nodes.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The supplied messages were rejected.
    #[error("localization install failed: {0}")]
    Locale(#[from] LocaleError),

    /// The node does not belong to this tree.
    #[error("node {node} does not exist in tree {tree}")]
    UnknownNode { node: NodeId, tree: u64 },
}
