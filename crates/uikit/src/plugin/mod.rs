//! The localization plugin boundary.
//!
//! A [`ComponentTree`] owns all ambient state of one rendered tree: typed
//! context values provided at any node and the set of installed plugins.
//! [`install`] attaches a single [`LocaleStore`](crate::LocaleStore) to the
//! tree root so every descendant can resolve messages through its
//! [`RenderContext`] without threading the store through props. Nothing here
//! is process-global, so independent trees never share locale state.

mod context;
mod error;
mod localization;
mod tree;

pub use context::RenderContext;
pub use error::PluginError;
pub use localization::{I18n, InstallOptions, LocalizationPlugin, install};
pub use tree::{ComponentTree, NodeId, Plugin};
