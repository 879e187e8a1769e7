use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::components::{Direction, Side};

/// One entry of an action menu.
///
/// `label` is a message key; it is resolved at render time.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Action {
    pub label: String,
    /// Name of the host callback to invoke.
    pub callback: String,
}

/// A button opening a menu of actions.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionButton {
    #[builder(default)]
    pub side: Side,
    pub dir: Option<Direction>,
    #[builder(default)]
    pub actions: Vec<Action>,
}

impl ActionButton {
    pub const NAME: &'static str = "ActionButton";
    pub const PROPS: &'static [&'static str] = &["side", "dir", "actions"];
}
