use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::components::Direction;

/// Forced visual state of a checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxState {
    Disabled,
    Error,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checkbox {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    /// Wrapper element name, `div` or `section`.
    pub wrapper: Option<String>,
    pub state: Option<CheckboxState>,
    #[builder(default)]
    pub checked: bool,
    #[builder(default)]
    pub indeterminate: bool,
    pub dir: Option<Direction>,
}

impl Checkbox {
    pub const NAME: &'static str = "Checkbox";
    pub const PROPS: &'static [&'static str] = &[
        "id",
        "name",
        "value",
        "wrapper",
        "state",
        "checked",
        "indeterminate",
        "dir",
    ];

    pub fn is_disabled(&self) -> bool {
        self.state == Some(CheckboxState::Disabled)
    }
}
