//! Descriptors for the renderable elements of the library.
//!
//! A descriptor names a component and carries the configuration it was given.
//! Rendering belongs to the host framework; descriptors only fix which props
//! exist and what values they accept.

mod action_button;
mod checkbox;
mod select;

use serde::{Deserialize, Serialize};

pub use action_button::{Action, ActionButton};
pub use checkbox::{Checkbox, CheckboxState};
pub use select::{Select, SelectOptions, SelectState};

/// Text direction of a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Horizontal anchor of a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Any component the library exports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "props")]
pub enum ComponentDescriptor {
    ActionButton(ActionButton),
    Select(Select),
    Checkbox(Checkbox),
}

impl ComponentDescriptor {
    /// Exported component name.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentDescriptor::ActionButton(_) => ActionButton::NAME,
            ComponentDescriptor::Select(_) => Select::NAME,
            ComponentDescriptor::Checkbox(_) => Checkbox::NAME,
        }
    }

    /// Configuration keys the component accepts.
    pub fn props(&self) -> &'static [&'static str] {
        match self {
            ComponentDescriptor::ActionButton(_) => ActionButton::PROPS,
            ComponentDescriptor::Select(_) => Select::PROPS,
            ComponentDescriptor::Checkbox(_) => Checkbox::PROPS,
        }
    }

    /// Direction the component was configured with, if it set one.
    pub fn dir(&self) -> Option<Direction> {
        match self {
            ComponentDescriptor::ActionButton(button) => button.dir,
            ComponentDescriptor::Select(select) => select.dir,
            ComponentDescriptor::Checkbox(checkbox) => checkbox.dir,
        }
    }
}

impl From<ActionButton> for ComponentDescriptor {
    fn from(button: ActionButton) -> Self {
        ComponentDescriptor::ActionButton(button)
    }
}

impl From<Select> for ComponentDescriptor {
    fn from(select: Select) -> Self {
        ComponentDescriptor::Select(select)
    }
}

impl From<Checkbox> for ComponentDescriptor {
    fn from(checkbox: Checkbox) -> Self {
        ComponentDescriptor::Checkbox(checkbox)
    }
}
