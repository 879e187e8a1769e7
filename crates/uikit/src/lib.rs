//! Locale message resolution, field validation and the localization plugin
//! boundary for the uikit component library.
//!
//! Components receive a value and a [`RenderContext`]. Validators built with
//! [`build_validator`] decide which message key applies, and the
//! [`LocaleStore`] installed on the [`ComponentTree`] turns that key into
//! localized text.

pub mod components;
pub mod field;
pub mod locale;
pub mod plugin;
pub mod translations;
pub mod validator;

pub use components::{
    Action, ActionButton, Checkbox, CheckboxState, ComponentDescriptor, Direction, Select,
    SelectOptions, SelectState, Side,
};
pub use field::FieldRules;
pub use locale::{
    BundleWarning, LocaleCode, LocaleError, LocaleStore, MessageBundle, MessageRegistry,
    MissingMessageKey, compute_suggestions,
};
pub use plugin::{
    ComponentTree, I18n, InstallOptions, LocalizationPlugin, NodeId, Plugin, PluginError,
    RenderContext, install,
};
pub use translations::{TranslationError, default_registry};
pub use validator::{Captures, Matcher, ValidatorError, ValidatorRule, build_validator};

/// Builds the argument list for [`LocaleStore::resolve_with`] from
/// `name => value` pairs.
///
/// # Example
///
/// ```
/// let args = uikit::message_args! { "count" => 3, "name" => "Ada" };
/// assert_eq!(args, vec![
///     ("count".to_string(), "3".to_string()),
///     ("name".to_string(), "Ada".to_string()),
/// ]);
/// ```
#[macro_export]
macro_rules! message_args {
    {} => {
        ::std::vec::Vec::<(::std::string::String, ::std::string::String)>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        ::std::vec![
            $((::std::string::ToString::to_string(&$key), ::std::string::ToString::to_string(&$value))),+
        ]
    };
}
