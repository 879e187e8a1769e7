use bon::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::components::Direction;

/// Forced visual state of a select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectState {
    Active,
    Error,
    Info,
}

/// Options of a select, given either as one `label -> value` map or as a
/// list of such maps. Options keep the order they were written in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOptions {
    Map(IndexMap<String, String>),
    List(Vec<IndexMap<String, String>>),
}

impl Default for SelectOptions {
    fn default() -> Self {
        SelectOptions::Map(IndexMap::new())
    }
}

impl SelectOptions {
    /// All `(label, value)` pairs, flattened.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let maps: Vec<&IndexMap<String, String>> = match self {
            SelectOptions::Map(map) => vec![map],
            SelectOptions::List(list) => list.iter().collect(),
        };
        maps.into_iter()
            .flat_map(|map| map.iter().map(|(label, value)| (label.as_str(), value.as_str())))
            .collect()
    }

    /// Label of the option holding `value`.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.pairs()
            .into_iter()
            .find(|(_, option)| *option == value)
            .map(|(label, _)| label)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

/// A form select field.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Select {
    #[builder(default)]
    pub options: SelectOptions,
    /// Current value. Numbers are accepted and kept as their text.
    #[serde(deserialize_with = "text_or_number")]
    pub value: Option<String>,
    pub prefix: Option<String>,
    /// Shown while no option is selected.
    pub placeholder: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    /// Id of the form this field belongs to.
    pub form_id: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    /// Wrapper element name, `div` or `section`.
    pub wrapper: Option<String>,
    #[builder(default)]
    pub disabled: bool,
    #[builder(default)]
    pub required: bool,
    #[builder(default)]
    pub autofocus: bool,
    #[builder(default)]
    pub multiple: bool,
    pub state: Option<SelectState>,
    pub icon: Option<String>,
    pub error_message: Option<String>,
    pub info: Option<String>,
    pub dir: Option<Direction>,
}

impl Select {
    pub const NAME: &'static str = "Select";
    pub const PROPS: &'static [&'static str] = &[
        "options",
        "value",
        "prefix",
        "placeholder",
        "id",
        "name",
        "formId",
        "label",
        "description",
        "wrapper",
        "disabled",
        "required",
        "autofocus",
        "multiple",
        "state",
        "icon",
        "errorMessage",
        "info",
        "dir",
    ];

    /// Label of the selected option, if the value matches one.
    pub fn selected_label(&self) -> Option<&str> {
        self.value
            .as_deref()
            .and_then(|value| self.options.label_for(value))
    }
}
