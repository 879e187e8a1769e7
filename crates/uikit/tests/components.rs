//! Tests for component descriptors built from story-style props.

use uikit::{
    ActionButton, Checkbox, CheckboxState, ComponentDescriptor, Direction, Select, SelectState,
    Side,
};

#[test]
fn action_button_from_json() {
    let descriptor: ComponentDescriptor = serde_json::from_str(
        r#"{
            "component": "ActionButton",
            "props": {
                "dir": "rtl",
                "side": "right",
                "actions": [
                    {"label": "Edit", "callback": "edit"},
                    {"label": "Delete", "callback": "delete"}
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(descriptor.name(), "ActionButton");
    assert_eq!(descriptor.props(), &["side", "dir", "actions"]);
    assert_eq!(descriptor.dir(), Some(Direction::Rtl));
    let ComponentDescriptor::ActionButton(button) = descriptor else {
        panic!("expected an ActionButton");
    };
    assert_eq!(button.side, Side::Right);
    let callbacks: Vec<&str> = button.actions.iter().map(|a| a.callback.as_str()).collect();
    assert_eq!(callbacks, vec!["edit", "delete"]);
}

#[test]
fn action_button_defaults() {
    let button: ActionButton = serde_json::from_str("{}").unwrap();
    assert_eq!(button.side, Side::Left);
    assert_eq!(button.dir, None);
    assert!(button.actions.is_empty());
}

#[test]
fn select_accepts_camel_case_props() {
    let select: Select = serde_json::from_str(
        r#"{
            "options": {"Fish": "fish", "Shark": "shark"},
            "placeholder": "Select your sea creature",
            "formId": "signup",
            "errorMessage": "Pick one",
            "state": "error",
            "required": true
        }"#,
    )
    .unwrap();

    assert_eq!(select.form_id.as_deref(), Some("signup"));
    assert_eq!(select.error_message.as_deref(), Some("Pick one"));
    assert_eq!(select.state, Some(SelectState::Error));
    assert!(select.required);
    assert_eq!(select.selected_label(), None);
}

#[test]
fn rtl_select_options_keep_their_text() {
    let select: Select = serde_json::from_str(
        r#"{"dir": "rtl", "options": {"يناير": " يناير"}, "value": " يناير"}"#,
    )
    .unwrap();
    assert_eq!(select.dir, Some(Direction::Rtl));
    assert_eq!(select.selected_label(), Some("يناير"));
}

#[test]
fn checkbox_states() {
    let disabled = Checkbox::builder()
        .id("checkbox3".to_string())
        .state(CheckboxState::Disabled)
        .checked(true)
        .build();
    assert!(disabled.is_disabled());

    let error: Checkbox = serde_json::from_str(r#"{"id": "checkbox5", "state": "error"}"#).unwrap();
    assert!(!error.is_disabled());
    assert!(!error.indeterminate);
    assert_eq!(ComponentDescriptor::from(error).name(), "Checkbox");
}

#[test]
fn unknown_state_is_rejected() {
    let result: Result<Checkbox, _> = serde_json::from_str(r#"{"state": "active"}"#);
    assert!(result.is_err());
}

#[test]
fn story_options_render_in_written_order() {
    let select: Select = serde_json::from_str(
        r#"{
            "dir": "rtl",
            "options": {"يناير": " يناير", "فبراير": "فبراير"},
            "placeholder": "الشهر"
        }"#,
    )
    .unwrap();
    let labels: Vec<&str> = select.options.pairs().into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["يناير", "فبراير"]);

    let scrolling: Select =
        serde_json::from_str(r#"{"options": {"m": "m", "b": "b", "a": "a"}, "value": "b"}"#)
            .unwrap();
    let values: Vec<&str> = scrolling.options.pairs().into_iter().map(|(_, value)| value).collect();
    assert_eq!(values, vec!["m", "b", "a"]);
    assert_eq!(scrolling.selected_label(), Some("b"));
}

#[test]
fn select_value_may_be_a_number() {
    let select: Select = serde_json::from_str(r#"{"value": 42}"#).unwrap();
    assert_eq!(select.value.as_deref(), Some("42"));
}
