use pretty_assertions::assert_eq;
use select_types::{form_pair, validate_selection, AppConfig, AppErrorKind, SearchableSelectState};

use crate::common::*;

const FORM: &str = r#"
label = "Team"

[select]
name = "team_id"
placeholder = "Select a team"
required = true

[[options]]
id = 10
name = "Platform"

[[options]]
id = 11
name = "Payments"
"#;

#[test]
fn submitted_value_is_the_hidden_field() {
    let config = AppConfig::from_toml_str(FORM).unwrap();
    let mut state = SearchableSelectState::new(config.options.clone(), &config.select);
    state.handle_trigger_key(select_types::SelectKey::Char('p'));
    state.set_search("pay");
    state.handle_search_key(select_types::SelectKey::Enter);

    let (field, value) = form_pair(&config.select, state.selected());
    assert_eq!((field.as_str(), value.as_str()), ("team_id", "11"));
    assert_eq!(
        validate_selection(&config.select, &config.options, &value).unwrap(),
        Some(id("11"))
    );
}

#[test]
fn required_field_without_selection_is_rejected() {
    let config = AppConfig::from_toml_str(FORM).unwrap();
    let state = SearchableSelectState::new(config.options.clone(), &config.select);
    assert_eq!(state.display_text(), "Select a team");

    let err = validate_selection(&config.select, &config.options, state.hidden_value()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_error("team_id").is_some());
}

#[test]
fn stale_selection_is_rejected_on_submit() {
    let config = AppConfig::from_toml_str(FORM).unwrap();
    let mut state = SearchableSelectState::new(config.options.clone(), &config.select);
    state.select(id("99"));
    assert_eq!(state.display_text(), "Select a team");

    let err = validate_selection(&config.select, &config.options, state.hidden_value()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn options_from_json_feed_the_widget() {
    let options =
        select_types::parse_options_json(r#"[{"id": 1, "name": "Apple"}, {"id": 2, "name": "Banana"}]"#)
            .unwrap();
    let mut state = widget(options);
    state.select(id("2"));
    assert_eq!(state.display_text(), "Banana");
}

#[test]
fn padded_configured_selection_survives_submit() {
    let config = AppConfig::from_toml_str(
        r#"
[select]
name = "code"
selected = " A1"
required = true

[[options]]
id = " A1"
name = "Padded"

[[options]]
id = "A1"
name = "Plain"
"#,
    )
    .unwrap();
    let state = SearchableSelectState::new(config.options.clone(), &config.select);
    assert_eq!(state.display_text(), "Padded");
    assert_eq!(state.hidden_value(), " A1");

    let submitted =
        validate_selection(&config.select, &config.options, state.hidden_value()).unwrap();
    assert_eq!(submitted, Some(id(" A1")));
}

#[test]
fn options_from_toml_feed_the_widget() {
    let options = select_types::parse_options_toml(
        r#"
[[options]]
id = 1
name = "Apple"

[[options]]
id = "2"
name = "Banana"
"#,
    )
    .unwrap();
    let mut state = widget(options);
    state.select(id("1"));
    assert_eq!(state.display_text(), "Apple");
    state.select(id("2"));
    assert_eq!(state.display_text(), "Banana");
}
