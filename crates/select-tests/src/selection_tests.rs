use pretty_assertions::assert_eq;

use crate::common::*;

#[test]
fn selecting_each_known_id_shows_its_name() {
    for option in sea_life() {
        let mut state = widget(sea_life());
        state.select(option.id.clone());
        assert_eq!(state.display_text(), option.name);
        assert_eq!(state.hidden_value(), option.id.as_str());
    }
}

#[test]
fn selecting_unknown_ids_shows_placeholder() {
    for raw in ["0", "4", "abalone", ""] {
        let mut state = widget(sea_life());
        state.select(id("2"));
        state.select(id(raw));
        assert_eq!(state.display_text(), PLACEHOLDER, "id {raw:?}");
    }
}

#[test]
fn selecting_closes_the_panel() {
    let mut state = opened(fruit());
    state.select(id("1"));
    assert!(!state.is_open());
    assert_eq!(state.take_pending_focus(), None);
}

#[test]
fn escape_keeps_selection() {
    let mut state = widget(fruit());
    state.select(id("2"));
    state.open();
    state.handle_search_key(select_types::SelectKey::Escape);
    assert!(!state.is_open());
    assert_eq!(state.display_text(), "Banana");
}

#[test]
fn clicking_away_keeps_selection() {
    let mut state = widget(fruit());
    state.select(id("1"));
    state.open();
    state.click_away();
    assert!(!state.is_open());
    assert_eq!(state.hidden_value(), "1");
}
