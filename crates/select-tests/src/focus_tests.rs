use pretty_assertions::assert_eq;
use select_types::{FocusTarget, SelectKey};

use crate::common::*;

#[test]
fn opening_requests_search_focus_once() {
    let mut state = widget(fruit());
    state.open();
    assert_eq!(state.take_pending_focus(), Some(FocusTarget::Search));
    assert_eq!(state.take_pending_focus(), None);
}

#[test]
fn closing_before_the_deferred_focus_runs_is_harmless() {
    let mut state = widget(fruit());
    state.open();
    state.click_away();
    assert_eq!(state.take_pending_focus(), None);

    let mut state = widget(fruit());
    state.handle_trigger_key(SelectKey::Char('a'));
    state.tab_away();
    assert_eq!(state.take_pending_focus(), None);
}

#[test]
fn arrow_up_from_first_item_returns_to_search() {
    let mut state = opened(sea_life());
    state.handle_item_key(0, SelectKey::ArrowUp);
    assert_eq!(state.take_pending_focus(), Some(FocusTarget::Search));
}

#[test]
fn arrow_down_on_last_item_is_noop() {
    let mut state = opened(sea_life());
    state.handle_item_key(2, SelectKey::ArrowDown);
    assert_eq!(state.take_pending_focus(), None);
}

#[test]
fn item_targets_map_to_filtered_option_ids() {
    let mut state = opened(sea_life());
    state.set_search("ab");
    state.handle_search_key(SelectKey::ArrowDown);
    state.handle_item_key(0, SelectKey::ArrowDown);
    assert_eq!(state.take_pending_focus(), Some(FocusTarget::Item(1)));
    assert_eq!(state.item_id(1), Some(id("2")));
    assert_eq!(state.item_id(2), None);
}

#[test]
fn target_filtered_away_before_render_is_dropped() {
    let mut state = opened(sea_life());
    state.handle_item_key(1, SelectKey::ArrowDown);
    state.set_search("crab");
    assert_eq!(state.take_pending_focus(), None);
}
