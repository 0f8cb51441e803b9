use select_types::{OptionId, SearchableSelectConfig, SearchableSelectState, SelectOption};

pub const PLACEHOLDER: &str = "Choose one";

/// `[{1,"Apple"},{2,"Banana"}]`
pub fn fruit() -> Vec<SelectOption> {
    vec![SelectOption::new("1", "Apple"), SelectOption::new("2", "Banana")]
}

/// `[{1,"Abalone"},{2,"Crab"},{3,"Beta"}]`
pub fn sea_life() -> Vec<SelectOption> {
    vec![
        SelectOption::new("1", "Abalone"),
        SelectOption::new("2", "Crab"),
        SelectOption::new("3", "Beta"),
    ]
}

pub fn config() -> SearchableSelectConfig {
    SearchableSelectConfig {
        name: "choice".into(),
        placeholder: PLACEHOLDER.into(),
        search_placeholder: "Search...".into(),
        no_results: "No results".into(),
        ..Default::default()
    }
}

/// A closed widget over `options` with nothing selected.
pub fn widget(options: Vec<SelectOption>) -> SearchableSelectState {
    SearchableSelectState::new(options, &config())
}

/// A widget that has been opened and whose initial search focus has run.
pub fn opened(options: Vec<SelectOption>) -> SearchableSelectState {
    let mut state = widget(options);
    state.open();
    state.take_pending_focus();
    state
}

pub fn visible_names(state: &SearchableSelectState) -> Vec<String> {
    state.filtered().iter().map(|o| o.name.clone()).collect()
}

pub fn id(raw: &str) -> OptionId {
    OptionId::from(raw)
}
