use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use select_types::{
    FocusTarget, OptionId, SearchableSelectConfig, SearchableSelectState, SelectKey, SelectOption,
};

/// Map a DOM keyboard event onto the keys the select understands.
///
/// Characters typed together with Ctrl/Meta/Alt are shortcuts, not search input.
pub fn select_key(key: &Key, modifiers: Modifiers) -> SelectKey {
    let command = modifiers.contains(Modifiers::CONTROL)
        || modifiers.contains(Modifiers::META)
        || modifiers.contains(Modifiers::ALT);
    match key {
        Key::ArrowDown => SelectKey::ArrowDown,
        Key::ArrowUp => SelectKey::ArrowUp,
        Key::Enter => SelectKey::Enter,
        Key::Escape => SelectKey::Escape,
        Key::Tab => SelectKey::Tab,
        Key::Character(s) if s == " " => SelectKey::Space,
        Key::Character(s) if !command => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => SelectKey::Char(c),
                _ => SelectKey::Other,
            }
        }
        _ => SelectKey::Other,
    }
}

fn event_key(evt: &KeyboardEvent) -> SelectKey {
    select_key(&evt.key(), evt.modifiers())
}

/// Run a transition and report a changed selection to `on_change`.
fn apply(
    mut state: Signal<SearchableSelectState>,
    on_change: Option<EventHandler<Option<OptionId>>>,
    transition: impl FnOnce(&mut SearchableSelectState) -> bool,
) -> bool {
    let before = state.peek().selected().cloned();
    let consumed = transition(&mut state.write());
    let after = state.peek().selected().cloned();
    if after != before {
        tracing::debug!(selected = ?after, "searchable select changed");
        if let Some(handler) = on_change {
            handler.call(after);
        }
    }
    consumed
}

/// Mounted elements the deferred focus can land on.
#[derive(Clone, Copy, PartialEq)]
pub struct FocusHandles {
    search: Signal<Option<Rc<MountedData>>>,
    items: Signal<HashMap<OptionId, Rc<MountedData>>>,
}

impl FocusHandles {
    fn clear(self) {
        let FocusHandles {
            mut search,
            mut items,
        } = self;
        search.set(None);
        items.write().clear();
    }
}

pub fn use_focus_handles() -> FocusHandles {
    FocusHandles {
        search: use_signal(|| None),
        items: use_signal(HashMap::new),
    }
}

/// Focus whatever the last transition asked for, once its element is mounted.
///
/// Runs after each render commit and from `onmounted`; whichever sees the
/// element first takes the request.
fn focus_pending(mut state: Signal<SearchableSelectState>, handles: FocusHandles) {
    let element = {
        let s = state.peek();
        match s.pending_focus() {
            None => return,
            Some(FocusTarget::Search) => handles.search.peek().clone(),
            Some(FocusTarget::Item(index)) => s
                .item_id(index)
                .and_then(|id| handles.items.peek().get(&id).cloned()),
        }
    };
    let Some(element) = element else {
        return;
    };
    if state.write().take_pending_focus().is_none() {
        return;
    }
    spawn(async move {
        if let Err(e) = element.set_focus(true).await {
            tracing::debug!(error = ?e, "searchable select focus target is gone");
        }
    });
}

/// A searchable single-select bound to a hidden form field.
///
/// Shows the selected option's name in a read-only field. Clicking it (or
/// pressing ArrowDown, Enter, Space, or a letter/digit) opens a panel with a
/// search box and the filtered option list. The chosen id is written to a
/// hidden `input` named `name`, which is what a surrounding form submits.
///
/// Configuration is read once when the component mounts.
#[component]
pub fn SearchableSelect(
    /// Options to choose from, in display order.
    options: Vec<SelectOption>,
    /// Name of the hidden form field.
    name: String,
    /// Id of the visible input. Defaults to `name`.
    #[props(default)]
    id: Option<String>,
    /// Initially selected id.
    #[props(default)]
    selected: String,
    #[props(default)] placeholder: String,
    #[props(default)] search_placeholder: String,
    /// Text shown when the search matches nothing.
    #[props(default)]
    no_results: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Render in the error visual state.
    #[props(default = false)]
    error: bool,
    /// Called with the new selection whenever it changes.
    #[props(default)]
    on_change: Option<EventHandler<Option<OptionId>>>,
) -> Element {
    let config = SearchableSelectConfig {
        name,
        id,
        selected,
        placeholder,
        search_placeholder,
        no_results,
        required,
        disabled,
        error,
    };
    let input_id = config.input_id().to_string();
    let field_name = config.name.clone();

    let mut state = use_signal(|| SearchableSelectState::new(options.clone(), &config));
    let handles = use_focus_handles();

    use_effect(move || {
        if state.read().pending_focus().is_some() {
            focus_pending(state, handles);
        }
    });

    // Handles of an unmounted panel are stale.
    use_effect(move || {
        if !state.read().is_open() {
            handles.clear();
        }
    });

    let snapshot = state.read();
    let is_open = snapshot.is_open();
    let is_disabled = snapshot.is_disabled();
    let is_required = snapshot.is_required();
    let has_error = snapshot.has_error();
    let display_text = snapshot.display_text().to_string();
    let placeholder = snapshot.placeholder().to_string();
    let hidden_value = snapshot.hidden_value().to_string();
    drop(snapshot);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "searchable-select",
            "data-open": if is_open { "true" } else { "false" },
            "data-error": if has_error { "true" } else { "false" },

            div { class: "searchable-select-control",
                // Stacked above the backdrop, so clicks here keep the panel open.
                input {
                    r#type: "text",
                    id: "{input_id}",
                    class: if has_error { "searchable-select-input searchable-select-input-error" } else { "searchable-select-input" },
                    placeholder: "{placeholder}",
                    value: "{display_text}",
                    readonly: true,
                    disabled: is_disabled,
                    required: is_required,
                    "aria-haspopup": "listbox",
                    "aria-expanded": if is_open { "true" } else { "false" },
                    onclick: move |_| state.write().open(),
                    onkeydown: move |evt: KeyboardEvent| {
                        let key = event_key(&evt);
                        if apply(state, on_change, |s| s.handle_trigger_key(key)) {
                            evt.prevent_default();
                        }
                    },
                }

                span { class: "searchable-select-chevron",
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                }

                input {
                    r#type: "hidden",
                    name: "{field_name}",
                    value: "{hidden_value}",
                    required: is_required,
                }

                if is_open {
                    // Click-away boundary; removed together with the panel
                    div {
                        class: "searchable-select-backdrop",
                        onclick: move |_| {
                            apply(state, on_change, |s| {
                                s.click_away();
                                true
                            });
                        },
                    }

                    SearchableSelectPanel { state, handles, on_change }
                }
            }
        }
    }
}

/// The open panel: search box, filtered options and the no-results row.
#[component]
pub fn SearchableSelectPanel(
    state: Signal<SearchableSelectState>,
    handles: FocusHandles,
    #[props(default)] on_change: Option<EventHandler<Option<OptionId>>>,
) -> Element {
    let FocusHandles {
        search: mut search_el,
        items: mut item_els,
    } = handles;

    let snapshot = state.read();
    let search_placeholder = snapshot.search_placeholder().to_string();
    let no_results_text = snapshot.no_results_text().to_string();
    let search = snapshot.search().to_string();
    let show_no_results = snapshot.shows_no_results();
    let items: Vec<(usize, SelectOption, bool)> = snapshot
        .filtered()
        .into_iter()
        .enumerate()
        .map(|(index, option)| (index, option.clone(), snapshot.is_selected(&option.id)))
        .collect();
    drop(snapshot);

    rsx! {
        div {
            class: "searchable-select-panel",
            onclick: move |evt| evt.stop_propagation(),

            div { class: "searchable-select-search",
                input {
                    r#type: "text",
                    class: "searchable-select-search-input",
                    placeholder: "{search_placeholder}",
                    value: "{search}",
                    onmounted: move |evt: MountedEvent| {
                        search_el.set(Some(evt.data()));
                        focus_pending(state, handles);
                    },
                    oninput: move |evt: FormEvent| state.write().set_search(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        let key = event_key(&evt);
                        if apply(state, on_change, |s| s.handle_search_key(key)) {
                            evt.prevent_default();
                        }
                    },
                }
            }

            ul { class: "searchable-select-list", role: "listbox",
                for (index, option, is_selected) in items {
                    {
                        let mounted_id = option.id.clone();
                        let clicked_id = option.id.clone();
                        rsx! {
                            li { key: "{option.id}",
                                div {
                                    class: if is_selected { "searchable-select-item searchable-select-item-selected" } else { "searchable-select-item" },
                                    role: "option",
                                    tabindex: "0",
                                    "aria-selected": if is_selected { "true" } else { "false" },
                                    onmounted: move |evt: MountedEvent| {
                                        item_els.write().insert(mounted_id.clone(), evt.data());
                                        focus_pending(state, handles);
                                    },
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        let id = clicked_id.clone();
                                        apply(state, on_change, |s| {
                                            s.select(id);
                                            true
                                        });
                                    },
                                    onkeydown: move |evt: KeyboardEvent| {
                                        let key = event_key(&evt);
                                        if apply(state, on_change, |s| s.handle_item_key(index, key)) {
                                            evt.prevent_default();
                                        }
                                    },
                                    "{option.name}"
                                }
                            }
                        }
                    }
                }

                if show_no_results {
                    li { class: "searchable-select-empty",
                        span { "{no_results_text}" }
                    }
                }
            }
        }
    }
}
