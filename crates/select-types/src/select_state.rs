use crate::config::SearchableSelectConfig;
use crate::select::{display_text_for, filter_options, OptionId, SelectOption};

/// Keys the searchable select reacts to, decoupled from any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Space,
    Tab,
    /// A single printable character typed without command modifiers.
    Char(char),
    Other,
}

/// Element that should receive focus once the next render has committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Search,
    /// Position within the currently filtered list.
    Item(usize),
}

/// Headless state of a searchable single-select.
///
/// Holds everything the rendered widget needs: open state, search query,
/// current selection and its derived display text. All operations are
/// infallible; inconsistent input (unknown ids, out-of-range indices) degrades
/// to placeholders and no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableSelectState {
    options: Vec<SelectOption>,
    placeholder: String,
    search_placeholder: String,
    no_results_text: String,
    disabled: bool,
    required: bool,
    has_error: bool,

    open: bool,
    search: String,
    selected: Option<OptionId>,
    display_text: String,
    pending_focus: Option<FocusTarget>,
}

impl SearchableSelectState {
    pub fn new(options: Vec<SelectOption>, config: &SearchableSelectConfig) -> Self {
        let selected = config.initial_selection();
        let display_text = display_text_for(&options, selected.as_ref(), &config.placeholder);
        Self {
            options,
            placeholder: config.placeholder.clone(),
            search_placeholder: config.search_placeholder.clone(),
            no_results_text: config.no_results.clone(),
            disabled: config.disabled,
            required: config.required,
            has_error: config.error,
            open: false,
            search: String::new(),
            selected,
            display_text,
            pending_focus: None,
        }
    }

    // --- Reads ---

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    pub fn no_results_text(&self) -> &str {
        &self.no_results_text
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn is_selected(&self, id: &OptionId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Value written into the hidden form field.
    pub fn hidden_value(&self) -> &str {
        self.selected.as_ref().map(OptionId::as_str).unwrap_or("")
    }

    /// Options visible under the current search, in original order.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        filter_options(&self.options, &self.search)
    }

    /// Whether the "no results" row is shown.
    pub fn shows_no_results(&self) -> bool {
        !self.search.is_empty() && self.filtered().is_empty()
    }

    pub fn pending_focus(&self) -> Option<FocusTarget> {
        self.pending_focus
    }

    // --- Transitions ---

    pub fn open(&mut self) {
        if self.disabled {
            return;
        }
        self.open = true;
        self.pending_focus = Some(FocusTarget::Search);
    }

    /// Close the panel. The search text is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
        self.pending_focus = None;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Select `id` and close. Ids missing from the options are accepted and
    /// show the placeholder.
    pub fn select(&mut self, id: OptionId) {
        self.selected = Some(id);
        self.refresh_display_text();
        self.close();
    }

    /// Click outside the widget.
    pub fn click_away(&mut self) {
        if self.open {
            self.close();
        }
    }

    /// Focus left the widget via Tab.
    pub fn tab_away(&mut self) {
        self.click_away();
    }

    fn refresh_display_text(&mut self) {
        self.display_text =
            display_text_for(&self.options, self.selected.as_ref(), &self.placeholder);
    }

    // --- Keyboard ---

    /// Key pressed on the read-only display field.
    ///
    /// Returns `true` when the key was consumed and its default action should
    /// be suppressed.
    pub fn handle_trigger_key(&mut self, key: SelectKey) -> bool {
        if self.disabled {
            return false;
        }
        match key {
            SelectKey::ArrowDown => {
                self.open();
                true
            }
            SelectKey::Enter | SelectKey::Space if !self.open => {
                self.open();
                true
            }
            SelectKey::Escape if self.open => {
                self.close();
                true
            }
            SelectKey::Char(c) if !self.open && c.is_ascii_alphanumeric() => {
                self.search = c.to_string();
                self.open();
                true
            }
            SelectKey::Tab => {
                self.tab_away();
                false
            }
            _ => false,
        }
    }

    /// Key pressed inside the search field.
    pub fn handle_search_key(&mut self, key: SelectKey) -> bool {
        match key {
            SelectKey::Enter => {
                let only = match self.filtered().as_slice() {
                    [only] => Some(only.id.clone()),
                    _ => None,
                };
                if let Some(id) = only {
                    self.select(id);
                }
                true
            }
            SelectKey::ArrowDown => {
                if !self.filtered().is_empty() {
                    self.pending_focus = Some(FocusTarget::Item(0));
                }
                true
            }
            SelectKey::Escape => {
                self.close();
                true
            }
            SelectKey::Tab => {
                self.tab_away();
                false
            }
            _ => false,
        }
    }

    /// Key pressed while the item at `index` of the filtered list has focus.
    pub fn handle_item_key(&mut self, index: usize, key: SelectKey) -> bool {
        match key {
            SelectKey::ArrowUp => {
                self.pending_focus = Some(match index.checked_sub(1) {
                    Some(prev) => FocusTarget::Item(prev),
                    None => FocusTarget::Search,
                });
                true
            }
            SelectKey::ArrowDown => {
                if index + 1 < self.filtered().len() {
                    self.pending_focus = Some(FocusTarget::Item(index + 1));
                }
                true
            }
            SelectKey::Enter | SelectKey::Space => {
                let id = self.filtered().get(index).map(|o| o.id.clone());
                if let Some(id) = id {
                    self.select(id);
                }
                true
            }
            SelectKey::Escape => {
                self.close();
                true
            }
            SelectKey::Tab => {
                self.tab_away();
                false
            }
            _ => false,
        }
    }

    // --- Deferred focus ---

    /// Take the focus request scheduled by the last transition.
    ///
    /// Yields nothing once the panel has closed or when an item target no
    /// longer exists in the filtered list. The request is consumed either way.
    pub fn take_pending_focus(&mut self) -> Option<FocusTarget> {
        let target = self.pending_focus.take()?;
        if !self.open {
            return None;
        }
        match target {
            FocusTarget::Item(i) if i >= self.filtered().len() => None,
            other => Some(other),
        }
    }

    /// Option id behind a focus target, used to find its rendered element.
    pub fn item_id(&self, index: usize) -> Option<OptionId> {
        self.filtered().get(index).map(|o| o.id.clone())
    }
}
