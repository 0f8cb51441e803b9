use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::select::{OptionId, SelectOption};

/// Construction-time settings of a searchable select.
///
/// Every field is immutable for the lifetime of a mounted widget. Missing
/// fields default to empty strings / `false`, so a partial `[select]` table
/// still yields a usable widget.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchableSelectConfig {
    /// Name of the hidden form field carrying the selected id.
    #[serde(default)]
    pub name: String,
    /// Element id of the visible input. Defaults to `name`.
    #[serde(default)]
    pub id: Option<String>,
    /// Initially selected id; empty means nothing selected.
    #[serde(default)]
    pub selected: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub search_placeholder: String,
    /// Shown when a non-empty search matches nothing.
    #[serde(default)]
    pub no_results: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Render in the error visual state.
    #[serde(default)]
    pub error: bool,
}

impl SearchableSelectConfig {
    /// The visible input's element id.
    pub fn input_id(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }

    pub fn initial_selection(&self) -> Option<OptionId> {
        OptionId::from_form_value(&self.selected)
    }
}

/// Top-level config file structure of the demo form.
///
/// ```toml
/// label = "Favourite fruit"
///
/// [select]
/// name = "fruit"
/// placeholder = "Choose a fruit"
///
/// [[options]]
/// id = 1
/// name = "Apple"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Label rendered above the widget.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub select: SearchableSelectConfig,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
