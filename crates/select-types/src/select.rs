use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::AppError;

/// Identifier of a selectable option.
///
/// Option lists usually come from JSON or TOML where ids may be integers or
/// strings. Both forms deserialize to the same textual id, so `1` and `"1"`
/// refer to the same option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a raw form value into a selection. Only `""` means "nothing
    /// selected"; any other value is taken verbatim, matching the ids the
    /// widget writes into the hidden field.
    pub fn from_form_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OptionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for OptionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for OptionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => OptionId(n.to_string()),
            RawId::Text(s) => OptionId(s),
        })
    }
}

/// One entry of a searchable select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive substring match against the option name.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowered(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Options whose name contains `query`, ignoring case, in original order.
///
/// An empty query matches every option.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.matches_lowered(&needle))
        .collect()
}

/// Text shown in the closed field for a given selection.
///
/// Falls back to `placeholder` when nothing is selected or the selected id
/// does not match any option.
pub fn display_text_for(
    options: &[SelectOption],
    selected: Option<&OptionId>,
    placeholder: &str,
) -> String {
    selected
        .and_then(|id| options.iter().find(|o| &o.id == id))
        .map(|o| o.name.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Parse an options list from a JSON array of `{id, name}` objects.
pub fn parse_options_json(json: &str) -> Result<Vec<SelectOption>, AppError> {
    serde_json::from_str(json)
        .map_err(|e| AppError::bad_request(format!("Invalid options JSON: {e}")))
}

/// Parse an options list from a TOML document of `[[options]]` tables.
pub fn parse_options_toml(contents: &str) -> Result<Vec<SelectOption>, AppError> {
    #[derive(Deserialize)]
    struct OptionsDocument {
        #[serde(default)]
        options: Vec<SelectOption>,
    }

    toml::from_str::<OptionsDocument>(contents)
        .map(|doc| doc.options)
        .map_err(|e| AppError::bad_request(format!("Invalid options TOML: {}", e.message())))
}
