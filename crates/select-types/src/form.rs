use std::collections::HashMap;

use crate::config::SearchableSelectConfig;
use crate::error::AppError;
use crate::select::{OptionId, SelectOption};

/// Validate the hidden field value a form submitted for a searchable select.
///
/// Returns the chosen id, or `None` when nothing was chosen and the field is
/// optional. A blank value on a `required` field is a validation error keyed
/// by the field name; an id absent from `options` is `NotFound`.
pub fn validate_selection(
    config: &SearchableSelectConfig,
    options: &[SelectOption],
    submitted: &str,
) -> Result<Option<OptionId>, AppError> {
    let Some(id) = OptionId::from_form_value(submitted) else {
        if config.required {
            let mut field_errors = HashMap::new();
            field_errors.insert(config.name.clone(), "Please select an option".to_string());
            return Err(AppError::validation("Validation failed", field_errors));
        }
        return Ok(None);
    };

    if options.iter().any(|o| o.id == id) {
        Ok(Some(id))
    } else {
        Err(AppError::not_found(format!(
            "Unknown option '{id}' for field '{}'",
            config.name
        )))
    }
}

/// The name/value pair a form submission carries for the widget.
pub fn form_pair(config: &SearchableSelectConfig, selected: Option<&OptionId>) -> (String, String) {
    (
        config.name.clone(),
        selected.map(|id| id.to_string()).unwrap_or_default(),
    )
}
