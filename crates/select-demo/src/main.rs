use dioxus::prelude::*;
use select_types::{form_pair, validate_selection, AppError, AppErrorKind, OptionId};
use select_ui::SearchableSelect;

mod config;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::DEBUG) {
        eprintln!("[logger] Failed to initialize: {e}");
    }
    config::app_config();

    dioxus::launch(App);
}

/// Outcome of the last form submission: the submitted name/value pair or the
/// validation error.
type Submission = Result<(String, String), AppError>;

#[component]
fn App() -> Element {
    let config = config::app_config();

    let mut current: Signal<Option<OptionId>> = use_signal(|| config.select.initial_selection());
    let mut submission: Signal<Option<Submission>> = use_signal(|| None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let (field, value) = form_pair(&config.select, current.read().as_ref());
        let result = validate_selection(&config.select, &config.options, &value)
            .map(|_| (field.clone(), value.clone()));
        match &result {
            Ok(_) => tracing::info!(%field, %value, "Form submitted"),
            Err(e) => tracing::warn!(%field, error = %e, "Form rejected"),
        }
        submission.set(Some(result));
    };

    // Field-level message goes under the widget; anything else is shown as the result.
    let (field_error, result_class, result_text) = match &*submission.read() {
        Some(Ok((field, value))) => (None, "demo-result", format!("Submitted {field}={value}")),
        Some(Err(e)) if e.kind == AppErrorKind::ValidationError => (
            e.field_error(&config.select.name).map(str::to_string),
            "demo-result demo-result-error",
            e.message.clone(),
        ),
        Some(Err(e)) => (None, "demo-result demo-result-error", e.message.clone()),
        None => (None, "demo-result", String::new()),
    };

    let input_id = config.select.input_id().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "demo",
            form { class: "demo-form", onsubmit: handle_submit,
                if !config.label.is_empty() {
                    label { class: "demo-label", r#for: "{input_id}", "{config.label}" }
                }
                SearchableSelect {
                    options: config.options.clone(),
                    name: config.select.name.clone(),
                    id: input_id.clone(),
                    selected: config.select.selected.clone(),
                    placeholder: config.select.placeholder.clone(),
                    search_placeholder: config.select.search_placeholder.clone(),
                    no_results: config.select.no_results.clone(),
                    required: config.select.required,
                    disabled: config.select.disabled,
                    error: config.select.error,
                    on_change: move |id: Option<OptionId>| {
                        current.set(id);
                        submission.set(None);
                    },
                }
                if let Some(message) = field_error {
                    p { class: "demo-field-error", "{message}" }
                }
                button { class: "demo-submit", r#type: "submit", "Submit" }
            }
            if !result_text.is_empty() {
                p { class: "{result_class}", "{result_text}" }
            }
        }
    }
}
