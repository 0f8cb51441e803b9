use select_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Demo form configuration, embedded so the web build needs no file access.
const DEMO_CONFIG: &str = include_str!("../demo.toml");

/// Parse the embedded `demo.toml` once and cache it.
///
/// If the file is unparseable the form renders with an empty option list.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::from_toml_str(DEMO_CONFIG) {
        Ok(config) => {
            tracing::info!(
                field = %config.select.name,
                options = config.options.len(),
                "Loaded select configuration"
            );
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse demo.toml, using defaults");
            AppConfig::default()
        }
    })
}
