use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub cache: CacheConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the page's host; 0 means same origin as the page
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub refresh_interval_secs: u32,
    pub trend_months: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    pub animal_types_ttl_secs: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub mobile_breakpoint_px: u32,
    pub toast_timeout_ms: u32,
}

/// Default configuration compiled into the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8080

[dashboard]
refresh_interval_secs = 300
trend_months = 6

[cache]
animal_types_ttl_secs = 300

[ui]
mobile_breakpoint_px = 768
toast_timeout_ms = 5000
"#;

/// Id of the optional `<script type="application/toml">` block in index.html
const OVERRIDE_ELEMENT_ID: &str = "app-config";

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid client configuration, using defaults: {}", e);
        builtin_defaults()
    }
});

/// Active configuration
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

/// Load configuration.
///
/// Search order:
/// 1. A `<script id="app-config" type="application/toml">` block in the page,
///    merged over the defaults table by table
/// 2. The embedded default config
pub fn load_config() -> Result<ClientConfig, toml::de::Error> {
    match page_override() {
        Some(text) => {
            log::info!("Loading client config from #{}", OVERRIDE_ELEMENT_ID);
            merge_with_defaults(&text)
        }
        None => toml::from_str(DEFAULT_CONFIG),
    }
}

fn page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(OVERRIDE_ELEMENT_ID)?;
    element.text_content().filter(|t| !t.trim().is_empty())
}

/// Overlay the top-level tables of `text` onto the defaults
fn merge_with_defaults(text: &str) -> Result<ClientConfig, toml::de::Error> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overlay: toml::Table = toml::from_str(text)?;
    for (section, value) in overlay {
        match (base.get_mut(&section), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                for (key, v) in incoming {
                    existing.insert(key, v);
                }
            }
            (_, value) => {
                base.insert(section, value);
            }
        }
    }
    toml::Value::Table(base).try_into()
}

fn builtin_defaults() -> ClientConfig {
    ClientConfig {
        api: ApiConfig { port: 8080 },
        dashboard: DashboardConfig {
            refresh_interval_secs: 300,
            trend_months: 6,
        },
        cache: CacheConfig {
            animal_types_ttl_secs: 300,
        },
        ui: UiConfig {
            mobile_breakpoint_px: 768,
            toast_timeout_ms: 5000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: ClientConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, builtin_defaults());
        assert_eq!(config.dashboard.refresh_interval_secs, 300);
    }

    #[test]
    fn override_replaces_only_given_keys() {
        let config = merge_with_defaults("[api]\nport = 0\n\n[dashboard]\ntrend_months = 12\n").unwrap();
        assert_eq!(config.api.port, 0);
        assert_eq!(config.dashboard.trend_months, 12);
        assert_eq!(config.dashboard.refresh_interval_secs, 300);
        assert_eq!(config.ui.mobile_breakpoint_px, 768);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(merge_with_defaults("[api\nport = ").is_err());
        assert!(merge_with_defaults("[api]\nport = \"eighty\"").is_err());
    }
}
