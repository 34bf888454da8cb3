use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub toast_timeout_ms: u32,
    pub gallery_interval_ms: u32,
    pub featured_count: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000"

[ui]
toast_timeout_ms = 3000
gallery_interval_ms = 6000
featured_count = 3
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid embedded configuration, using built-in values: {}", e);
        fallback_config()
    }
});

/// Process-wide configuration, loaded on first access
pub fn config() -> &'static Config {
    &CONFIG
}

/// Load configuration
///
/// Order:
/// 1. Embedded defaults
/// 2. `STOREFRONT_API_BASE` captured at build time overrides `api.base_url`
pub fn load_config() -> anyhow::Result<Config> {
    load_from_str(DEFAULT_CONFIG, option_env!("STOREFRONT_API_BASE"))
}

fn load_from_str(contents: &str, api_base_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(base) = api_base_override.filter(|b| !b.trim().is_empty()) {
        log::info!("API base overridden at build time: {}", base);
        config.api.base_url = base.trim().to_string();
    }
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

fn fallback_config() -> Config {
    Config {
        api: ApiConfig {
            base_url: "http://localhost:5000".to_string(),
        },
        ui: UiConfig {
            toast_timeout_ms: 3000,
            gallery_interval_ms: 6000,
            featured_count: 3,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_from_str(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.ui.toast_timeout_ms, 3000);
        assert_eq!(config.ui.gallery_interval_ms, 6000);
        assert_eq!(config.ui.featured_count, 3);
    }

    #[test]
    fn test_override_replaces_base_url() {
        let config = load_from_str(DEFAULT_CONFIG, Some("https://shop.example.com ")).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = load_from_str(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let broken = DEFAULT_CONFIG.replace("http://localhost:5000", "");
        assert!(load_from_str(&broken, None).is_err());
    }
}
