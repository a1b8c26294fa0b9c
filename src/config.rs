use crate::error::ConfigError;
use media_resolver::MediaConfig;
use serde::Deserialize;
use std::time::Duration;

const EMBEDDED_CONFIG: &str = include_str!("../config/storefront.toml");

/// Runtime configuration of the storefront
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// REST API root, without trailing slash
    pub api_base: String,
    pub cdn_origin: String,
    pub bucket: String,
    pub region: String,
    /// Serve media through the CDN rather than straight from the bucket
    pub use_cdn: bool,
    pub placeholder_url: Option<String>,
    /// Bearer token sent with every API request
    pub auth_token: Option<String>,
    pub currency_symbol: String,
    pub product_page_size: u32,
    pub reel_page_size: u32,
    pub hero_autoplay_ms: u64,
    pub category_autoplay_ms: u64,
    pub reel_visibility_threshold: f64,
    pub feed_visibility_threshold: f64,
    pub request_timeout_secs: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            cdn_origin: String::new(),
            bucket: String::new(),
            region: "us-east-1".to_string(),
            use_cdn: true,
            placeholder_url: None,
            auth_token: None,
            currency_symbol: "$".to_string(),
            product_page_size: 12,
            reel_page_size: 5,
            hero_autoplay_ms: 5000,
            category_autoplay_ms: 4000,
            reel_visibility_threshold: 0.7,
            feed_visibility_threshold: 0.5,
            request_timeout_secs: 20,
        }
    }
}

impl StorefrontConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Embedded defaults, environment overrides, then validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(EMBEDDED_CONFIG)?;
        config.apply_overrides(env_lookup);
        config.validate()?;
        log::info!(
            "Storefront config loaded (api: {}, cdn: {}, use_cdn: {})",
            config.api_base,
            config.cdn_origin,
            config.use_cdn
        );
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("STOREFRONT_API_BASE") {
            self.api_base = v;
        }
        if let Some(v) = lookup("STOREFRONT_CDN_ORIGIN") {
            self.cdn_origin = v;
        }
        if let Some(v) = lookup("STOREFRONT_BUCKET") {
            self.bucket = v;
        }
        if let Some(v) = lookup("STOREFRONT_REGION") {
            self.region = v;
        }
        if let Some(v) = lookup("STOREFRONT_USE_CDN") {
            match v.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.use_cdn = true,
                "0" | "false" | "no" | "off" => self.use_cdn = false,
                other => log::warn!("Ignoring STOREFRONT_USE_CDN={}", other),
            }
        }
        if let Some(v) = lookup("STOREFRONT_AUTH_TOKEN") {
            self.auth_token = (!v.trim().is_empty()).then_some(v);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base is empty".to_string()));
        }
        if self.product_page_size == 0 || self.reel_page_size == 0 {
            return Err(ConfigError::Invalid("page sizes must be positive".to_string()));
        }
        for (name, value) in [
            ("reel_visibility_threshold", self.reel_visibility_threshold),
            ("feed_visibility_threshold", self.feed_visibility_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn media_config(&self) -> MediaConfig {
        MediaConfig {
            cdn_origin: self.cdn_origin.clone(),
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            use_cdn: self.use_cdn,
            placeholder_url: self.placeholder_url.clone(),
        }
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_autoplay_ms)
    }

    pub fn category_interval(&self) -> Duration {
        Duration::from_millis(self.category_autoplay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

// No process environment in the browser; overrides are baked in at build time
#[cfg(target_arch = "wasm32")]
fn env_lookup(key: &str) -> Option<String> {
    let value = match key {
        "STOREFRONT_API_BASE" => option_env!("STOREFRONT_API_BASE"),
        "STOREFRONT_CDN_ORIGIN" => option_env!("STOREFRONT_CDN_ORIGIN"),
        "STOREFRONT_BUCKET" => option_env!("STOREFRONT_BUCKET"),
        "STOREFRONT_REGION" => option_env!("STOREFRONT_REGION"),
        "STOREFRONT_USE_CDN" => option_env!("STOREFRONT_USE_CDN"),
        "STOREFRONT_AUTH_TOKEN" => option_env!("STOREFRONT_AUTH_TOKEN"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = StorefrontConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.product_page_size, 12);
        assert_eq!(config.hero_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = StorefrontConfig::from_toml("api_base = \"https://shop.test/api\"").unwrap();
        assert_eq!(config.api_base, "https://shop.test/api");
        assert_eq!(config.reel_page_size, 5);
        assert!(config.use_cdn);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_API_BASE", "http://localhost:8000/api"),
            ("STOREFRONT_USE_CDN", "false"),
            ("STOREFRONT_AUTH_TOKEN", "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base, "http://localhost:8000/api");
        assert!(!config.use_cdn);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert!(!config.media_config().use_cdn);
    }

    #[test]
    fn test_validation() {
        let mut config = StorefrontConfig::default();
        config.product_page_size = 0;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.reel_visibility_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.api_base = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            StorefrontConfig::from_toml("product_page_size = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
