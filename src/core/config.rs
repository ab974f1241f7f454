use super::errors::ConfigError;
use std::time::Duration;
use url::Url;

pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";
pub const TIMEOUT_VAR: &str = "FIRECRAWL_TIMEOUT_SECS";
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Connection settings for the Firecrawl API.
#[derive(Clone)]
pub struct FirecrawlConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for FirecrawlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirecrawlConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FirecrawlConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_VAR));
        }

        Ok(Self {
            api_key,
            base_url: Url::parse(DEFAULT_API_URL)?,
            timeout: None,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        let mut config = Self::new(api_key)?;

        if let Some(base_url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url.trim())?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url)?;
        // Endpoint paths are joined onto the base, so it must end in a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_key_only() {
        let config = FirecrawlConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "fc-123")])).unwrap();

        assert_eq!(config.api_key, "fc-123");
        assert_eq!(config.base_url.as_str(), "https://api.firecrawl.dev/");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_missing_key() {
        let result = FirecrawlConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey(API_KEY_VAR))));

        let result = FirecrawlConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }

    #[test]
    fn test_overrides() {
        let config = FirecrawlConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "fc-123"),
            (API_URL_VAR, "http://localhost:3002"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:3002/");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let config = FirecrawlConfig::new("fc-123")
            .unwrap()
            .with_base_url("https://proxy.example.com/firecrawl")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://proxy.example.com/firecrawl/");

        let config = FirecrawlConfig::new("fc-123")
            .unwrap()
            .with_base_url("https://proxy.example.com/firecrawl/")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://proxy.example.com/firecrawl/");
    }

    #[test]
    fn test_invalid_values() {
        let result = FirecrawlConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "fc-123"),
            (API_URL_VAR, "not a url"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));

        let result = FirecrawlConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "fc-123"),
            (TIMEOUT_VAR, "soon"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = FirecrawlConfig::new("fc-secret").unwrap();
        assert!(!format!("{:?}", config).contains("fc-secret"));
    }
}
