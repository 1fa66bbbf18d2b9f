use crate::core::cache::DEFAULT_TTL;
use crate::core::currency::CurrencyCode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Environment variable that overrides the configured provider access key.
pub const API_KEY_ENV: &str = "FXC_API_KEY";

pub const DEFAULT_PROVIDER_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: default_provider_url(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_seconds: DEFAULT_TTL.num_seconds() as u64,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> chrono::Duration {
        i64::try_from(self.ttl_seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

/// Currency pair used when the command line leaves one out.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            from: CurrencyCode::from_static("USD"),
            to: CurrencyCode::from_static("EUR"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default().with_api_key_override(std::env::var(API_KEY_ENV).ok()));
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxc", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Replaces the configured access key when `key` is set and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using provider access key from {}", API_KEY_ENV);
            self.provider.api_key = key.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://localhost:8080/v6"
  api_key: "secret"
cache:
  ttl_seconds: 120
defaults:
  from: "gbp"
  to: "JPY"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://localhost:8080/v6");
        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.cache.ttl(), chrono::Duration::minutes(2));
        assert_eq!(config.defaults.from.as_str(), "GBP");
        assert_eq!(config.defaults.to.as_str(), "JPY");
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("provider:\n  api_key: abc\n").unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.provider.api_key, "abc");
        assert_eq!(config.cache.ttl_seconds, 3600);
        assert_eq!(config.cache.ttl(), DEFAULT_TTL);
        assert_eq!(config.defaults.from.as_str(), "USD");
        assert_eq!(config.defaults.to.as_str(), "EUR");

        let empty: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert!(empty.provider.api_key.is_empty());
    }

    #[test]
    fn test_invalid_default_currency_is_rejected() {
        let yaml_str = "defaults:\n  from: \"\"\n  to: EUR\n";
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }

    #[test]
    fn test_api_key_override() {
        let config = AppConfig::default().with_api_key_override(Some(" from-env ".to_string()));
        assert_eq!(config.provider.api_key, "from-env");

        let mut base = AppConfig::default();
        base.provider.api_key = "from-file".to_string();
        let config = base.clone().with_api_key_override(Some("  ".to_string()));
        assert_eq!(config.provider.api_key, "from-file");
        let config = base.with_api_key_override(None);
        assert_eq!(config.provider.api_key, "from-file");
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "cache:\n  ttl_seconds: 60\n")?;
        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.cache.ttl(), chrono::Duration::seconds(60));

        let missing = AppConfig::load_from_path("/definitely/not/here.yaml");
        assert!(
            missing
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
        Ok(())
    }
}
