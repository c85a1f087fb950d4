//! Configuration resolution for the site services
//!
//! Resolves the content API base URL with a fixed priority order:
//! 1. Explicit override (highest priority)
//! 2. Environment variable
//! 3. TOML configuration file
//! 4. Compiled development default (fallback)
//!
//! The TOML file is bootstrap-only. Changes are picked up on the next start.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the content API base URL.
pub const API_URL_ENV: &str = "BOOTHKIT_API_URL";

/// Compiled default base URL, pointing at a local dev server.
pub const DEV_API_BASE: &str = "http://127.0.0.1:5173";

/// Bootstrap configuration loaded from the TOML file
///
/// Minimal by design. Only the API endpoint and logging live here;
/// everything else ships compiled into the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Content API base URL (optional)
    #[serde(default)]
    pub api_url: Option<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default configuration file path for the platform.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("boothkit").join("boothkit.toml"))
}

/// Load the TOML config file if one exists.
///
/// A missing file is normal and returns `None`. An unreadable or
/// unparseable file is logged and also returns `None` so resolution
/// falls through to the compiled default.
pub fn load_toml_config() -> Option<TomlConfig> {
    load_toml_config_from(&config_file_path()?)
}

fn load_toml_config_from(path: &Path) -> Option<TomlConfig> {
    if !path.exists() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<TomlConfig>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse config file {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read config file {:?}: {}", path, e);
            None
        }
    }
}

/// Resolves the content API base URL.
///
/// Construct one per process (or per client) and call [`resolve`](Self::resolve)
/// when building a client. Resolution is re-evaluated on every call, so an
/// environment change between calls is honored.
#[derive(Debug, Clone, Default)]
pub struct ApiBaseResolver {
    explicit: Option<String>,
}

impl ApiBaseResolver {
    pub fn new() -> Self {
        Self { explicit: None }
    }

    /// Resolver that always answers with the given base URL.
    pub fn with_override(base: impl Into<String>) -> Self {
        Self {
            explicit: Some(base.into()),
        }
    }

    /// Resolve the base URL following the priority order.
    ///
    /// Blank values at any tier are treated as unset and resolution
    /// falls through to the next tier. Trailing slashes are trimmed
    /// so endpoint paths can always be appended directly.
    pub fn resolve(&self) -> String {
        // Priority 1: explicit override
        if let Some(base) = &self.explicit {
            if !base.trim().is_empty() {
                return normalize_base(base);
            }
        }

        // Priority 2: environment variable
        if let Ok(value) = std::env::var(API_URL_ENV) {
            if !value.trim().is_empty() {
                return normalize_base(&value);
            }
        }

        // Priority 3: TOML config file
        if let Some(config) = load_toml_config() {
            if let Some(url) = config.api_url {
                if !url.trim().is_empty() {
                    return normalize_base(&url);
                }
            }
        }

        // Priority 4: compiled development default
        DEV_API_BASE.to_string()
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(LoggingConfig::default().level, "info");
    }

    #[test]
    fn test_toml_config_minimal() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_toml_config_full() {
        let content = r#"
            api_url = "https://content.example.com"

            [logging]
            level = "debug"
            file = "/var/log/boothkit.log"
        "#;
        let config: TomlConfig = toml::from_str(content).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://content.example.com"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/var/log/boothkit.log")));
    }

    #[test]
    fn test_toml_logging_level_defaults_when_section_partial() {
        let content = r#"
            [logging]
            file = "/tmp/out.log"
        "#;
        let config: TomlConfig = toml::from_str(content).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_toml_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("boothkit.toml");
        std::fs::write(&path, "api_url = \"https://cdn.example.com\"\n").unwrap();

        let config = load_toml_config_from(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_config_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("boothkit.toml");

        let config = TomlConfig {
            api_url: Some("https://content.example.com".to_string()),
            logging: LoggingConfig {
                level: "debug".to_string(),
                file: Some(PathBuf::from("/var/log/boothkit.log")),
            },
        };
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load_toml_config_from(&path).unwrap();
        assert_eq!(loaded.api_url, config.api_url);
        assert_eq!(loaded.logging.level, config.logging.level);
        assert_eq!(loaded.logging.file, config.logging.file);
    }

    #[test]
    fn test_load_toml_config_missing_file_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(load_toml_config_from(&dir.path().join("absent.toml")).is_none());
    }

    #[test]
    fn test_load_toml_config_unparseable_file_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("boothkit.toml");
        std::fs::write(&path, "api_url = [not toml").unwrap();
        assert!(load_toml_config_from(&path).is_none());
    }

    #[test]
    #[serial]
    fn test_explicit_override_wins_over_env() {
        std::env::set_var(API_URL_ENV, "http://from-env:9000");
        let resolver = ApiBaseResolver::with_override("http://explicit:8080");
        assert_eq!(resolver.resolve(), "http://explicit:8080");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_env_var_used_when_no_override() {
        std::env::set_var(API_URL_ENV, "http://from-env:9000");
        let resolver = ApiBaseResolver::new();
        assert_eq!(resolver.resolve(), "http://from-env:9000");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_env_var_is_ignored() {
        std::env::set_var(API_URL_ENV, "   ");
        let resolver = ApiBaseResolver::new();
        assert_eq!(resolver.resolve(), DEV_API_BASE);
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_compiled_default_when_nothing_configured() {
        std::env::remove_var(API_URL_ENV);
        let resolver = ApiBaseResolver::new();
        assert_eq!(resolver.resolve(), DEV_API_BASE);
    }

    #[test]
    #[serial]
    fn test_trailing_slash_trimmed() {
        std::env::remove_var(API_URL_ENV);
        let resolver = ApiBaseResolver::with_override("http://explicit:8080///");
        assert_eq!(resolver.resolve(), "http://explicit:8080");
    }
}
