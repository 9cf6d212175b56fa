use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::data::MemberSource;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default timeout for fetching the member list
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where members are loaded from
    pub source: MemberSource,
    /// Timeout for URL sources
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: MemberSource::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// TOML representation of the `[source]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSourceConfig {
    /// URL or local path of the member list
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Member source configuration
    pub source: Option<TomlSourceConfig>,
}

impl Config {
    /// Load configuration from the data directory, creating an example file
    /// on first run. Missing or unreadable files fall back to defaults.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let Ok(contents) = fs::read_to_string(path) else {
            return config;
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring malformed config file"
                );
            }
        }

        config
    }

    /// Overlay values present in the TOML file on top of the current ones
    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(source) = toml_config.source {
            if let Some(url) = source.url {
                self.source = MemberSource::parse(&url);
            }
            if let Some(secs) = source.timeout_secs {
                self.request_timeout = Duration::from_secs(secs);
            }
        }
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::debug!(error = %e, "Failed to create config directory");
                return;
            }
        }
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::debug!(error = %e, "Failed to write example config");
        }
    }

    pub fn with_source(mut self, source: MemberSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
