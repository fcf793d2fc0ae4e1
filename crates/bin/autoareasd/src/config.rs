//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `autoarea.toml` in the working directory (or the file named by
//! `AUTOAREA_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use autoarea_adapter_memory::RegistrySnapshot;
use autoarea_domain::domains::{DEFAULT_RELEVANT_DOMAINS, RelevantDomains};
use autoarea_domain::error::ConfigurationError;
use autoarea_domain::id::AreaId;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "autoarea.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Which areas get a controller and which domains matter.
    pub areas: AreasConfig,
    /// Registry content served by the in-memory host.
    pub registry: RegistrySnapshot,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Area controller configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AreasConfig {
    /// Area identifiers to control, in order.
    pub ids: Vec<String>,
    /// Entity domains the controllers automate over.
    pub relevant_domains: Vec<String>,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("AUTOAREA_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AUTOAREA_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("AUTOAREA_AREAS") {
            self.areas.ids = parse_area_list(&val);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.relevant_domains()?;
        Ok(())
    }

    /// Configured area identifiers.
    #[must_use]
    pub fn area_ids(&self) -> Vec<AreaId> {
        self.areas.ids.iter().map(|id| AreaId::from(id.as_str())).collect()
    }

    /// The relevant domain set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when no domain is configured.
    pub fn relevant_domains(&self) -> Result<RelevantDomains, ConfigError> {
        Ok(RelevantDomains::new(self.areas.relevant_domains.iter().cloned())?)
    }
}

fn parse_area_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "autoareasd=info,autoarea_app=info,autoarea_adapter_memory=info".to_string(),
        }
    }
}

impl Default for AreasConfig {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            relevant_domains: DEFAULT_RELEVANT_DOMAINS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Invalid(#[from] ConfigurationError),
}
