//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `guardian.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use guardian_domain::config::CardConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Entities the card reads from.
    pub card: CardSection,
    /// Dashboard page settings.
    pub dashboard: DashboardConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Card entity identifiers.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardSection {
    /// Primary entity (total backups + history list).
    pub entity: String,
    /// Last-backup entity; the card's default when unset.
    pub last_backup_entity: Option<String>,
    /// Total-size entity; the card's default when unset.
    pub size_entity: Option<String>,
}

/// Dashboard page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Auto-reload interval of the dashboard page.
    pub refresh_seconds: u32,
    /// Buffered renders per SSE subscriber before it starts lagging.
    pub stream_capacity: usize,
}

impl Config {
    /// Load configuration from `guardian.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("guardian.toml")?;
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
        if let Ok(val) = std::env::var("GUARDIAN_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("GUARDIAN_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("GUARDIAN_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("GUARDIAN_ENTITY") {
            self.card.entity = val;
        }
        if let Ok(val) = std::env::var("GUARDIAN_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.dashboard.stream_capacity == 0 {
            return Err(ConfigError::Validation(
                "stream_capacity must be non-zero".to_string(),
            ));
        }
        self.card_config()
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the card configuration from the `[card]` section.
    #[must_use]
    pub fn card_config(&self) -> CardConfig {
        CardConfig {
            entity: self.card.entity.clone(),
            last_backup_entity: self.card.last_backup_entity.clone(),
            size_entity: self.card.size_entity.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "guardiand=info,guardian=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            entity: "sensor.backup_guardian_totale_backup".to_string(),
            last_backup_entity: None,
            size_entity: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 10,
            stream_capacity: 64,
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
    #[error("invalid configuration: {0}")]
    Validation(String),
}
