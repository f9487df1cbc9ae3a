use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default location of the optional config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config/order-desk.toml";

/// Server settings, read from the `[server]` table.
///
/// Environment variables override the file: `ORDER_DESK__SERVER__PORT=8080`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5222
}

fn default_channel_buffer() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            channel_buffer: default_channel_buffer(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Loads from `path` (or [`DEFAULT_CONFIG_FILE`]) overlaid with `ORDER_DESK__*`
    /// environment variables.
    ///
    /// The default file may be absent; an explicitly named file must exist. A missing
    /// `[server]` table yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("ORDER_DESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let server = match settings.get::<ServerConfig>("server") {
            Ok(server) => server,
            Err(ConfigError::NotFound(_)) => ServerConfig::default(),
            Err(e) => {
                return Err(ConfigError::Message(format!(
                    "Server configuration could not be loaded from file or environment: {e}"
                )));
            }
        };
        server.validate()
    }

    /// Store channels need at least one slot.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Message(
                "server.channel_buffer must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
