use serde::{Deserialize, Serialize};
use std::path::Path;

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::servers::DohServerConfig;
use crate::DohMethod;

const LOCAL_CONFIG_PATH: &str = "doh-client.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/doh-client/config.toml";

/// Main configuration structure for the DoH client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Query defaults (server, method, timeouts, fallback)
    #[serde(default)]
    pub client: ClientConfig,

    /// Known DoH servers, selectable by name
    #[serde(default = "DohServerConfig::defaults")]
    pub servers: Vec<DohServerConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            servers: DohServerConfig::defaults(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. doh-client.toml in current directory
    /// 3. /etc/doh-client/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.client.default_server = server;
        }
        if let Some(method) = overrides.method {
            self.client.default_method = method;
        }
        if let Some(timeout) = overrides.timeout {
            // a command-line timeout applies to every server
            self.client.timeout = timeout;
            for server in &mut self.servers {
                server.timeout = None;
            }
        }
        if let Some(connect_timeout) = overrides.connect_timeout {
            self.client.connect_timeout = connect_timeout;
        }
        if let Some(enabled) = overrides.enable_fallback {
            self.client.enable_fallback = enabled;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let server = self.resolve_server(&self.client.default_server);
        if !is_http_url(&server) {
            return Err(ConfigError::UnknownServer(
                self.client.default_server.clone(),
            ));
        }

        if self.client.timeout == 0 || self.client.connect_timeout == 0 {
            return Err(ConfigError::Validation(
                "Timeouts must be greater than 0".to_string(),
            ));
        }

        if self.servers.is_empty() {
            return Err(ConfigError::Validation("No servers configured".to_string()));
        }

        for server in &self.servers {
            if server.name.is_empty() || server.url.is_empty() {
                return Err(ConfigError::Validation(
                    "Server entries need both a name and a url".to_string(),
                ));
            }
            if server.timeout == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "Server '{}' has a zero timeout",
                    server.name
                )));
            }
            if server.methods.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Server '{}' has no methods",
                    server.name
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
            }
        }

        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }

    pub fn default_config_path() -> &'static str {
        LOCAL_CONFIG_PATH
    }

    pub fn get_server_config(&self, name: &str) -> Option<&DohServerConfig> {
        self.servers.iter().find(|s| s.name == name)
    }

    /// The configured entry for `client.default_server`, matched by name or URL.
    pub fn selected_server(&self) -> Option<&DohServerConfig> {
        let url = self.resolve_server(&self.client.default_server);
        self.servers
            .iter()
            .find(|s| s.name == self.client.default_server || s.url == url)
    }

    /// Total request timeout in seconds: the selected server's own timeout when
    /// it sets one, `client.timeout` otherwise.
    pub fn request_timeout(&self) -> u64 {
        self.selected_server()
            .and_then(|s| s.timeout)
            .unwrap_or(self.client.timeout)
    }

    /// Enabled servers, lowest priority value first
    pub fn servers_by_priority(&self) -> Vec<&DohServerConfig> {
        let mut servers: Vec<&DohServerConfig> = self.servers.iter().filter(|s| s.enabled).collect();
        servers.sort_by_key(|s| s.priority);
        servers
    }

    /// Map a configured server name to its URL; anything else is taken as a URL.
    pub fn resolve_server(&self, name_or_url: &str) -> String {
        self.get_server_config(name_or_url)
            .map(|s| s.url.clone())
            .unwrap_or_else(|| name_or_url.to_string())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub method: Option<DohMethod>,
    pub timeout: Option<u64>,
    pub connect_timeout: Option<u64>,
    pub enable_fallback: Option<bool>,
    pub log_level: Option<String>,
}
