//! # Server Configuration
//!
//! Settings for the goal service, read from a YAML file with environment
//! overrides.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults
//! 2. YAML file named by `GOAL_MANAGER_CONFIG`
//! 3. `GOAL_MANAGER_PORT` and `GOAL_MANAGER_DATA_DIR`
//!
//! ## YAML Format
//!
//! ```yaml
//! bind_address: "127.0.0.1"
//! port: 3000
//! data_directory: "/home/me/.local/share/goal-manager"
//! allowed_origin: "http://localhost:8080"
//! log_level: "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "GOAL_MANAGER_CONFIG";
pub const PORT_VAR: &str = "GOAL_MANAGER_PORT";
pub const DATA_DIR_VAR: &str = "GOAL_MANAGER_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Directory holding goals.csv
    pub data_directory: PathBuf,
    /// Origin the frontend is served from, allowed by CORS
    pub allowed_origin: String,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            data_directory: default_data_directory(),
            allowed_origin: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(port) = std::env::var(PORT_VAR) {
            config.port = port
                .parse()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, port))?;
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_VAR) {
            config.data_directory = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Read a YAML config file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServerConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.bind_address, self.port))
    }
}

fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("goal-manager")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 4100\nallowed_origin: \"http://127.0.0.1:9000\"").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();

        assert_eq!(config.port, 4100);
        assert_eq!(config.allowed_origin, "http://127.0.0.1:9000");
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: [not, a, port]").unwrap();

        assert!(ServerConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");

        let bad = ServerConfig {
            bind_address: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
