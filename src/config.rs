//! Calendar service configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main calendar service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl CalendarConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        if config.server.host.is_empty() {
            return Err(Error::Config("server.host must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalendarConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "server:\n  host: 0.0.0.0\n  port: 9090\n";
        let config: CalendarConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CalendarConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CalendarConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.host, config.server.host);
        assert_eq!(parsed.server.port, config.server.port);
    }

    #[test]
    fn test_malformed_port_rejected() {
        let yaml = "server:\n  host: 127.0.0.1\n  port: not-a-port\n";
        assert!(matches!(
            CalendarConfig::from_yaml(yaml),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_empty_host_rejected() {
        let yaml = "server:\n  host: \"\"\n  port: 8080\n";
        assert!(matches!(
            CalendarConfig::from_yaml(yaml),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CalendarConfig::load(Path::new("/no/such/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
