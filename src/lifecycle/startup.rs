//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration from a file, or fall back to defaults
//! - Apply command-line overrides
//! - Validate the result before anything binds
//!
//! # Design Decisions
//! - The file is only parsed here; validation runs once, after overrides

use std::path::Path;

use crate::config::validation::validate_config;
use crate::config::{read_config, ConfigError, ServerConfig};

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Produce the validated configuration the server will run with.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<ServerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(address) = overrides.address {
        config.listener.address = address;
    }
    if let Some(port) = overrides.port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_ADDRESS, DEFAULT_PORT};

    #[test]
    fn defaults_without_file() {
        let config = resolve_config(None, Overrides::default()).unwrap();
        assert_eq!(config.listener.address, DEFAULT_ADDRESS);
        assert_eq!(config.listener.port, DEFAULT_PORT);
    }

    #[test]
    fn override_can_fix_an_invalid_file_value() {
        let path = std::env::temp_dir().join(format!("http-dispatch-startup-{}.toml", std::process::id()));
        std::fs::write(&path, "[listener]\naddress = \"localhost\"\nport = 9001\n").unwrap();

        let overrides = Overrides {
            address: Some("127.0.0.1".into()),
            port: None,
        };
        let config = resolve_config(Some(&path), overrides);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.listener.address, "127.0.0.1");
        assert_eq!(config.listener.port, 9001);
    }

    #[test]
    fn overrides_apply_and_are_validated() {
        let overrides = Overrides {
            address: Some("0.0.0.0".into()),
            port: Some(8080),
        };
        let config = resolve_config(None, overrides).unwrap();
        assert_eq!(config.listener.address, "0.0.0.0");
        assert_eq!(config.listener.port, 8080);

        let bad = Overrides {
            address: Some("example.com".into()),
            port: None,
        };
        assert!(matches!(
            resolve_config(None, bad),
            Err(ConfigError::Validation(_))
        ));
    }
}
