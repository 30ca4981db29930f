//! Server config: database, listen address, logging. Loaded from env.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "guestbook.db";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_FILE: &str = "logs/guestbook.log";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// DATABASE_URL: SQLite file path or `sqlite:` URL
    pub database_url: String,
    /// BIND_ADDRESS
    pub bind_address: String,
    /// LOG_FILE
    pub log_file: String,
}

impl ServerConfig {
    /// Load from environment variables. `bind` overrides BIND_ADDRESS if provided.
    pub fn load(bind: Option<String>) -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_address = bind
            .or_else(|| env::var("BIND_ADDRESS").ok())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            database_url,
            bind_address,
            log_file,
        })
    }

    /// Validate config (bind address must be a socket address, paths non-empty).
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is set but empty");
        }
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            anyhow::anyhow!(
                "BIND_ADDRESS is not a valid socket address: {} ({})",
                self.bind_address,
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("DATABASE_URL");
        env::remove_var("BIND_ADDRESS");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = ServerConfig::load(None).unwrap();

        assert_eq!(config.database_url, "guestbook.db");
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.log_file, "logs/guestbook.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite://custom.db");
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::set_var("LOG_FILE", "/tmp/gb.log");

        let config = ServerConfig::load(None).unwrap();

        assert_eq!(config.database_url, "sqlite://custom.db");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.log_file, "/tmp/gb.log");
        assert_eq!(config.socket_addr().unwrap().port(), 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_bind_argument_overrides_env() {
        clear_env();
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");

        let config = ServerConfig::load(Some("127.0.0.1:9090".to_string())).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9090");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_bind_address() {
        clear_env();
        env::set_var("BIND_ADDRESS", "not-an-address");

        let config = ServerConfig::load(None).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("BIND_ADDRESS"));

        clear_env();
    }
}
