//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. There is no runtime reconfiguration.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite location (default: `sqlite:urls.db`); the file
//!   is created if missing
//! - `BASE_URL` - Public base used to build short links
//!   (default: `http://127.0.0.1:3000`)
//! - `SECRET_KEY` - Signing secret for the flash cookie, at least 32 bytes
//!   (a development default is provided)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::Result;
use std::env;

/// Development-only signing secret. Long enough to pass validation, loud
/// enough to be replaced in any real deployment.
const DEV_SECRET_KEY: &str = "dev-secret-change-me-0123456789abcdef";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub base_url: String,
    pub listen_addr: String,
    pub secret_key: String,
    pub log_level: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// development defaults for anything unset.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:urls.db".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            base_url,
            listen_addr,
            secret_key,
            log_level,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `base_url` is not an http(s) URL
    /// - `listen_addr` is not in `host:port` form
    /// - `secret_key` is shorter than 32 bytes
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // The cookie signing key derivation requires at least 32 bytes.
        if self.secret_key.len() < 32 {
            anyhow::bail!(
                "SECRET_KEY must be at least 32 bytes, got {}",
                self.secret_key.len()
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints a configuration summary (without the secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  DB pool size: {}", self.db_max_connections);

        if self.secret_key == DEV_SECRET_KEY {
            tracing::warn!("SECRET_KEY is the development default; set it in production");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite:urls.db".to_string(),
            base_url: "http://127.0.0.1:3000".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            secret_key: DEV_SECRET_KEY.to_string(),
            log_level: "info".to_string(),
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_sqlite_database_url() {
        let mut config = valid_config();
        config.database_url = "postgres://localhost/urls".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_short_secret() {
        let mut config = valid_config();
        config.secret_key = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_listen_addr() {
        let mut config = valid_config();
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut config = valid_config();
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_pool_size() {
        let mut config = valid_config();
        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: tests touching the process environment run serially
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("BASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("SECRET_KEY");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite:urls.db");
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: tests touching the process environment run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:/tmp/test-links.db");
            env::set_var("BASE_URL", "https://sho.rt/");
            env::set_var("DB_MAX_CONNECTIONS", "12");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite:/tmp/test-links.db");
        assert_eq!(config.base_url, "https://sho.rt/");
        assert_eq!(config.db_max_connections, 12);

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("BASE_URL");
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
