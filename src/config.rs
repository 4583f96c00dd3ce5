//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `APP_ENV` - Runtime mode: `production`, `development` or `test` (default: `development`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `PUBLIC_BASE_URL` - Prefix for `Location` headers (default: `http://localhost:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `json` in production, `text` otherwise)
//!
//! The runtime mode controls request log verbosity and whether unexpected
//! faults are disclosed in 500 responses.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Runtime mode selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Production,
    #[default]
    Development,
    Test,
}

impl RuntimeMode {
    pub fn is_production(self) -> bool {
        self == RuntimeMode::Production
    }
}

impl FromStr for RuntimeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RuntimeMode::Production),
            "development" | "dev" => Ok(RuntimeMode::Development),
            "test" => Ok(RuntimeMode::Test),
            other => anyhow::bail!(
                "APP_ENV must be 'production', 'development' or 'test', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuntimeMode::Production => "production",
            RuntimeMode::Development => "development",
            RuntimeMode::Test => "test",
        })
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RuntimeMode,
    pub listen_addr: String,
    /// Base URL of this service as seen by clients, without a trailing slash.
    pub public_base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` holds an unknown mode.
    pub fn from_env() -> Result<Self> {
        let mode = match env::var("APP_ENV") {
            Ok(value) => value
                .parse::<RuntimeMode>()
                .context("Failed to parse APP_ENV")?,
            Err(_) => RuntimeMode::default(),
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| {
            if mode.is_production() { "json" } else { "text" }.to_string()
        });

        Ok(Self {
            mode,
            listen_addr,
            public_base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `public_base_url` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.public_base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Mode: {}", self.mode);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public base URL: {}", self.public_base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
