//! Configuration loader for the `platform-api` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Every variable is optional; a missing or empty
//! value falls back to its default. Only a malformed `FLASK_PORT` is an error.
use std::env;

use anyhow::{anyhow, Result};

/// Environment name that switches on verbose startup diagnostics.
pub const DEVELOPMENT: &str = "development";

/// Look up a variable, treating an empty value as absent.
macro_rules! lookup_env {
    ($lookup:expr, $var_name:expr) => {
        $lookup($var_name).filter(|v: &String| !v.is_empty())
    };
}

/// Parse an optional port environment variable with a default value.
macro_rules! parse_env_u16 {
    ($lookup:expr, $var_name:expr, $default:expr) => {
        lookup_env!($lookup, $var_name)
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($lookup:expr, $var_name:expr, $default:expr) => {
        lookup_env!($lookup, $var_name).unwrap_or_else(|| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the process. The router receives a clone of
/// this value as its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ---
    /// Address the HTTP listener binds to.
    pub host: String,

    /// Port the HTTP listener binds to.
    pub port: u16,

    /// Deployment environment name (`production`, `development`, ...).
    pub environment: String,

    /// Hostname reported by `/api/v1/details`.
    pub hostname: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: "production".to_string(),
            hostname: "localhost".to_string(),
        }
    }
}

/// Load configuration from the process environment.
///
/// Optional:
/// - `FLASK_HOST` – bind address (default: `0.0.0.0`)
/// - `FLASK_PORT` – bind port (default: `5000`)
/// - `FLASK_ENV` – environment name (default: `production`)
/// - `HOSTNAME` – reported hostname (default: `localhost`)
///
/// Returns an error if `FLASK_PORT` is set but is not a valid port number.
pub fn load_from_env() -> Result<Config> {
    load_from(|name| env::var(name).ok())
}

/// Build a [`Config`] from an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let defaults = Config::default();

    let host = env_or!(lookup, "FLASK_HOST", defaults.host);
    let port = parse_env_u16!(lookup, "FLASK_PORT", defaults.port);
    let environment = env_or!(lookup, "FLASK_ENV", defaults.environment);
    let hostname = env_or!(lookup, "HOSTNAME", defaults.hostname);

    Ok(Config {
        host,
        port,
        environment,
        hostname,
    })
}

impl Config {
    /// Whether verbose startup diagnostics are enabled.
    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    /// Log the loaded configuration.
    ///
    /// In development mode each value is also tagged with where it came from,
    /// so a misspelled variable shows up as `default` instead of silently
    /// falling back.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  FLASK_HOST : {}", self.host);
        tracing::info!("  FLASK_PORT : {}", self.port);
        tracing::info!("  FLASK_ENV  : {}", self.environment);
        tracing::info!("  HOSTNAME   : {}", self.hostname);

        if self.is_development() {
            for name in ["FLASK_HOST", "FLASK_PORT", "FLASK_ENV", "HOSTNAME"] {
                let source = match env::var(name) {
                    Ok(v) if !v.is_empty() => "environment",
                    _ => "default",
                };
                tracing::debug!("  {name} resolved from {source}");
            }
        }
    }
}
