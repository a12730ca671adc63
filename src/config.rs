//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use crate::error::{ExporterError, Result};

/// HTTP server listening port. Fixed, not configurable.
pub const SERVER_PORT: u16 = 8000;

/// Default minutes between refresh cycles when `PYBEEMO_INTERVAL` is unset.
const DEFAULT_INTERVAL_MINUTES: u64 = 30;

/// Exporter configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal account user name
    pub username: String,
    /// Portal account password
    pub password: String,
    /// Minutes between refresh cycles
    pub interval_minutes: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PYBEEMO_USER` - Portal user name (required)
    /// - `PYBEEMO_PASSWORD` - Portal password (required)
    /// - `PYBEEMO_INTERVAL` - Refresh interval in minutes (default: 30)
    ///
    /// Fails if either credential variable is absent or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            username: required("PYBEEMO_USER")?,
            password: required("PYBEEMO_PASSWORD")?,
            // tokio::time::interval rejects a zero period
            interval_minutes: env::var("PYBEEMO_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&minutes| minutes > 0)
                .unwrap_or(DEFAULT_INTERVAL_MINUTES),
        })
    }
}

fn required(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ExporterError::MissingEnv(name)),
    }
}
