//! Configuration file loading with environment variable overrides.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SizePolicyError;
use crate::policy::SizePolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// QR code size bounds.
    #[serde(default)]
    pub qr: QrConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// QR code size bounds, in pixels.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Size used when a request does not specify one.
    pub default_size: u32,
    /// Smallest accepted size.
    pub min_size: u32,
    /// Largest accepted size.
    pub max_size: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        let policy = SizePolicy::default();
        Self {
            default_size: policy.default_size(),
            min_size: policy.min_size(),
            max_size: policy.max_size(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g. `info`, `debug`).
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "debug".to_string() }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Load the file at `path` and apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment value cannot be parsed.
    pub fn load_with_env(path: &Path) -> Result<Self, String> {
        let mut config = Self::load(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from environment-style variables. Set values win over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), String> {
        override_from(&lookup, "PORT", &mut self.server.port)?;
        override_from(&lookup, "DEFAULT_QR_CODE_SIZE", &mut self.qr.default_size)?;
        override_from(&lookup, "MIN_QR_CODE_SIZE", &mut self.qr.min_size)?;
        override_from(&lookup, "MAX_QR_CODE_SIZE", &mut self.qr.max_size)?;
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log.level = level;
        }
        Ok(())
    }

    /// Build the size policy described by the `qr` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are zero or out of order.
    pub fn size_policy(&self) -> Result<SizePolicy, SizePolicyError> {
        SizePolicy::new(self.qr.default_size, self.qr.min_size, self.qr.max_size)
    }
}

fn override_from<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) -> Result<(), String>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(raw) = lookup(key) {
        *target = raw.trim().parse().map_err(|e| format!("Invalid {key}={raw:?}: {e}"))?;
    }
    Ok(())
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `QR_SERVER_CONFIG` environment variable
/// 3. `~/.config/qr-code-server/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("QR_SERVER_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/qr-code-server/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/qr-code-server/config.toml")
    } else {
        PathBuf::from("qr-code-server.toml")
    }
}
