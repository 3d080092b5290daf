//! Configuration file loader.

use super::error::{ConfigError, ConfigResult};
use super::types::PrimerConfig;
use std::path::Path;

/// File name looked up in the working directory by the binaries.
pub const DEFAULT_CONFIG_FILE: &str = "perf-primer.toml";

/// Longest accepted startup delay (one hour).
const MAX_STARTUP_DELAY_MS: u64 = 60 * 60 * 1000;

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new configuration loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<PrimerConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn load_str(&self, content: &str) -> ConfigResult<PrimerConfig> {
        let config: PrimerConfig = toml::from_str(content)?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Load configuration or return default if file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: P) -> ConfigResult<PrimerConfig> {
        let path = path.as_ref();
        if path.exists() {
            self.load(path)
        } else {
            Ok(PrimerConfig::default())
        }
    }

    fn validate(&self, config: &PrimerConfig) -> ConfigResult<()> {
        if config.harness.startup_delay_ms > MAX_STARTUP_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "harness.startup_delay_ms".to_string(),
                message: format!(
                    "{} exceeds the maximum of {MAX_STARTUP_DELAY_MS}",
                    config.harness.startup_delay_ms
                ),
            });
        }
        Ok(())
    }
}
