//! # Configuration
//!
//! TOML-based configuration for the harness binaries. A missing file is not
//! an error; every section falls back to its defaults.
//!
//! ## Example Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "compact"
//!
//! [harness]
//! startup_delay_ms = 0
//! ```

mod error;
mod loader;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{HarnessConfig, LogFormat, LogLevel, LoggingConfig, PrimerConfig};
