//! Configuration handling.
//!
//! Settings live in a TOML file (default `.config/settings.toml`) split
//! into logical sections. The [`ConfigManager`] loads them with defaults
//! for missing fields, writes atomically, and can update a single section
//! without touching the rest of the file.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, PathSettings, ScanSettings, Settings};
