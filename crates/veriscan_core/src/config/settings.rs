//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Simulated scan settings.
    #[serde(default)]
    pub scan: ScanSettings,
}

/// Folder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is unset.
    #[serde(default)]
    pub level: LogLevel,

    /// Write a log file in addition to stderr output.
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: true,
        }
    }
}

/// Simulated scan configuration.
///
/// The checkpoint ladder itself is fixed; only the pacing and the demo
/// file name are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Milliseconds between simulated scan checkpoints.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// File name used when the drop zone is clicked directly.
    #[serde(default = "default_demo_file_name")]
    pub demo_file_name: String,

    /// Name of the most recently analyzed file.
    #[serde(default)]
    pub last_file_name: String,
}

fn default_tick_interval_ms() -> u64 {
    800
}

fn default_demo_file_name() -> String {
    "demo_clip.mp4".to_string()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            demo_file_name: default_demo_file_name(),
            last_file_name: String::new(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Logging,
    Scan,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Scan => "scan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[scan]"));
        assert!(toml.contains("tick_interval_ms"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.scan.tick_interval_ms, settings.scan.tick_interval_ms);
        assert_eq!(parsed.paths.logs_folder, settings.paths.logs_folder);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[scan]\ntick_interval_ms = 100";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.scan.tick_interval_ms, 100);
        assert_eq!(parsed.scan.demo_file_name, "demo_clip.mp4");
        assert_eq!(parsed.paths.logs_folder, ".logs");
        assert!(parsed.logging.log_to_file);
    }
}
