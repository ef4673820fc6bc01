//! VeriScan AI - Main entry point
//!
//! Handles configuration loading, application-level logging
//! initialization, and launching the iced application.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use veriscan_core::config::ConfigManager;
use veriscan_core::logging;

mod app;
mod theme;
mod views;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the logs directory path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let logging_settings = config_manager.settings().logging.clone();
    let _log_guard = if logging_settings.log_to_file {
        if let Err(e) = config_manager.ensure_dirs_exist() {
            eprintln!("Warning: Failed to create directories: {}", e);
        }
        logging::init_tracing_with_file(logging_settings.level, &config_manager.logs_folder())
    } else {
        logging::init_tracing(logging_settings.level);
        None
    };

    tracing::info!("VeriScan AI starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", veriscan_core::version());

    // Shared config for the app (persists the last analyzed file name)
    let config = Arc::new(Mutex::new(config_manager));

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("VeriScan AI")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((1180.0, 760.0))
        .run()
}
