//! Application state and update logic.
//!
//! Elm-style: one `App` state struct, one `Message` enum, and `update` /
//! `view` / `subscription` functions handed to the iced runtime. The scan
//! timer is a subscription that exists only while the session is in the
//! scanning phase and is keyed by the session epoch, so retiring an epoch
//! tears the timer down.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::event::{self, Event};
use iced::{futures, window};
use iced::{Element, Subscription, Task, Theme};

use veriscan_core::config::{ConfigManager, ConfigSection};
use veriscan_core::report::{self, AnalysisReport};
use veriscan_core::workflow::{Phase, ScanSession, TickOutcome};

use crate::views;

/// All messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file name was chosen (the drop zone click uses the demo clip).
    FileSelected(String),
    /// Open the native file picker.
    BrowseFile,
    /// The file picker closed.
    BrowseResult(Option<PathBuf>),
    /// A file was dragged onto the window.
    FileDropped(PathBuf),
    /// The scan timer fired; carries the epoch captured when it was armed.
    ScanTick(u64),
    /// Return to the upload screen.
    Reset,
    /// Non-functional affordance carried over from the product mock.
    DownloadReport,
}

/// Main application state.
pub struct App {
    config: Arc<Mutex<ConfigManager>>,
    /// The scan workflow; single owner of all phase/progress state.
    pub session: ScanSession,
    /// Report built when the scan completes; cleared on reset.
    pub report: Option<AnalysisReport>,
    /// Delay between scan checkpoints, from `[scan]` config.
    pub tick_interval: Duration,
    /// File name used when the drop zone is clicked directly.
    pub demo_file_name: String,
}

impl App {
    /// Build the initial state from shared configuration.
    pub fn new(config: Arc<Mutex<ConfigManager>>) -> (Self, Task<Message>) {
        let (tick_interval_ms, demo_file_name) = {
            let cfg = config.lock().unwrap();
            let scan = &cfg.settings().scan;
            (scan.tick_interval_ms, scan.demo_file_name.clone())
        };

        let app = Self {
            config,
            session: ScanSession::new(),
            report: None,
            tick_interval: Duration::from_millis(tick_interval_ms),
            demo_file_name,
        };
        (app, Task::none())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FileSelected(name) => {
                self.begin_scan(name);
                Task::none()
            }

            Message::BrowseFile => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select a file to analyze")
                        .add_filter("Media files", &["mp4", "mov", "wav", "jpg", "png"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::BrowseResult,
            ),

            Message::BrowseResult(path) => {
                if let Some(path) = path {
                    self.begin_scan(display_name(&path));
                }
                Task::none()
            }

            Message::FileDropped(path) => {
                // Only the name is taken; the file is never opened.
                self.begin_scan(display_name(&path));
                Task::none()
            }

            Message::ScanTick(epoch) => {
                if self.session.tick(epoch) == TickOutcome::Completed {
                    self.report = Some(report::report_for(self.session.file_name()));
                }
                Task::none()
            }

            Message::Reset => {
                self.session.reset();
                self.report = None;
                Task::none()
            }

            Message::DownloadReport => {
                tracing::info!("PDF report download requested (inert in the demo build)");
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let drops = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        if self.session.is_scanning() {
            Subscription::batch([drops, self.scan_timer()])
        } else {
            drops
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = match self.session.phase() {
            Phase::Idle => views::upload::view(self),
            Phase::Scanning => views::scanning::view(&self.session),
            Phase::Results => match &self.report {
                Some(report) => views::results::view(report),
                None => views::upload::view(self),
            },
        };
        views::shell(screen)
    }

    /// Start a scan and remember the file name in config.
    fn begin_scan(&mut self, file_name: String) {
        if !self.session.start_scan(file_name) {
            return;
        }
        self.report = None;

        let mut cfg = self.config.lock().unwrap();
        cfg.settings_mut().scan.last_file_name = self.session.file_name().to_string();
        if let Err(e) = cfg.update_section(ConfigSection::Scan) {
            tracing::warn!("failed to persist last file name: {}", e);
        }
    }

    /// Periodic tick stream for the current epoch.
    ///
    /// Keyed by epoch: a reset or restart retires the old stream instead of
    /// re-tagging it, so a stale arming can never feed ticks to a new scan.
    fn scan_timer(&self) -> Subscription<Message> {
        let epoch = self.session.epoch();
        let interval = self.tick_interval;

        Subscription::run_with((epoch, interval), |&(epoch, interval)| {
            futures::stream::unfold((interval, epoch), |(interval, epoch)| async move {
                tokio::time::sleep(interval).await;
                Some((Message::ScanTick(epoch), (interval, epoch)))
            })
        })
    }
}

/// File name component of a dropped or picked path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("settings.toml"));
        manager.load_or_create().unwrap();
        let (app, _task) = App::new(Arc::new(Mutex::new(manager)));
        (app, dir)
    }

    #[test]
    fn upload_then_six_ticks_shows_results() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::FileSelected("clip.mp4".to_string()));
        let epoch = app.session.epoch();
        for _ in 0..6 {
            let _ = app.update(Message::ScanTick(epoch));
        }

        assert_eq!(app.session.phase(), Phase::Results);
        assert_eq!(app.session.progress_percent(), 100);
        let report = app.report.as_ref().expect("report built on completion");
        assert_eq!(report.file_name, "clip.mp4");
    }

    #[test]
    fn reset_discards_report_and_pending_ticks() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::FileSelected("clip.mp4".to_string()));
        let epoch = app.session.epoch();
        let _ = app.update(Message::Reset);
        let _ = app.update(Message::ScanTick(epoch));

        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.session.progress_percent(), 0);
        assert!(app.report.is_none());
    }

    #[test]
    fn scan_start_persists_last_file_name() {
        let (mut app, dir) = test_app();

        let _ = app.update(Message::FileSelected("interview.mp4".to_string()));

        let content = std::fs::read_to_string(dir.path().join("settings.toml")).unwrap();
        assert!(content.contains("last_file_name = \"interview.mp4\""));
    }

    #[test]
    fn dropped_path_uses_file_name_only() {
        assert_eq!(
            display_name(Path::new("/home/user/videos/clip.mp4")),
            "clip.mp4"
        );
    }
}
