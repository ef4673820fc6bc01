//! VeriScan Core - Backend logic for the VeriScan AI demo
//!
//! This crate contains all non-visual logic with zero UI dependencies:
//! the scan workflow state machine, the canned forensic report data,
//! configuration, and logging. It can be driven by the GUI application
//! or exercised directly from tests.

pub mod config;
pub mod logging;
pub mod report;
pub mod workflow;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
