//! Scan workflow state machine.
//!
//! This module is the only stateful logic in the application. A
//! [`ScanSession`] walks a fixed ladder of progress checkpoints on an
//! external timer and flips between three phases:
//!
//! ```text
//! Idle --start_scan--> Scanning --(all steps consumed)--> Results
//! Scanning --reset--> Idle
//! Results --reset--> Idle
//! ```
//!
//! The timer itself lives in the UI layer; the session decides whether a
//! tick applies. Every arming of the timer gets a fresh epoch, so a tick
//! scheduled before a `reset` can never mutate the session afterwards.

mod phase;
mod session;
mod steps;

pub use phase::Phase;
pub use session::{ScanSession, TickOutcome};
pub use steps::{ScanStep, SCAN_STEPS};
