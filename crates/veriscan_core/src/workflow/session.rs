//! The scan session.
//!
//! A [`ScanSession`] is owned by a single UI session and mutated only
//! through its methods. The periodic timer is scheduled by the caller;
//! each tick carries the epoch captured when the timer was armed, and
//! the session discards ticks whose epoch no longer matches.

use super::phase::Phase;
use super::steps::SCAN_STEPS;

/// Result of applying a timer tick to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A checkpoint was applied; scanning continues.
    Advanced,
    /// The final checkpoint was applied; phase is now [`Phase::Results`].
    Completed,
    /// The tick was stale or arrived outside the scanning phase; nothing changed.
    Ignored,
}

/// In-memory state for one simulated scan.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    phase: Phase,
    file_name: String,
    progress_percent: u8,
    status_message: String,
    next_step: usize,
    epoch: u64,
}

impl ScanSession {
    /// Create a session in the idle phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workflow phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Name of the file being (or last) analyzed. Empty while idle.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Progress percentage, 0-100.
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Status message for the active checkpoint. Empty until the first tick.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Epoch of the current timer arming. Ticks must echo this value back.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the timer should currently be running.
    pub fn is_scanning(&self) -> bool {
        self.phase == Phase::Scanning
    }

    /// Begin a simulated scan of `file_name`.
    ///
    /// Valid from the idle phase with a non-empty name; otherwise a logged
    /// no-op. Returns whether the scan was started. On success the caller
    /// should arm the periodic timer with the new [`epoch`](Self::epoch).
    pub fn start_scan(&mut self, file_name: impl Into<String>) -> bool {
        let file_name = file_name.into();
        if file_name.is_empty() {
            tracing::warn!("ignoring scan request with empty file name");
            return false;
        }
        if self.phase != Phase::Idle {
            tracing::warn!(phase = %self.phase, "ignoring scan request outside idle phase");
            return false;
        }

        self.phase = Phase::Scanning;
        self.file_name = file_name;
        self.progress_percent = 0;
        self.status_message.clear();
        self.next_step = 0;
        self.epoch += 1;
        tracing::info!(file = %self.file_name, "scan started");
        true
    }

    /// Apply one timer tick from the arming identified by `epoch`.
    ///
    /// Applies the next checkpoint's percentage and message. Consuming the
    /// final checkpoint transitions to [`Phase::Results`] in the same tick
    /// and stops further ticks from applying. Stale or out-of-phase ticks
    /// are discarded without mutating anything.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if self.phase != Phase::Scanning || epoch != self.epoch {
            return TickOutcome::Ignored;
        }

        // next_step is always in bounds: the phase leaves Scanning on the
        // same tick that consumes the final checkpoint.
        let step = SCAN_STEPS[self.next_step];
        self.progress_percent = step.percent;
        self.status_message = step.message.to_string();
        self.next_step += 1;

        if self.next_step == SCAN_STEPS.len() {
            self.phase = Phase::Results;
            tracing::info!(file = %self.file_name, "scan complete");
            TickOutcome::Completed
        } else {
            tracing::debug!(percent = step.percent, "scan checkpoint");
            TickOutcome::Advanced
        }
    }

    /// Return to the idle phase, from any phase.
    ///
    /// Clears the file name, progress, and status, and invalidates any
    /// in-flight tick by bumping the epoch. Idempotent.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.file_name.clear();
        self.progress_percent = 0;
        self.status_message.clear();
        self.next_step = 0;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_results(session: &mut ScanSession) -> usize {
        let epoch = session.epoch();
        let mut ticks = 0;
        while session.tick(epoch) != TickOutcome::Ignored {
            ticks += 1;
            if session.phase() == Phase::Results {
                break;
            }
        }
        ticks
    }

    #[test]
    fn full_scan_reaches_results_in_six_ticks() {
        let mut session = ScanSession::new();
        assert!(session.start_scan("clip.mp4"));

        let ticks = run_to_results(&mut session);

        assert_eq!(ticks, 6);
        assert_eq!(session.phase(), Phase::Results);
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(session.file_name(), "clip.mp4");
    }

    #[test]
    fn steps_apply_in_recorded_order() {
        let mut session = ScanSession::new();
        session.start_scan("clip.mp4");
        let epoch = session.epoch();

        for step in SCAN_STEPS {
            session.tick(epoch);
            assert_eq!(session.progress_percent(), step.percent);
            assert_eq!(session.status_message(), step.message);
        }
    }

    #[test]
    fn completion_reported_exactly_once() {
        let mut session = ScanSession::new();
        session.start_scan("clip.mp4");
        let epoch = session.epoch();

        let mut completions = 0;
        for _ in 0..10 {
            if session.tick(epoch) == TickOutcome::Completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(session.phase(), Phase::Results);
    }

    #[test]
    fn reset_immediately_after_start_leaves_idle() {
        let mut session = ScanSession::new();
        session.start_scan("clip.mp4");
        let epoch = session.epoch();
        session.reset();

        // A tick scheduled before the reset must not apply.
        assert_eq!(session.tick(epoch), TickOutcome::Ignored);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.progress_percent(), 0);
        assert!(session.file_name().is_empty());
    }

    #[test]
    fn stale_epoch_cannot_advance_a_new_scan() {
        let mut session = ScanSession::new();
        session.start_scan("old.mp4");
        let stale = session.epoch();
        session.reset();
        session.start_scan("new.mp4");

        assert_eq!(session.tick(stale), TickOutcome::Ignored);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn reset_from_results_clears_file_name() {
        let mut session = ScanSession::new();
        session.start_scan("clip.mp4");
        run_to_results(&mut session);

        session.reset();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.file_name().is_empty());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = ScanSession::new();
        session.start_scan("clip.mp4");
        session.reset();
        let snapshot = (session.phase(), session.progress_percent());
        session.reset();
        assert_eq!((session.phase(), session.progress_percent()), snapshot);
        assert_eq!(session.tick(session.epoch()), TickOutcome::Ignored);
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let mut session = ScanSession::new();
        assert!(!session.start_scan(""));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn start_while_scanning_is_a_no_op() {
        let mut session = ScanSession::new();
        session.start_scan("first.mp4");
        let epoch = session.epoch();
        session.tick(epoch);

        assert!(!session.start_scan("second.mp4"));
        assert_eq!(session.file_name(), "first.mp4");
        assert_eq!(session.progress_percent(), SCAN_STEPS[0].percent);
    }
}
