//! The scripted progress ladder.

/// A single checkpoint in the simulated scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    /// Progress percentage reached at this checkpoint.
    pub percent: u8,
    /// Status message shown while this checkpoint is active.
    pub message: &'static str,
}

/// The fixed checkpoint sequence, consumed in order, one per timer tick.
///
/// Constant for the process lifetime and never user-configurable.
pub const SCAN_STEPS: &[ScanStep] = &[
    ScanStep { percent: 10, message: "Extracting frames..." },
    ScanStep { percent: 30, message: "Analyzing facial landmarks..." },
    ScanStep { percent: 50, message: "Detecting heartbeat (PPG) signals..." },
    ScanStep { percent: 75, message: "Comparing audio-visual synchronization..." },
    ScanStep { percent: 90, message: "Scanning for GAN artifacts..." },
    ScanStep { percent: 100, message: "Finalizing forensic report..." },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_has_six_steps_ending_at_100() {
        assert_eq!(SCAN_STEPS.len(), 6);
        assert_eq!(SCAN_STEPS.last().unwrap().percent, 100);
    }

    #[test]
    fn ladder_is_strictly_increasing() {
        for pair in SCAN_STEPS.windows(2) {
            assert!(pair[0].percent < pair[1].percent);
        }
    }

    #[test]
    fn first_step_extracts_frames() {
        assert_eq!(SCAN_STEPS[0].percent, 10);
        assert_eq!(SCAN_STEPS[0].message, "Extracting frames...");
    }
}
