//! Workflow phases.

use serde::{Deserialize, Serialize};

/// Current display mode of the scan workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for a file; the upload screen is shown.
    #[default]
    Idle,
    /// The simulated scan is running; progress advances on a timer.
    Scanning,
    /// All checkpoints consumed; the report dashboard is shown.
    Results,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Scanning => write!(f, "scanning"),
            Phase::Results => write!(f, "results"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::Scanning).unwrap();
        assert_eq!(json, "\"scanning\"");
    }

    #[test]
    fn phase_deserializes_lowercase() {
        let phase: Phase = serde_json::from_str("\"results\"").unwrap();
        assert_eq!(phase, Phase::Results);
    }

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
