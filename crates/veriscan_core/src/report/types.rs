//! Report data types.

use serde::Serialize;

/// Styling band derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Threshold mapping used wherever a score is colored:
    /// above 80 is high, above 40 is medium, the rest is low.
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            Severity::High
        } else if score > 40 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// One row of the detection breakdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectionSignal {
    /// Display label, e.g. "Lip-Sync Mismatch".
    pub label: &'static str,
    /// Confidence score, 0-100.
    pub score: u8,
    /// One-line explanation shown under the score bar.
    pub description: &'static str,
}

impl DetectionSignal {
    /// Styling band for this signal's score.
    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score)
    }
}

/// Container metadata shown in the sidebar card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FileMetadata {
    pub resolution: &'static str,
    pub frame_rate: &'static str,
    pub audio_codec: &'static str,
    pub duration: &'static str,
}

/// The full mock report for one analyzed file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Name of the analyzed file (the only field derived from input).
    pub file_name: String,
    /// Report identifier shown in the header.
    pub report_id: &'static str,
    /// Scan date, formatted for display.
    pub scanned_on: String,
    /// Overall probability that the file is synthetic, 0-100.
    pub fake_probability: u8,
    /// Frame number highlighted in the detection overlay.
    pub flagged_frame: u32,
    /// Face-box confidence shown on the overlay, 0-100.
    pub face_confidence: u8,
    /// Per-signal breakdown, in fixed display order.
    pub breakdown: &'static [DetectionSignal],
    /// Manipulation-probability bars for the timeline chart, 0-100 each.
    pub timeline: &'static [u8],
    /// Container metadata card contents.
    pub metadata: FileMetadata,
}

impl AnalysisReport {
    /// Whether the overall verdict flags the file as synthetic.
    pub fn is_fake(&self) -> bool {
        self.fake_probability > 50
    }

    /// Verdict headline for the overall score card.
    pub fn verdict(&self) -> &'static str {
        if self.is_fake() {
            "MANIPULATED"
        } else {
            "AUTHENTIC"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_score(81), Severity::High);
        assert_eq!(Severity::from_score(80), Severity::Medium);
        assert_eq!(Severity::from_score(41), Severity::Medium);
        assert_eq!(Severity::from_score(40), Severity::Low);
        assert_eq!(Severity::from_score(0), Severity::Low);
    }
}
