//! Canned demo scores.
//!
//! These constants are the entire "analysis": fixed values recorded from
//! the product mock, returned verbatim for every file.

use chrono::Local;

use super::types::{AnalysisReport, DetectionSignal, FileMetadata};

/// Overall synthetic-media probability shown on the verdict card.
pub const FAKE_PROBABILITY: u8 = 94;

/// Report identifier shown in the dashboard header.
pub const REPORT_ID: &str = "#8X-29382";

/// Frame number highlighted in the detection overlay.
pub const FLAGGED_FRAME: u32 = 1042;

/// Face-box confidence shown on the detection overlay.
pub const FACE_CONFIDENCE: u8 = 98;

/// Detection breakdown rows, in display order.
pub const DETECTION_BREAKDOWN: &[DetectionSignal] = &[
    DetectionSignal {
        label: "Lip-Sync Mismatch",
        score: 96,
        description: "Audio phonemes do not align with mouth visemes.",
    },
    DetectionSignal {
        label: "Unnatural Blinking",
        score: 82,
        description: "Blink frequency is statistically lower than human average.",
    },
    DetectionSignal {
        label: "Inconsistent Texture",
        score: 45,
        description: "Skin texture noise levels are consistent with camera sensor.",
    },
    DetectionSignal {
        label: "Pulse (PPG) Signal",
        score: 89,
        description: "No detectable blood flow pattern in cheek area.",
    },
];

/// Per-second manipulation probability for the timeline chart.
pub const MANIPULATION_TIMELINE: &[u8] = &[
    6, 8, 12, 8, 5, 20, 45, 85, 92, 96, 90, 88, 70, 40, 25, 10, 5, 5, 8, 12, 15, 10, 8, 6, 50, 95,
    98, 92, 50, 20,
];

/// Container metadata for the sidebar card.
pub const FILE_METADATA: FileMetadata = FileMetadata {
    resolution: "1920x1080",
    frame_rate: "30fps",
    audio_codec: "AAC LC",
    duration: "00:32",
};

/// Build the report for `file_name`, stamped with today's date.
pub fn report_for(file_name: impl Into<String>) -> AnalysisReport {
    AnalysisReport {
        file_name: file_name.into(),
        report_id: REPORT_ID,
        scanned_on: Local::now().format("%Y-%m-%d").to_string(),
        fake_probability: FAKE_PROBABILITY,
        flagged_frame: FLAGGED_FRAME,
        face_confidence: FACE_CONFIDENCE,
        breakdown: DETECTION_BREAKDOWN,
        timeline: MANIPULATION_TIMELINE,
        metadata: FILE_METADATA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn report_carries_file_name_and_verdict() {
        let report = report_for("clip.mp4");
        assert_eq!(report.file_name, "clip.mp4");
        assert!(report.is_fake());
        assert_eq!(report.verdict(), "MANIPULATED");
    }

    #[test]
    fn timeline_has_thirty_bars() {
        assert_eq!(MANIPULATION_TIMELINE.len(), 30);
        assert!(MANIPULATION_TIMELINE.iter().all(|&b| b <= 100));
    }

    #[test]
    fn breakdown_order_is_fixed() {
        let labels: Vec<&str> = DETECTION_BREAKDOWN.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            [
                "Lip-Sync Mismatch",
                "Unnatural Blinking",
                "Inconsistent Texture",
                "Pulse (PPG) Signal",
            ]
        );
    }

    #[test]
    fn breakdown_severities_follow_thresholds() {
        let severities: Vec<Severity> =
            DETECTION_BREAKDOWN.iter().map(|s| s.severity()).collect();
        assert_eq!(
            severities,
            [
                Severity::High,
                Severity::High,
                Severity::Medium,
                Severity::High,
            ]
        );
    }

    #[test]
    fn report_serializes_for_export() {
        let report = report_for("clip.mp4");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("Lip-Sync Mismatch"));
        assert!(json.contains("\"fake_probability\":94"));
    }
}
