//! The forensic analysis report shown on the results dashboard.
//!
//! Every value in a report is a canned constant presented as if computed;
//! there is no scoring algorithm behind any of it. The types exist so the
//! UI reads structured fields instead of scattering literals through the
//! views.

mod mock;
mod types;

pub use mock::{
    report_for, DETECTION_BREAKDOWN, FACE_CONFIDENCE, FAKE_PROBABILITY, FILE_METADATA,
    FLAGGED_FRAME, MANIPULATION_TIMELINE, REPORT_ID,
};
pub use types::{AnalysisReport, DetectionSignal, FileMetadata, Severity};
