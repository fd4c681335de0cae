//! Per-package counters and the report a batch run produces.

use crate::{WorkoutError, WorkoutKind};

pub const PACKAGES_TOTAL: &str = "workout_packages_total";
/// `type` label for packages whose code is not a known workout type.
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Failed,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Failed => "failed",
        }
    }
}

/// Count one processed package. A no-op until a `metrics` recorder is installed.
///
/// Unrecognised codes share the [`UNKNOWN_TYPE`] label so the series count stays bounded.
pub fn record_package(code: &str, outcome: Outcome) {
    let kind = WorkoutKind::from_code(code).map_or(UNKNOWN_TYPE, WorkoutKind::code);
    metrics::counter!(
        PACKAGES_TOTAL,
        "type" => kind,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

#[derive(Debug, PartialEq)]
pub struct PackageFailure {
    pub index: usize,
    pub code: String,
    pub error: WorkoutError,
}

#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: Vec<PackageFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.processed - self.failed.len()
    }
}
