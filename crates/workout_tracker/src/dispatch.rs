//! Maps a three-letter package code to the matching [`WorkoutRecord`] variant.

use crate::record::{WorkoutKind, WorkoutRecord};
use crate::{WorkoutError, WorkoutResult};

/// One `(code, raw values)` pair as delivered by a sensor.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutPackage {
    pub code: String,
    pub values: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    pub fn read(&self) -> WorkoutResult<WorkoutRecord> {
        read_package(&self.code, &self.values)
    }
}

/// Validate the shape of a raw package and build the record for its type.
///
/// Positional layout:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, lap count
pub fn read_package(code: &str, values: &[f64]) -> WorkoutResult<WorkoutRecord> {
    let kind = WorkoutKind::from_code(code)
        .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))?;
    if values.len() != kind.arity() {
        return Err(WorkoutError::InvalidInput(format!(
            "{code} expects {} values, got {}",
            kind.arity(),
            values.len()
        )));
    }
    tracing::trace!(%kind, ?values, "reading package");

    let action = count("action", values[0])?;
    let (duration, weight) = (values[1], values[2]);
    match kind {
        WorkoutKind::Running => WorkoutRecord::running(action, duration, weight),
        WorkoutKind::Walking => WorkoutRecord::walking(action, duration, weight, values[3]),
        WorkoutKind::Swimming => WorkoutRecord::swimming(
            action,
            duration,
            weight,
            values[3],
            count("lap count", values[4])?,
        ),
    }
}

fn count(field: &str, value: f64) -> WorkoutResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a non-negative integer, got {value}"
        )))
    }
}
