//! Unit conversion factors and per-workout calorie coefficients.
//!
//! The calorie coefficients are empirical. They are plain data so a deployment
//! can override them (see [`crate::config`]) without touching the formulas.

use serde::{Deserialize, Serialize};

use crate::{WorkoutError, WorkoutResult};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;
/// Multiplier turning km/h into m/s (rounded, as used by the walking model).
pub const KMH_IN_MS: f64 = 0.278;
/// Stride length for running and walking, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Stroke length for swimming, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RunningCoefficients {
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

impl Default for RunningCoefficients {
    fn default() -> Self {
        Self {
            step_length_m: STEP_LENGTH_M,
            speed_multiplier: 18.0,
            speed_shift: 1.79,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WalkingCoefficients {
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
    pub kmh_to_ms: f64,
}

impl Default for WalkingCoefficients {
    fn default() -> Self {
        Self {
            step_length_m: STEP_LENGTH_M,
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
            kmh_to_ms: KMH_IN_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SwimmingCoefficients {
    pub stroke_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

impl Default for SwimmingCoefficients {
    fn default() -> Self {
        Self {
            stroke_length_m: STROKE_LENGTH_M,
            speed_shift: 1.1,
            weight_multiplier: 2.0,
        }
    }
}

/// Full coefficient set, one block per workout type.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Coefficients {
    pub running: RunningCoefficients,
    pub walking: WalkingCoefficients,
    pub swimming: SwimmingCoefficients,
}

impl Coefficients {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(s: &str) -> WorkoutResult<Self> {
        let parsed: Self = serde_json::from_str(s)
            .map_err(|e| WorkoutError::Config(format!("invalid coefficients: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Lengths and conversion factors must be finite and positive; the shift and
    /// multiplier terms only need to be finite.
    pub fn validate(&self) -> WorkoutResult<()> {
        let positive = [
            ("running.step_length_m", self.running.step_length_m),
            ("walking.step_length_m", self.walking.step_length_m),
            ("walking.kmh_to_ms", self.walking.kmh_to_ms),
            ("swimming.stroke_length_m", self.swimming.stroke_length_m),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(WorkoutError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let finite = [
            ("running.speed_multiplier", self.running.speed_multiplier),
            ("running.speed_shift", self.running.speed_shift),
            ("walking.weight_multiplier", self.walking.weight_multiplier),
            (
                "walking.speed_height_multiplier",
                self.walking.speed_height_multiplier,
            ),
            ("swimming.speed_shift", self.swimming.speed_shift),
            ("swimming.weight_multiplier", self.swimming.weight_multiplier),
        ];
        if let Some((name, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(WorkoutError::InvalidInput(format!(
                "{name} must be finite, got {value}"
            )));
        }
        Ok(())
    }
}
