//! Computed metrics and their single-line renderings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{WorkoutError, WorkoutResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComputedMetrics {
    pub workout_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl ComputedMetrics {
    /// Human readable summary with three fractional digits per field.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> WorkoutResult<String> {
        serde_json::to_string(self)
            .map_err(|e| WorkoutError::InvalidInput(format!("cannot serialize summary: {e}")))
    }
}

impl fmt::Display for ComputedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Duration: {:.3} h.; Distance: {:.3} km; Speed: {:.3} km/h; Calories: {:.3}.",
            self.workout_type, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn render(self, metrics: &ComputedMetrics) -> WorkoutResult<String> {
        match self {
            Self::Text => Ok(metrics.message()),
            Self::Json => metrics.to_json(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WorkoutError::Config(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim() -> ComputedMetrics {
        ComputedMetrics {
            workout_type: "Swimming".into(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn message_has_fixed_layout() {
        assert_eq!(
            swim().message(),
            "Swimming; Duration: 1.000 h.; Distance: 0.994 km; Speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn json_uses_field_names() {
        let v: serde_json::Value =
            serde_json::from_str(&swim().to_json().expect("json")).expect("parse");
        assert_eq!(v["workout_type"], "Swimming");
        assert_eq!(v["calories"].as_f64(), Some(336.0));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
