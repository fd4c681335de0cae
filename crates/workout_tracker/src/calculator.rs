//! Distance, mean speed and calorie formulas for each workout type.

use crate::constants::{CM_IN_M, Coefficients, M_IN_KM, MIN_IN_H};
use crate::record::WorkoutRecord;
use crate::summary::ComputedMetrics;
use crate::{WorkoutError, WorkoutResult};

/// Applies the per-type physical model to a [`WorkoutRecord`].
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    coefficients: Coefficients,
}

impl Calculator {
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Distance covered in km, from the action count and step/stroke length.
    pub fn distance_km(&self, record: &WorkoutRecord) -> f64 {
        let step = match record {
            WorkoutRecord::Running { .. } => self.coefficients.running.step_length_m,
            WorkoutRecord::Walking { .. } => self.coefficients.walking.step_length_m,
            WorkoutRecord::Swimming { .. } => self.coefficients.swimming.stroke_length_m,
        };
        f64::from(record.measurements().action) * step / M_IN_KM
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self, record: &WorkoutRecord) -> WorkoutResult<f64> {
        let duration = nonzero("duration", record.measurements().duration_h)?;
        let speed = match record {
            WorkoutRecord::Running { .. } => self.distance_km(record) / duration,
            WorkoutRecord::Walking { base, .. } => {
                f64::from(base.action) * self.coefficients.walking.step_length_m
                    / duration
                    / M_IN_KM
            }
            WorkoutRecord::Swimming {
                pool_length_m,
                lap_count,
                ..
            } => pool_length_m * f64::from(*lap_count) / M_IN_KM / duration,
        };
        finite("mean speed", speed)
    }

    /// Calories burned over the whole workout.
    pub fn calories(&self, record: &WorkoutRecord) -> WorkoutResult<f64> {
        let speed = self.mean_speed_kmh(record)?;
        self.calories_at(record, speed)
    }

    fn calories_at(&self, record: &WorkoutRecord, speed: f64) -> WorkoutResult<f64> {
        let base = record.measurements();
        let calories = match record {
            WorkoutRecord::Running { .. } => {
                let c = &self.coefficients.running;
                (c.speed_multiplier * speed + c.speed_shift) * base.weight_kg / M_IN_KM
                    * (base.duration_h * MIN_IN_H)
            }
            WorkoutRecord::Walking { height_cm, .. } => {
                let c = &self.coefficients.walking;
                let height_m = nonzero("height", height_cm / CM_IN_M)?;
                let speed_ms = speed * c.kmh_to_ms;
                (c.weight_multiplier * base.weight_kg
                    + (speed_ms.powi(2) / height_m) * c.speed_height_multiplier * base.weight_kg)
                    * (base.duration_h * MIN_IN_H)
            }
            WorkoutRecord::Swimming { .. } => {
                let c = &self.coefficients.swimming;
                (speed + c.speed_shift) * c.weight_multiplier * base.weight_kg * base.duration_h
            }
        };
        finite("calories", calories)
    }

    pub fn summarize(&self, record: &WorkoutRecord) -> WorkoutResult<ComputedMetrics> {
        let mean_speed_kmh = self.mean_speed_kmh(record)?;
        let metrics = ComputedMetrics {
            workout_type: record.kind().name().to_string(),
            duration_h: record.measurements().duration_h,
            distance_km: finite("distance", self.distance_km(record))?,
            mean_speed_kmh,
            calories: self.calories_at(record, mean_speed_kmh)?,
        };
        tracing::debug!(
            workout = %record.kind(),
            distance_km = metrics.distance_km,
            mean_speed_kmh = metrics.mean_speed_kmh,
            calories = metrics.calories,
            "summarized workout"
        );
        Ok(metrics)
    }
}

fn nonzero(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value == 0.0 {
        Err(WorkoutError::DivisionByZero(field))
    } else {
        Ok(value)
    }
}

fn finite(field: &str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} is not a finite number"
        )))
    }
}
