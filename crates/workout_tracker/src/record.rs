//! Raw workout readings, one closed enum variant per workout type.

use std::fmt;

use crate::{WorkoutError, WorkoutResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Three-letter code used by sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Name shown in summaries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of raw values a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Readings shared by every workout type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    /// Steps or strokes.
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        ensure_positive("duration", duration_h)?;
        ensure_positive("weight", weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorkoutRecord {
    Running {
        base: Measurements,
    },
    Walking {
        base: Measurements,
        height_cm: f64,
    },
    Swimming {
        base: Measurements,
        pool_length_m: f64,
        lap_count: u32,
    },
}

impl WorkoutRecord {
    pub fn running(action: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Ok(Self::Running {
            base: Measurements::new(action, duration_h, weight_kg)?,
        })
    }

    pub fn walking(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> WorkoutResult<Self> {
        let base = Measurements::new(action, duration_h, weight_kg)?;
        ensure_positive("height", height_cm)?;
        Ok(Self::Walking { base, height_cm })
    }

    pub fn swimming(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: u32,
    ) -> WorkoutResult<Self> {
        let base = Measurements::new(action, duration_h, weight_kg)?;
        ensure_positive("pool length", pool_length_m)?;
        if lap_count == 0 {
            return Err(WorkoutError::InvalidInput(
                "lap count must be positive".into(),
            ));
        }
        Ok(Self::Swimming {
            base,
            pool_length_m,
            lap_count,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn measurements(&self) -> &Measurements {
        match self {
            Self::Running { base } | Self::Walking { base, .. } | Self::Swimming { base, .. } => {
                base
            }
        }
    }
}

fn ensure_positive(field: &str, value: f64) -> WorkoutResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}
