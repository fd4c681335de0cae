//! Derived workout metrics (distance, mean speed, calories) from raw sensor
//! packages for running, sports walking and swimming.

use thiserror::Error;

pub mod calculator;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod observability;
pub mod record;
pub mod summary;

pub use calculator::Calculator;
pub use config::Config;
pub use constants::Coefficients;
pub use dispatch::{WorkoutPackage, read_package};
pub use record::{Measurements, WorkoutKind, WorkoutRecord};
pub use summary::{ComputedMetrics, OutputFormat};

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
