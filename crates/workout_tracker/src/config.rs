use crate::WorkoutResult;
use crate::constants::Coefficients;
use crate::summary::OutputFormat;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub output: OutputFormat,
    pub coefficients: Coefficients,
}

impl Config {
    pub fn from_env() -> WorkoutResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> WorkoutResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let mut lookup = |k: &str| get(k).filter(|v| !v.trim().is_empty());
        let output = match lookup("WORKOUT_OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };
        let coefficients = match lookup("WORKOUT_COEFFICIENTS") {
            Some(v) => Coefficients::from_json(&v)?,
            None => Coefficients::default(),
        };
        Ok(Self {
            output,
            coefficients,
        })
    }
}
