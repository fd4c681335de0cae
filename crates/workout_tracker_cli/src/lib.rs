//! Batch driver that turns workout packages into summary lines.

pub mod driver;

pub use driver::{process_packages, sample_packages};
