use std::io::{self, Write};

use tracing::{debug, warn};
use workout_tracker::observability::{self, BatchReport, Outcome, PackageFailure};
use workout_tracker::{Calculator, OutputFormat, WorkoutPackage, WorkoutResult};

/// Packages processed when no other input is supplied.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn summarize_one(
    package: &WorkoutPackage,
    calc: &Calculator,
    format: OutputFormat,
) -> WorkoutResult<String> {
    let record = package.read()?;
    let metrics = calc.summarize(&record)?;
    format.render(&metrics)
}

/// Summarize every package in order, writing one line per success to `out`.
///
/// A package that fails to parse or compute is logged and recorded in the
/// returned report; the remaining packages are still processed. Only a write
/// failure on `out` stops the batch.
pub fn process_packages<'a, I, W>(
    packages: I,
    calc: &Calculator,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<BatchReport>
where
    I: IntoIterator<Item = &'a WorkoutPackage>,
    W: Write,
{
    let mut report = BatchReport::default();
    for (index, package) in packages.into_iter().enumerate() {
        report.processed += 1;
        match summarize_one(package, calc, format) {
            Ok(line) => {
                writeln!(out, "{line}")?;
                observability::record_package(&package.code, Outcome::Ok);
                debug!(index, code = %package.code, "package summarized");
            }
            Err(error) => {
                warn!(index, code = %package.code, %error, "skipping package");
                observability::record_package(&package.code, Outcome::Failed);
                report.failed.push(PackageFailure {
                    index,
                    code: package.code.clone(),
                    error,
                });
            }
        }
    }
    Ok(report)
}
