use workout_tracker::{Calculator, WorkoutPackage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calc = Calculator::default();
    let package = WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]);
    let metrics = calc.summarize(&package.read()?)?;
    println!("{}", metrics.message());
    Ok(())
}
