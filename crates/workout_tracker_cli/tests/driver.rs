use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use regex::Regex;
use workout_tracker::observability::{BatchReport, PACKAGES_TOTAL};
use workout_tracker::{Calculator, OutputFormat, WorkoutError, WorkoutPackage};
use workout_tracker_cli::process_packages;

fn run(packages: &[WorkoutPackage], format: OutputFormat) -> (String, BatchReport) {
    let mut out = Vec::new();
    let report =
        process_packages(packages, &Calculator::default(), format, &mut out).expect("write");
    (String::from_utf8(out).expect("utf8"), report)
}

#[test]
fn failing_package_does_not_stop_the_batch() {
    let packages = vec![
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("XYZ", [1.0, 1.0, 1.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0]),
        WorkoutPackage::new("SWM", [720.0, 0.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let (text, report) = run(&packages, OutputFormat::Text);

    assert_eq!(report.processed, 5);
    assert_eq!(report.succeeded(), 2);
    let indices: Vec<_> = report.failed.iter().map(|f| f.index).collect();
    assert_eq!(indices, [1, 2, 3]);
    assert_eq!(
        report.failed[0].error,
        WorkoutError::UnknownWorkoutType("XYZ".into())
    );
    assert!(matches!(report.failed[1].error, WorkoutError::InvalidInput(_)));
    assert!(matches!(report.failed[2].error, WorkoutError::InvalidInput(_)));

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Running;"));
    assert!(lines[1].starts_with("Swimming;"));
}

#[test]
fn text_lines_are_greppable() {
    let re = Regex::new(
        r"^\w+; Duration: \d+\.\d{3} h\.; Distance: \d+\.\d{3} km; Speed: \d+\.\d{3} km/h; Calories: \d+\.\d{3}\.$",
    )
    .expect("regex");
    let (text, report) = run(&workout_tracker_cli::sample_packages(), OutputFormat::Text);
    assert!(report.is_clean());
    assert!(text.lines().all(|l| re.is_match(l)), "{text}");
}

#[test]
fn json_output_is_one_object_per_line() {
    let packages = vec![WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0])];
    let (text, _) = run(&packages, OutputFormat::Json);
    let v: serde_json::Value = serde_json::from_str(text.trim_end()).expect("json line");
    assert_eq!(v["workout_type"], "Swimming");
    assert_eq!(v["mean_speed_kmh"].as_f64(), Some(1.0));
    assert_eq!(v["calories"].as_f64(), Some(336.0));
}

#[test]
fn empty_batch_is_clean() {
    let (text, report) = run(&[], OutputFormat::Text);
    assert!(text.is_empty());
    assert_eq!(report.processed, 0);
    assert!(report.is_clean());
}

#[test]
fn mixed_batch_counts_ok_and_failed_packages() {
    let packages = vec![
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("XYZ", [1.0, 1.0, 1.0]),
        WorkoutPackage::new("RUN", [8000.0, 0.75, 62.5]),
        WorkoutPackage::new("QQQ", [1.0, 1.0, 1.0]),
        WorkoutPackage::new("SWM", [720.0, 0.0, 80.0, 25.0, 40.0]),
    ];
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    let (_, report) =
        metrics::with_local_recorder(&recorder, || run(&packages, OutputFormat::Text));
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed.len(), 3);

    let mut seen: Vec<(String, String, u64)> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter(|(key, ..)| key.key().name() == PACKAGES_TOTAL)
        .map(|(key, _, _, value)| {
            let label = |name: &str| {
                key.key()
                    .labels()
                    .find(|l| l.key() == name)
                    .map(|l| l.value().to_string())
                    .unwrap_or_default()
            };
            let DebugValue::Counter(n) = value else {
                panic!("expected a counter");
            };
            (label("type"), label("outcome"), n)
        })
        .collect();
    seen.sort();
    assert_eq!(
        seen,
        [
            ("RUN".to_string(), "ok".to_string(), 2),
            ("SWM".to_string(), "failed".to_string(), 1),
            ("unknown".to_string(), "failed".to_string(), 2),
        ]
    );
}
