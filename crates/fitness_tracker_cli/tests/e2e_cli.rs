use std::process::Command;

fn tracker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fitness-tracker"));
    cmd.env_remove("FITNESS_TRACKER_FORMAT")
        .env_remove("RUST_LOG")
        .env("FITNESS_TRACKER_LOG_LEVEL", "warn");
    cmd
}

#[test]
fn e2e_demo_batch_prints_three_summaries() {
    let output = tracker().output().expect("spawn fitness-tracker");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: Walking; Duration: 1.000 h.; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn e2e_json_output_from_arguments() {
    let output = tracker()
        .args(["--format", "json", "SWM:720,1,80,25,40"])
        .output()
        .expect("spawn fitness-tracker");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json line");
    assert_eq!(v["workout_type_label"], "Swimming");
    assert_eq!(v["duration_hours"].as_f64(), Some(1.0));
}

#[test]
fn e2e_unknown_code_fails_after_processing_rest() {
    let output = tracker()
        .args(["XYZ:1,1,1", "RUN:15000,1,75"])
        .output()
        .expect("spawn fitness-tracker");
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Workout type: Running"));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("unknown workout type: XYZ"));
}

#[test]
fn e2e_invalid_format_env_is_config_error() {
    let output = tracker()
        .env("FITNESS_TRACKER_FORMAT", "xml")
        .output()
        .expect("spawn fitness-tracker");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("FITNESS_TRACKER_FORMAT"));
}
