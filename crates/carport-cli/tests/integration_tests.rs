//! Integration tests for carportctl
//!
//! Each test drives the real binary and checks output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use can_chrysler_protocol::ChryslerVariant;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const REQUIRED: [&str; 18] = [
    "BRAKE_2",
    "EPS_STATUS",
    "SPEED_1",
    "WHEEL_SPEEDS",
    "STEERING",
    "ACC_2",
    "GEAR",
    "ACCEL_GAS_134",
    "DASHBOARD",
    "STEERING_LEVERS",
    "SEATBELT_STATUS",
    "DOORS",
    "TRACTION_BUTTON",
    "BLIND_SPOT_WARNINGS",
    "BRAKE_1",
    "LKAS_COMMAND",
    "LKAS_HEARTBIT",
    "LKAS_HUD",
];

fn carportctl() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("carportctl")?)
}

/// One 10 ms cycle of a Pacifica cruising at 72 km/h in drive.
fn frame_record(cycle: u64) -> Value {
    let now = cycle * 10_000_000;
    let counter = cycle % 16;
    let mut messages = serde_json::Map::new();
    for name in REQUIRED {
        messages.insert(name.to_string(), json!({ "updated_ns": now }));
    }
    let mut with = |name: &str, signals: Value| {
        messages.insert(
            name.to_string(),
            json!({ "updated_ns": now, "signals": signals }),
        );
    };
    with("BRAKE_1", json!({ "VEHICLE_SPEED_KPH": 72.0 }));
    with("GEAR", json!({ "PRNDL": 4 }));
    with("ACC_2", json!({ "ACC_AVAILABLE": 1, "ACC_ENABLED": 1 }));
    with("EPS_STATUS", json!({ "COUNTER": counter }));
    with("LKAS_COMMAND", json!({ "COUNTER": counter }));
    with("LKAS_HUD", json!({ "CAR_MODEL": 3 }));
    with("WHEEL_BUTTONS", json!({ "COUNTER": counter }));

    json!({ "now_ns": now, "messages": messages })
}

fn write_lines(path: &Path, lines: impl IntoIterator<Item = Value>) -> TestResult {
    let text: Vec<String> = lines.into_iter().map(|line| line.to_string()).collect();
    fs::write(path, text.join("\n"))?;
    Ok(())
}

struct Recording {
    _dir: TempDir,
    config: PathBuf,
    frames: PathBuf,
    controls: PathBuf,
}

fn recording(cycles: u64) -> Result<Recording, Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = dir.path().join("car.yaml");
    fs::write(&config, "variant: PACIFICA_2020\n")?;

    let frames = dir.path().join("drive.jsonl");
    write_lines(&frames, (0..cycles).map(frame_record))?;

    let controls = dir.path().join("plan.jsonl");
    write_lines(
        &controls,
        (0..cycles).map(|_| json!({ "enabled": true, "actuators": { "steer": 1.0 } })),
    )?;

    Ok(Recording {
        _dir: dir,
        config,
        frames,
        controls,
    })
}

fn json_lines(stdout: &[u8]) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let text = std::str::from_utf8(stdout)?;
    let mut values = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        values.push(serde_json::from_str(line)?);
    }
    Ok(values)
}

#[test]
fn test_cli_help() -> TestResult {
    carportctl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"));
    Ok(())
}

#[test]
fn test_variants_list() -> TestResult {
    carportctl()?
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains("PACIFICA_2020"))
        .stdout(predicate::str::contains("JEEP_CHEROKEE_2019"));
    Ok(())
}

#[test]
fn test_variants_json() -> TestResult {
    let output = carportctl()?.args(["variants", "--json"]).output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    let variants = value
        .get("variants")
        .and_then(Value::as_array)
        .ok_or("variants is not an array")?;
    assert_eq!(variants.len(), 9);
    Ok(())
}

#[test]
fn test_single_variant_json_has_params() -> TestResult {
    let output = carportctl()?
        .args(["variants", "jeep_cherokee_2019", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.pointer("/params/name"), Some(&json!("JEEP_CHEROKEE_2019")));
    assert!(value
        .pointer("/params/latch_release_speed")
        .is_some_and(Value::is_number));
    Ok(())
}

#[test]
fn test_unknown_variant_exit_code() -> TestResult {
    carportctl()?
        .args(["variants", "DELOREAN_1981"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("DELOREAN_1981"));
    Ok(())
}

#[test]
fn test_replay_json_ramps_torque() -> TestResult {
    let rec = recording(3)?;
    let output = carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .arg("--controls")
        .arg(&rec.controls)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let lines = json_lines(&output.stdout)?;
    assert_eq!(lines.len(), 4);

    let torques: Vec<Value> = lines
        .iter()
        .take(3)
        .map(|cycle| {
            cycle
                .get("frames")
                .and_then(Value::as_array)
                .and_then(|frames| frames.last())
                .and_then(|frame| frame.pointer("/signals/LKAS_STEERING_TORQUE"))
                .cloned()
                .unwrap_or(Value::Null)
        })
        .collect();
    assert_eq!(torques, vec![json!(3.0), json!(6.0), json!(9.0)]);

    let summary = lines.last().ok_or("no summary line")?;
    assert_eq!(summary.pointer("/summary/variant"), Some(&json!("PACIFICA_2020")));
    assert_eq!(summary.pointer("/summary/cycles"), Some(&json!(3)));
    assert_eq!(summary.pointer("/summary/valid_cycles"), Some(&json!(3)));
    assert_eq!(summary.pointer("/summary/commanding_cycles"), Some(&json!(3)));
    Ok(())
}

#[test]
fn test_replay_human_output() -> TestResult {
    let rec = recording(2)?;
    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("LKAS_COMMAND bus=0"))
        .stdout(predicate::str::contains("Replay: PACIFICA_2020"));
    Ok(())
}

#[test]
fn test_replay_without_variant_source() -> TestResult {
    let rec = recording(1)?;
    carportctl()?
        .arg("replay")
        .arg("--frames")
        .arg(&rec.frames)
        .env_remove("CARPORT_CONFIG")
        .assert()
        .failure()
        .code(3);
    Ok(())
}

#[test]
fn test_replay_with_fingerprint() -> TestResult {
    let rec = recording(1)?;
    fs::write(&rec.config, "pause_frames: 50\n")?;
    let fingerprint = rec.frames.with_file_name("fingerprint.json");
    fs::write(
        &fingerprint,
        serde_json::to_string(&ChryslerVariant::JeepCherokee2019.fingerprint())?,
    )?;

    let output = carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .arg("--fingerprint")
        .arg(&fingerprint)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let lines = json_lines(&output.stdout)?;
    let summary = lines.last().ok_or("no summary line")?;
    assert_eq!(
        summary.pointer("/summary/variant"),
        Some(&json!("JEEP_CHEROKEE_2019"))
    );
    Ok(())
}

#[test]
fn test_replay_unresolved_fingerprint_exit_code() -> TestResult {
    let rec = recording(1)?;
    fs::write(&rec.config, "pause_frames: 50\n")?;
    let fingerprint = rec.frames.with_file_name("fingerprint.json");
    fs::write(&fingerprint, r#"{"2047": 8}"#)?;

    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .arg("--fingerprint")
        .arg(&fingerprint)
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_replay_bad_record_exit_code() -> TestResult {
    let rec = recording(1)?;
    fs::write(&rec.frames, "{\"now_ns\": 0}\nnot json\n")?;
    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(":2:"));
    Ok(())
}

#[test]
fn test_replay_unknown_message_exit_code() -> TestResult {
    let rec = recording(1)?;
    fs::write(&rec.frames, r#"{"now_ns": 0, "messages": {"FLUX_CAPACITOR": {}}}"#)?;
    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("FLUX_CAPACITOR"));
    Ok(())
}

#[test]
fn test_replay_bad_config_exit_code() -> TestResult {
    let rec = recording(1)?;
    fs::write(&rec.config, "variant: DELOREAN_1981\n")?;
    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&rec.frames)
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_replay_missing_frames_exit_code() -> TestResult {
    let rec = recording(1)?;
    let missing = rec.frames.with_file_name("missing.jsonl");
    carportctl()?
        .arg("replay")
        .arg("--config")
        .arg(&rec.config)
        .arg("--frames")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.jsonl"));
    Ok(())
}
