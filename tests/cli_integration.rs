//! Integration tests for the scorer CLI
//!
//! These tests run the compiled binary end to end:
//! - Human-readable and JSON reports
//! - Argument validation and exit codes
//! - Config-file defaults
//! - The styles listing

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run the scorer with HOME, XDG dirs and cwd isolated in `home`
fn run_scorer(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_web3-design-scorer"))
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("WEB3_SCORER_CONFIG")
        .args(args)
        .output()
        .expect("Failed to execute web3-design-scorer")
}

/// Helper to run the scorer and get stdout as string
fn run_scorer_stdout(home: &Path, args: &[&str]) -> String {
    let output = run_scorer(home, args);
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn run_scorer_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let stdout = run_scorer_stdout(home, args);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_default_text_report() {
    let home = TempDir::new().unwrap();
    let stdout = run_scorer_stdout(home.path(), &[]);

    assert!(stdout.starts_with("🔍 Web3 Design Score\n"));
    assert!(stdout.contains("Base Style   : Aztec-style zk Rollup (aztec)"));
    assert!(stdout.contains("Chain type           : rollup"));
    assert!(stdout.contains("Overall Score          : 0.830"));
    assert!(stdout.contains("Design Grade           : high assurance"));
}

#[test]
fn test_json_report_scenario_b() {
    let home = TempDir::new().unwrap();
    let json = run_scorer_json(
        home.path(),
        &["--style", "zama", "--fhe", "--chain-type", "appchain", "--json"],
    );

    assert_eq!(json["profile"], "zama");
    assert_eq!(json["profileName"], "Zama-style FHE Layer");
    assert_eq!(json["usesFhe"], true);
    assert_eq!(json["usesZk"], false);
    assert_eq!(json["chainType"], "appchain");
    assert_eq!(json["privacyScore"], 0.93);
    assert_eq!(json["soundnessScore"], 0.91);
    assert_eq!(json["performanceScore"], 0.39);
    assert_eq!(json["overallScore"], 0.813);
    assert_eq!(json["grade"], "high assurance");
    assert_eq!(json.as_object().unwrap().len(), 13);
}

#[test]
fn test_json_report_scenario_c_is_balanced() {
    let home = TempDir::new().unwrap();
    let json = run_scorer_json(
        home.path(),
        &["--style", "soundness", "--formal", "--audit", "--chain-type", "sidechain", "--json"],
    );

    assert_eq!(json["soundnessScore"], 1.0);
    assert_eq!(json["performanceScore"], 0.76);
    assert_eq!(json["privacyScore"], 0.55);
    assert_eq!(json["grade"], "balanced");
}

#[test]
fn test_json_matches_text_report() {
    let home = TempDir::new().unwrap();
    let args = ["--style", "aztec", "--zk", "--audit", "--chain-type", "other"];
    let text = run_scorer_stdout(home.path(), &args);

    let mut json_args = args.to_vec();
    json_args.push("--json");
    let json = run_scorer_json(home.path(), &json_args);

    let field = |label: &str| -> String {
        text.lines()
            .find(|l| l.trim_start().starts_with(label))
            .and_then(|l| l.split_once(':'))
            .map(|(_, v)| v.trim().to_string())
            .unwrap()
    };
    for (label, key) in [
        ("Privacy", "privacyScore"),
        ("Soundness", "soundnessScore"),
        ("Performance", "performanceScore"),
        ("Overall Score", "overallScore"),
    ] {
        assert_eq!(field(label), format!("{:.3}", json[key].as_f64().unwrap()), "{}", key);
    }
    assert_eq!(field("Design Grade"), json["grade"].as_str().unwrap());
}

#[test]
fn test_invalid_style_fails() {
    let home = TempDir::new().unwrap();
    let output = run_scorer(home.path(), &["--style", "polygon"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("polygon"));
}

#[test]
fn test_invalid_chain_type_fails() {
    let home = TempDir::new().unwrap();
    let output = run_scorer(home.path(), &["--chain-type", "mainnet"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_yaml_format() {
    let home = TempDir::new().unwrap();
    let stdout = run_scorer_stdout(home.path(), &["--format", "yaml"]);
    assert!(stdout.contains("grade: high assurance"));
    assert!(stdout.contains("profile: aztec"));
}

#[test]
fn test_config_defaults_are_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/web3-design-scorer");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.yaml"),
        "defaults:\n  style: zama\n  chain_type: mainnet\n  format: json\n",
    )
    .unwrap();

    let json = run_scorer_json(home.path(), &[]);
    assert_eq!(json["profile"], "zama");
    // Unknown chain types fall back to other
    assert_eq!(json["chainType"], "other");
    assert_eq!(json["performanceScore"], 0.45);

    // Flags still win
    let json = run_scorer_json(home.path(), &["--style", "aztec", "--chain-type", "rollup"]);
    assert_eq!(json["profile"], "aztec");
    assert_eq!(json["chainType"], "rollup");
}

#[test]
fn test_explicit_missing_config_fails() {
    let home = TempDir::new().unwrap();
    let output = run_scorer(home.path(), &["--config", "does-not-exist.yaml"]);
    assert!(!output.status.success());
}

#[test]
fn test_styles_listing() {
    let home = TempDir::new().unwrap();
    let stdout = run_scorer_stdout(home.path(), &["styles"]);
    assert!(stdout.contains("Aztec-style zk Rollup"));
    assert!(stdout.contains("Zama-style FHE Layer"));
    assert!(stdout.contains("Soundness-First Protocol Lab"));

    let json = run_scorer_json(home.path(), &["styles", "--json"]);
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["aztec", "zama", "soundness"]);
}

#[test]
fn test_log_file_written() {
    let home = TempDir::new().unwrap();
    run_scorer_stdout(home.path(), &["--verbose"]);
    let log = home
        .path()
        .join(".local/share/web3-design-scorer/logs/web3-design-scorer.log");
    let content = fs::read_to_string(log).unwrap();
    assert!(content.contains("Logging initialized"));
    assert!(content.contains("graded high assurance"));
}

#[test]
fn test_report_prints_when_log_dir_unusable() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_web3-design-scorer"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_DATA_HOME", blocker.join("nope"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("WEB3_SCORER_CONFIG")
        .arg("--json")
        .output()
        .expect("Failed to execute web3-design-scorer");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["grade"], "high assurance");
    assert!(String::from_utf8_lossy(&output.stderr).contains("File logging disabled"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/web3-design-scorer");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "defaults:\n  style: polygon\n").unwrap();

    let output = run_scorer(home.path(), &["--verbose", "--json"]);
    assert!(output.status.success());

    // Falls back to built-in defaults
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["profile"], "aztec");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown style: polygon"), "stderr: {}", stderr);

    let log = home
        .path()
        .join(".local/share/web3-design-scorer/logs/web3-design-scorer.log");
    let content = fs::read_to_string(log).unwrap();
    assert!(content.contains("WARN"));
    assert!(content.contains("polygon"));
}
