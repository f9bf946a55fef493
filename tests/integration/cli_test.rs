//! Integration tests for the stagelight CLI

use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("calendar"))
        .stdout(predicate::str::contains("format-time"))
        .stdout(predicate::str::contains("STAGELIGHT_LOG"));
}

#[test]
fn unknown_subcommand_exits_2() {
    Sandbox::new()
        .cmd()
        .arg("dance")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// format-time
// ============================================================================

#[test]
fn format_time_truncates_to_seconds() {
    Sandbox::new()
        .cmd()
        .args(["format-time", "75.9"])
        .assert()
        .success()
        .stdout("1:15\n");
}

#[test]
fn format_time_keeps_minutes_unbounded() {
    Sandbox::new()
        .cmd()
        .args(["format-time", "3725"])
        .assert()
        .success()
        .stdout("62:05\n");
}

#[test]
fn format_time_unknown_or_negative_is_zero() {
    for input in ["NaN", "-5"] {
        Sandbox::new()
            .cmd()
            .args(["format-time", input])
            .assert()
            .success()
            .stdout("0:00\n");
    }
}

#[test]
fn format_time_rejects_text() {
    Sandbox::new()
        .cmd()
        .args(["format-time", "soon"])
        .assert()
        .code(2);
}

// ============================================================================
// calendar
// ============================================================================

#[test]
fn snapshot_calendar_october_2026() {
    let output = Sandbox::new()
        .cmd()
        .args(["calendar", "--month", "2026-10"])
        .output()
        .expect("Failed to run stagelight");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    insta::assert_snapshot!("calendar_october_2026", stdout);
}

#[test]
fn calendar_json_describes_grid() {
    let output = Sandbox::new()
        .cmd()
        .args(["calendar", "--month", "2026-02", "--json"])
        .output()
        .expect("Failed to run stagelight");
    assert!(output.status.success());

    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grid["title"], "February 2026");
    // 1 February 2026 is a Sunday
    assert_eq!(grid["leading_blanks"], 0);
    let days = grid["days"].as_array().unwrap();
    assert_eq!(days.len(), 28);
    assert_eq!(days[4]["status"], "booked");
    assert_eq!(days[7]["status"], "pending");
    assert_eq!(days[0]["status"], "available");
}

#[test]
fn calendar_reads_availability_from_config() {
    let sandbox = Sandbox::new();
    let config = sandbox.write(
        "page.toml",
        r#"
[calendar]
booked = [1]
pending = []
"#,
    );

    let output = sandbox
        .cmd()
        .args(["calendar", "--month", "2026-10", "--json", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to run stagelight");
    assert!(output.status.success());

    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grid["days"][0]["status"], "booked");
    assert_eq!(grid["days"][4]["status"], "available");
    assert_eq!(grid["days"][7]["status"], "available");
}

#[test]
fn calendar_rejects_bad_month() {
    Sandbox::new()
        .cmd()
        .args(["calendar", "--month", "2026-13"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected YYYY-MM"));
}

#[test]
fn calendar_with_invalid_config_fails() {
    let sandbox = Sandbox::new();
    let config = sandbox.write("broken.toml", "[calendar\nbooked = 1");

    sandbox
        .cmd()
        .args(["calendar", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// config
// ============================================================================

#[cfg(target_os = "linux")]
#[test]
fn snapshot_config_path() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["config", "path"])
        .output()
        .expect("Failed to run stagelight");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let config_home = sandbox.config_home().display().to_string();
    insta::with_settings!({filters => vec![(config_home.as_str(), "[CONFIG_HOME]")]}, {
        insta::assert_snapshot!("config_path", stdout);
    });
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_writes_defaults_once() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    let written = std::fs::read_to_string(sandbox.config_file()).unwrap();
    assert!(written.contains("DJ Nova"));

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    sandbox
        .cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[cfg(target_os = "linux")]
#[test]
fn config_show_without_file_prints_defaults() {
    Sandbox::new()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[site]"))
        .stdout(predicate::str::contains("artist = \"DJ Nova\""))
        .stdout(predicate::str::contains("[[players]]"));
}

#[test]
fn config_show_merges_partial_file() {
    let sandbox = Sandbox::new();
    let config = sandbox.write(
        "page.toml",
        r#"
[site]
artist = "DJ Kali"

[preview]
theme = "ocean"
"#,
    );

    sandbox
        .cmd()
        .args(["config", "show", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("artist = \"DJ Kali\""))
        .stdout(predicate::str::contains("phone = \"254700000000\""))
        .stdout(predicate::str::contains("theme = \"ocean\""));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_for_bash() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stagelight"))
        .stdout(predicate::str::contains("format-time"));
}
