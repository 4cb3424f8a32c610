//! Integration tests for argument parsing and `--dry-run` rendering.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `hdi` with colors off and an isolated, not-yet-existing config file.
fn hdi(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hdi"));
    cmd.env("NO_COLOR", "1")
        .env("HDI_CONFIG", dir.path().join("config.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run hdi");
    assert!(output.status.success(), "hdi failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_verbs() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("attach"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("udifrez"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hdi"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    hdi(&dir).arg("compact").assert().failure();
}

// --- Dry-run rendering ---

#[test]
fn test_dry_run_attach_prints_invocation() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "attach", "a.dmg", "--readonly", "--nobrowse"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/usr/bin/hdiutil attach \"a.dmg\" -readonly -nobrowse",
        ));
}

#[test]
fn test_dry_run_detach_force() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "detach", "disk2", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("detach \"disk2\" -force"));
}

#[test]
fn test_dry_run_json_convert_orders_arguments() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(hdi(&dir).args([
        "--dry-run",
        "--json",
        "convert",
        "in.dmg",
        "--format",
        "UDZO",
        "-o",
        "out.dmg",
        "--ov",
    ]));

    assert_eq!(value["program"], "/usr/bin/hdiutil");
    assert_eq!(value["mode"], "direct");
    assert_eq!(
        value["args"],
        serde_json::json!(["convert", "-format", "UDZO", "-o", "out.dmg", "-ov", "in.dmg"])
    );
    assert!(value.get("script").is_none());
}

#[test]
fn test_dry_run_bridged_shows_shell_script() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "--bridged", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "do shell script \"\\\"/usr/bin/hdiutil\\\" info\"",
        ));
}

#[test]
fn test_dry_run_bridged_create_changes_into_destination() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(hdi(&dir).args([
        "--dry-run",
        "--bridged",
        "--json",
        "create",
        "new.dmg",
        "-d",
        "/tmp/out",
        "--size",
        "10m",
    ]));

    assert_eq!(value["mode"], "bridged");
    assert_eq!(
        value["args"],
        serde_json::json!(["create", "/tmp/out/new.dmg", "-size", "10m"])
    );
    let script = value["script"].as_str().expect("script");
    assert!(script.starts_with("do shell script \"cd \\\"/tmp/out\\\" && "), "{script}");
}

#[test]
fn test_dry_run_create_with_srcfolder_needs_no_size() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "create", "x.dmg", "--srcfolder", "/tmp/src", "--fs", "apfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-srcfolder \"/tmp/src\""))
        .stdout(predicate::str::contains("-fs \"APFS\""));
}

// --- Argument validation ---

#[test]
fn test_create_without_size_or_source_fails() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "create", "x.dmg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--size"));
}

#[test]
fn test_convert_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "convert", "a.dmg", "-f", "ZIP", "-o", "b.dmg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZIP"));
}

#[test]
fn test_attach_readonly_conflicts_with_readwrite() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "attach", "a.dmg", "--readonly", "--readwrite"])
        .assert()
        .failure();
}

#[test]
fn test_attach_rejects_malformed_image_key() {
    let dir = TempDir::new().unwrap();
    hdi(&dir)
        .args(["--dry-run", "attach", "a.dmg", "--imagekey", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected key=value"));
}

// --- Environment and error reporting ---

#[test]
fn test_no_color_env_with_any_value_is_accepted() {
    let dir = TempDir::new().unwrap();
    for value in ["1", "true", ""] {
        hdi(&dir)
            .env("NO_COLOR", value)
            .args(["--dry-run", "info"])
            .assert()
            .success()
            .stdout(predicate::str::contains("info"));
    }
}

#[test]
fn test_json_error_reports_code_for_missing_binary() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "binary: /nonexistent/hdiutil\n").unwrap();

    let output = hdi(&dir).args(["--json", "usage"]).output().expect("run hdi");
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "unexpected");
    assert!(
        value["message"].as_str().expect("message").contains("/nonexistent/hdiutil"),
        "{value}"
    );
}

#[test]
fn test_human_error_goes_to_stderr_for_missing_binary() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "binary: /nonexistent/hdiutil\n").unwrap();

    hdi(&dir)
        .arg("usage")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}
