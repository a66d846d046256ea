//! End-to-end CLI tests
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests
//!
//! Everything here runs the real binary but never a real CMake: either via
//! --dry-run or by pointing the compiler probe at a binary whose --version
//! output cannot satisfy the version check.

use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_cli_help() {
    let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--sanitizer"));
}

#[test]
fn test_cli_version() {
    let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("configen"));
}

#[test]
fn test_cli_rejects_bad_format() {
    let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
    cmd.args(["--dry-run", "--format", "yaml"])
        .assert()
        .failure();
}

#[test]
fn test_missing_toolchain_file_fails_with_diagnostic() {
    let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
    cmd.args(["--toolchain", "/nonexistent/toolchain.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read toolchain file"));
}

// The remaining tests exercise the Linux branch and only make sense when the
// host actually dispatches to it.
#[cfg(target_os = "linux")]
mod linux {
    use super::*;

    /// Toolchain whose probe runs `echo --version`; the output "--version"
    /// contains "version", so the precondition passes without a compiler.
    fn passing_toolchain() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "compiler = \"echo\"").unwrap();
        writeln!(file, "expected_compiler_version = \"version\"").unwrap();
        file
    }

    /// Toolchain whose probe output can never contain "8.3"
    fn mismatching_toolchain() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "compiler = \"echo\"").unwrap();
        file
    }

    #[test]
    fn test_dry_run_prints_linux_command() {
        let source = tempfile::tempdir().unwrap();
        let toolchain = passing_toolchain();

        let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
        cmd.arg("Debug")
            .args(["--sanitizer", "address", "--dry-run"])
            .arg("--source-dir")
            .arg(source.path())
            .arg("--toolchain")
            .arg(toolchain.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("-DCMAKE_BUILD_TYPE=Debug"))
            .stdout(predicate::str::contains("-DSANITIZER=address"));

        // Dry run still performs the directory side effect
        assert!(source.path().join("out").is_dir());
    }

    #[test]
    fn test_dry_run_json_output() {
        let source = tempfile::tempdir().unwrap();
        let toolchain = passing_toolchain();

        let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
        let assert = cmd
            .args(["--dry-run", "--format", "json"])
            .arg("--source-dir")
            .arg(source.path())
            .arg("--toolchain")
            .arg(toolchain.path())
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        // First line is the out-directory echo; the JSON document follows
        let json_start = stdout.find('{').unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
        assert_eq!(parsed["argv"][0], "cmake3");
        assert!(parsed["working_dir"].as_str().unwrap().ends_with("/out"));
    }

    #[test]
    fn test_version_mismatch_exits_nonzero_with_both_diagnostic_lines() {
        let source = tempfile::tempdir().unwrap();
        let toolchain = mismatching_toolchain();

        let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
        cmd.arg("--source-dir")
            .arg(source.path())
            .arg("--toolchain")
            .arg(toolchain.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("### ERROR: expected echo version 8.3"))
            .stderr(predicate::str::contains("scl enable devtoolset-8 bash"));
    }

    #[test]
    fn test_version_mismatch_still_creates_out_directory() {
        let source = tempfile::tempdir().unwrap();
        let toolchain = mismatching_toolchain();

        let mut cmd = assert_cmd::Command::cargo_bin("configen").unwrap();
        cmd.arg("--source-dir")
            .arg(source.path())
            .arg("--toolchain")
            .arg(toolchain.path())
            .assert()
            .failure();

        // Directory creation happens before the version check
        assert!(source.path().join("out").is_dir());
    }
}
