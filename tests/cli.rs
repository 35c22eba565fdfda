use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn workspace(direct: &str, indirect: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join("direct"), direct).expect("write direct");
    fs::write(dir.path().join("indirect"), indirect).expect("write indirect");
    dir
}

fn consolidate(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("consolidate").expect("binary exists");
    cmd.current_dir(dir)
        .args(["direct", "indirect", "consolidated"]);
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn writes_consolidated_table() {
    let dir = workspace("casa ||| house ||| 0-0\n", "casa ||| house ||| 0.5\n");
    consolidate(dir.path()).assert().success();
    let written = fs::read_to_string(dir.path().join("consolidated")).expect("output read");
    assert_eq!(written, "casa ||| house ||| 0.5 0-0 2.718\n");
}

#[test]
fn hierarchical_and_log_prob_flags() {
    let dir = workspace(
        "X casa ||| NP house ||| 0-0 ||| 0.3\n",
        "X casa ||| NP house ||| 0.7\n",
    );
    consolidate(dir.path())
        .args(["--Hierarchical", "--LogProb"])
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("consolidated")).expect("output read");
    assert_eq!(written, "NP X ||| house ||| casa ||| 0-0 ||| 0.7 0.3 1\n");
}

#[test]
fn unknown_flag_fails() {
    let dir = workspace("", "");
    consolidate(dir.path())
        .arg("--Factored")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_positional_argument_fails() {
    let mut cmd = Command::cargo_bin("consolidate").expect("binary exists");
    cmd.args(["direct", "indirect"]).assert().failure().code(2);
}

#[test]
fn validation_failure_exits_with_error() {
    let dir = workspace("casa ||| house ||| 0-0\n", "casa ||| home ||| 0.5\n");
    let assert = consolidate(dir.path()).arg("--quiet").assert().failure().code(1);
    let stderr = stderr_of(assert.get_output());
    assert!(
        stderr.contains("source phrase does not match in line 1: 'house' != 'home'"),
        "{stderr}"
    );
}

#[test]
fn field_count_failure_names_expected_items() {
    let dir = workspace("X casa ||| NP house ||| 0-0\n", "X casa ||| NP house ||| 0.7\n");
    let assert = consolidate(dir.path())
        .args(["--Hierarchical", "--quiet"])
        .assert()
        .failure()
        .code(1);
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("expected 4 items"), "{stderr}");
}

#[test]
fn report_is_written_as_json() {
    let dir = workspace(
        "a ||| x ||| d1\nb ||| y ||| d2\n",
        "a ||| x ||| i1\nb ||| y ||| i2\n",
    );
    consolidate(dir.path())
        .args(["--LogProb", "--report", "report.json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("report.json")).expect("report read"),
    )
    .expect("report parsed");
    assert_eq!(report["line_count"], 2);
    assert_eq!(report["log_prob"], true);
    assert_eq!(report["hierarchical"], false);
    assert_eq!(report["phrase_count_feature"], "1");
    assert_eq!(report["output"], "consolidated");
}
