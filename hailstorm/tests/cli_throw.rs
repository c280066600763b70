//! CLI tests for `hailstorm throw`, `crossings` and `config`.
//!
//! Spawns the hailstorm binary in a temp directory and checks stdout and the
//! exit code for solved, malformed and unsolvable inputs.

use std::fs;
use std::process::{Command, Output};

use hailstorm::exit_codes;
use hailstorm::test_support::SAMPLE;

fn hailstorm(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hailstorm"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("hailstorm")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn throw_prints_listing_then_answer() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("Day24.txt"), SAMPLE).expect("write input");

    let output = hailstorm(temp.path(), &["throw"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[(\"x_throw\", 24), "));
    assert_eq!(lines[1], "47");
}

#[test]
fn throw_honours_config_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("puzzle.txt"), SAMPLE).expect("write input");
    fs::write(
        temp.path().join("alt.toml"),
        "input = \"puzzle.txt\"\n[throw]\nsample_offset = 1\n",
    )
    .expect("write config");

    let output = hailstorm(temp.path(), &["--config", "alt.toml", "throw"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output)[1], "47");
}

#[test]
fn malformed_input_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("bad.txt");
    fs::write(&path, "19, 13, 30 @ -2, 1, -2\n18, 19, 22 -1, -1, -2\n").expect("write input");

    let output = hailstorm(temp.path(), &["throw", "bad.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn fractional_origin_exits_unsolved() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("Day24.txt"),
        "19, 13, 30 @ -2, 1, -2\n18, 19, 22 @ -1, -1, -2\n20, 25, 34 @ 1, -5, -3\n",
    )
    .expect("write input");

    let output = hailstorm(temp.path(), &["throw"]);

    assert_eq!(output.status.code(), Some(exit_codes::UNSOLVED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("16633/23"), "stderr: {stderr}");
}

#[test]
fn invalid_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("Day24.txt"), SAMPLE).expect("write input");
    fs::write(temp.path().join("hailstorm.toml"), "[throw]\nsample_size = 1\n")
        .expect("write config");

    let output = hailstorm(temp.path(), &["throw"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn crossings_uses_command_line_area() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("Day24.txt"), SAMPLE).expect("write input");

    let output = hailstorm(temp.path(), &["crossings", "--min", "7", "--max", "27"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["2"]);
}

#[test]
fn config_prints_effective_toml() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = hailstorm(temp.path(), &["config"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("input = \"Day24.txt\""), "stdout: {stdout}");
    assert!(stdout.contains("selection = \"first\""), "stdout: {stdout}");
    assert!(stdout.contains("[crossings]"), "stdout: {stdout}");
}
