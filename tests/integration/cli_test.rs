//! CLI smoke tests (commands that do not need a TTY).

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{temp_subtitle, SAMPLE_SRT};

#[test]
fn inspect_reports_cue_count_and_encoding() {
    let (_dir, path) = temp_subtitle("movie.srt", SAMPLE_SRT.as_bytes());

    Command::cargo_bin("subsync")
        .unwrap()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cues:      3"))
        .stdout(predicate::str::contains("encoding:  utf-8"))
        .stdout(predicate::str::contains("skipped:   0"));
}

#[test]
fn inspect_lists_skipped_blocks() {
    let src = "1\nnot a time line\noops\n\n2\n00:00:01,000 --> 00:00:02,000\nok\n";
    let (_dir, path) = temp_subtitle("broken.srt", src.as_bytes());

    Command::cargo_bin("subsync")
        .unwrap()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cues:      1"))
        .stdout(predicate::str::contains("block 1"));
}

#[test]
fn inspect_missing_file_fails_with_context() {
    Command::cargo_bin("subsync")
        .unwrap()
        .arg("inspect")
        .arg("/nonexistent/movie.srt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("subsync")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("vocab"));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("subsync")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subsync"));
}
