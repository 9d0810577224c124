//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("insert"));
    assert!(out.contains("show"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("cubby"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("cubby"));
}

#[test]
fn test_completions_do_not_need_a_store() {
    let t = Test::new();

    assert_success(&t.cmd().args(["completions", "zsh"]).output().unwrap());
    assert!(!t.root().exists());
}

#[test]
fn test_errors_go_to_stderr() {
    let t = Test::new();

    let output = t.show("anything");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "✗");
}
