//! Tests for `cubby insert`.
//!
//! Test processes have no terminal, so anything that needs a prompt fails
//! and confirmations are accepted without asking.

use crate::support::*;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;

#[test]
fn test_piped_document_is_stored() {
    let t = Test::init("alice");
    let doc = "hunter2\n---\nuser: alice\nurl: github.com\n";

    let output = t.insert_piped(&["web/github"], doc.as_bytes());
    assert_success(&output);

    assert!(t.entry_file("web/github").is_file());
    let shown = t.show("web/github");
    assert_success(&shown);
    assert_eq!(stdout(&shown), doc);
}

#[test]
fn test_piped_document_is_encrypted_at_rest() {
    let t = Test::with_entries(&[("mail", "very-secret-pw\n")]);

    let on_disk = std::fs::read_to_string(t.entry_file("mail")).unwrap();
    assert!(on_disk.contains("AGE ENCRYPTED FILE"));
    assert!(!on_disk.contains("very-secret-pw"));
}

#[test]
fn test_piped_document_replaces_existing_without_asking() {
    let t = Test::with_entries(&[("db", "old\n---\nuser: root\n")]);

    let output = t.insert_piped(&["db"], b"new\n");
    assert_success(&output);

    assert_eq!(stdout(&t.show("db")), "new\n");
}

#[test]
fn test_piped_free_text_is_kept() {
    let t = Test::init("alice");
    let doc = "pw\nrecovery codes:\n  1111 2222\n";

    assert_success(&t.insert_piped(&["bank"], doc.as_bytes()));
    assert_eq!(stdout(&t.show("bank")), doc);
}

#[test]
fn test_piped_malformed_document_leaves_entry_untouched() {
    let t = Test::with_entries(&[("db", "old\n---\nuser: root\n")]);
    let before = std::fs::read(t.entry_file("db")).unwrap();

    let output = t.insert_piped(&["db"], b"new\n---\nuser: [unclosed\n");
    assert_exit(&output, 7);
    assert_stderr_contains(&output, "'db'");

    assert_eq!(std::fs::read(t.entry_file("db")).unwrap(), before);
}

#[test]
fn test_piped_yaml_that_is_not_a_mapping() {
    let t = Test::init("alice");

    let output = t.insert_piped(&["list"], b"pw\n---\n- a\n- b\n");
    assert_exit(&output, 7);
    assert!(!t.entry_file("list").exists());
}

#[test]
fn test_piped_field_value_updates_one_field() {
    let t = Test::with_entries(&[("web/github", "hunter2\n---\nuser: alice\n")]);

    let output = t.insert_piped(&["web/github", "token"], b"ghp_abc123");
    assert_success(&output);

    assert_eq!(stdout(&t.show_key("web/github", "token")), "ghp_abc123\n");
    assert_eq!(stdout(&t.show_key("web/github", "user")), "alice\n");
    assert_eq!(stdout(&t.show_key("web/github", "password")), "hunter2\n");
}

#[test]
fn test_piped_field_value_is_stored_verbatim() {
    let t = Test::with_entries(&[("web/github", "hunter2\n---\nuser: alice\n")]);

    let output = t.insert_piped(&["web/github", "token"], b"ghp_abc123\n");
    assert_success(&output);

    assert_eq!(stdout(&t.show_key("web/github", "token")), "ghp_abc123\n\n");
}

#[test]
fn test_field_on_new_entry_has_empty_password() {
    let t = Test::init("alice");

    assert_success(&t.insert_piped(&["api", "key"], b"k-123"));

    assert_eq!(stdout(&t.show("api")), "\n---\nkey: k-123\n");
}

#[test]
fn test_field_named_password_is_rejected() {
    let t = Test::with_entries(&[("mail", "pw\n")]);

    let output = t.insert_piped(&["mail", "password"], b"other");
    assert_exit(&output, 8);
    assert_stderr_contains(&output, "key 'password' of 'mail'");
    assert_eq!(stdout(&t.show("mail")), "pw\n");
}

#[test]
fn test_field_on_free_text_entry_is_rejected() {
    let t = Test::with_entries(&[("bank", "pw\nnotes here\n")]);

    let output = t.insert_piped(&["bank", "user"], b"alice");
    assert_exit(&output, 8);
}

#[test]
fn test_field_without_pipe_needs_a_terminal() {
    let t = Test::init("alice");

    let output = t.insert(&["api", "key"]);
    assert_exit(&output, 4);
    assert!(!t.entry_file("api").exists());
}

#[test]
fn test_missing_name_is_usage_error() {
    // No store exists: the name check must come first
    let t = Test::new();

    t.insert(&[]).assert().code(2);
    t.insert_piped(&[], b"pw\n").assert().code(2);
    t.insert(&["", "key"]).assert().code(2);
    assert!(!t.root().exists());
}

#[test]
fn test_usage_error_message() {
    let t = Test::new();

    t.insert(&["--force"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cubby insert <name> [<key>]"));
}

#[test]
fn test_invalid_name_is_rejected() {
    let t = Test::init("alice");

    let output = t.insert_piped(&["../escape"], b"pw\n");
    assert_exit(&output, 10);
    assert_stderr_contains(&output, "invalid entry name");
}

#[test]
fn test_insert_without_store() {
    let t = Test::new();

    let output = t.insert_piped(&["mail"], b"pw\n");
    assert_exit(&output, 10);
    assert_stderr_contains(&output, "cubby init");
}

#[test]
fn test_password_prompt_needs_a_terminal() {
    let t = Test::init("alice");

    let output = t.insert(&["mail"]);
    assert_exit(&output, 4);
    assert_stderr_contains(&output, "failed to ask for password");
    assert!(!t.entry_file("mail").exists());
}

#[test]
fn test_multiline_without_terminal_falls_back_to_password() {
    let t = Test::init("alice");

    let output = t
        .cmd()
        .env("EDITOR", "false")
        .env("VISUAL", "false")
        .args(["insert", "-m", "notes"])
        .output()
        .unwrap();

    assert_exit(&output, 4);
    assert_stderr_contains(&output, "failed to ask for password");
}

#[test]
fn test_existing_entry_force_reaches_password_prompt() {
    let t = Test::with_entries(&[("mail", "old\n")]);

    let output = t.insert(&["--force", "mail"]);
    assert_exit(&output, 4);
    assert_eq!(stdout(&t.show("mail")), "old\n");
}

#[test]
fn test_journal_records_each_write() {
    let t = Test::with_entries(&[("web/github", "pw\n")]);
    assert_success(&t.insert_piped(&["web/github", "user"], b"alice\n"));

    let history = t.history();
    let lines: Vec<&str> = history.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("\tweb/github\tRead secret from STDIN"));
    assert!(lines[1].ends_with("\tweb/github\tInserted YAML value from STDIN"));
}

#[test]
fn test_failed_insert_writes_no_journal_line() {
    let t = Test::init("alice");

    t.insert_piped(&["db"], b"pw\n---\n: [\n").assert().code(7);
    assert!(t.history().is_empty());
}

#[test]
fn test_secret_never_printed_on_insert() {
    let t = Test::init("alice");

    let output = t.insert_piped(&["mail"], b"do-not-echo-me\n");
    assert_success(&output);
    assert_stdout_excludes(&output, "do-not-echo-me");
    assert!(!stderr(&output).contains("do-not-echo-me"));
}
