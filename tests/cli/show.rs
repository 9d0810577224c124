//! Tests for `cubby show`.

use crate::support::*;

#[test]
fn test_show_json() {
    let t = Test::with_entries(&[("db", "pw\n---\nuser: root\nport: 5432\n")]);

    let output = t.cmd().args(["show", "db", "--json"]).output().unwrap();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["password"], "pw");
    assert_eq!(json["user"], "root");
    assert_eq!(json["port"], "5432");
    assert!(json.get("notes").is_none());
}

#[test]
fn test_show_json_includes_notes() {
    let t = Test::with_entries(&[("bank", "pw\nrecovery codes:\n  1234\n")]);

    let output = t.cmd().args(["show", "bank", "--json"]).output().unwrap();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["password"], "pw");
    assert_eq!(json["notes"], "recovery codes:\n  1234\n");
}

#[test]
fn test_show_missing_entry() {
    let t = Test::init("alice");

    let output = t.show("nope");
    assert_exit(&output, 10);
    assert_stderr_contains(&output, "entry not found: nope");
}

#[test]
fn test_show_missing_key() {
    let t = Test::with_entries(&[("db", "pw\n---\nuser: root\n")]);

    let output = t.show_key("db", "host");
    assert_exit(&output, 10);
    assert_stderr_contains(&output, "no key 'host' in 'db'");
}
