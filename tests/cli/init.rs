//! Tests for `cubby init`.

use crate::support::*;

#[test]
fn test_init_creates_store() {
    let t = Test::init("alice");

    let root = t.root();
    assert!(root.join("config.toml").is_file());
    assert!(root.join("identity.key").is_file());

    let config = std::fs::read_to_string(root.join("config.toml")).unwrap();
    assert!(config.contains("[recipients]"));
    assert!(config.contains("alice = \"age1"));
}

#[cfg(unix)]
#[test]
fn test_identity_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init("alice");
    let mode = std::fs::metadata(t.root().join("identity.key"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init("alice");

    let output = t.init_cmd("bob");
    assert_exit(&output, 10);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_honors_dir_flag() {
    let t = Test::new();
    let elsewhere = t.home.path().join("stores/work");

    let output = t
        .cmd()
        .args(["init", "--name", "alice", "--dir"])
        .arg(&elsewhere)
        .output()
        .unwrap();
    assert_success(&output);

    assert!(elsewhere.join("config.toml").is_file());
    assert!(!t.root().exists());
}

#[test]
fn test_init_honors_dir_env() {
    let t = Test::new();
    let elsewhere = t.home.path().join("from-env");

    let output = t
        .cmd()
        .env("CUBBY_DIR", &elsewhere)
        .args(["init", "--name", "alice"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(elsewhere.join("identity.key").is_file());
}
