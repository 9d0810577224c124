//! Command helper methods for Test.

use super::Test;
use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

impl Test {
    /// Create a cubby command bound to this environment.
    ///
    /// `output()` leaves stdin closed, which cubby reads as "nothing piped".
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin("cubby"));
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("CUBBY_DIR");
        cmd.env_remove("CUBBY_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Run cubby with `input` piped to stdin.
    pub fn piped(&self, args: &[&str], input: &[u8]) -> Output {
        let mut child = self
            .cmd()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn cubby");

        // Dropping the handle closes the pipe. cubby may exit before reading
        // everything (usage errors), which closes its end first.
        let mut stdin = child.stdin.take().expect("stdin was piped");
        if let Err(e) = stdin.write_all(input) {
            assert_eq!(e.kind(), io::ErrorKind::BrokenPipe, "failed to write stdin: {}", e);
        }
        drop(stdin);

        child.wait_with_output().expect("failed to wait for cubby")
    }

    /// Shortcut for `cubby init --name <name>`.
    pub fn init_cmd(&self, name: &str) -> Output {
        self.cmd()
            .args(["init", "--name", name])
            .output()
            .expect("failed to run cubby init")
    }

    /// Shortcut for `cubby insert <args>` with nothing piped.
    pub fn insert(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("insert")
            .args(args)
            .output()
            .expect("failed to run cubby insert")
    }

    /// Shortcut for `cubby insert <args>` with `input` piped.
    pub fn insert_piped(&self, args: &[&str], input: &[u8]) -> Output {
        let mut full = vec!["insert"];
        full.extend_from_slice(args);
        self.piped(&full, input)
    }

    /// Shortcut for `cubby show <name>`.
    pub fn show(&self, name: &str) -> Output {
        self.cmd()
            .args(["show", name])
            .output()
            .expect("failed to run cubby show")
    }

    /// Shortcut for `cubby show <name> <key>`.
    pub fn show_key(&self, name: &str, key: &str) -> Output {
        self.cmd()
            .args(["show", name, key])
            .output()
            .expect("failed to run cubby show")
    }
}
