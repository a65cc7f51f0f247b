//! Integration tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{printed_lines, Sandbox};

fn cli(sandbox: &Sandbox) -> Command {
    let mut cmd = Command::cargo_bin("uptane-banners").unwrap();
    cmd.env("UPTANE_BANNERS_CONFIG", sandbox.config_path())
        .env("NO_COLOR", "1")
        .current_dir(sandbox.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    cli(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn list_names_everything_plainly_with_no_color() {
    let sandbox = Sandbox::new();
    cli(&sandbox)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no_update_needed"))
        .stdout(predicate::str::contains("magenta"))
        .stdout(predicate::str::contains("gray"))
        .stdout(predicate::str::contains("lost2"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn unknown_color_is_a_usage_error() {
    let sandbox = Sandbox::new();
    cli(&sandbox)
        .args(["show", "updated", "--color", "purple"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("purple"));
}

#[test]
fn non_positive_hold_is_a_usage_error() {
    let sandbox = Sandbox::new();
    cli(&sandbox)
        .args(["show", "updated", "--show-for", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn completions_generate_for_bash() {
    let sandbox = Sandbox::new();
    cli(&sandbox)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uptane-banners"));
}

#[test]
fn demo_runs_every_banner_at_fixed_size() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) =
        sandbox.run(&["demo", "--mute", "--rows", "40", "--columns", "100"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    // seven banners plus the clear after the final hold
    assert_eq!(stdout.matches("\x1b[2J").count(), 8);
    assert!(printed_lines(&stdout)
        .iter()
        .any(|line| line.contains("Lorem ipsum")));
}
