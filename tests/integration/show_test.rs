//! Integration tests for the show command

use crate::helpers::{printed_lines, Sandbox};

const SIZE_3X6: [&str; 4] = ["--rows", "3", "--columns", "6"];

fn show(sandbox: &Sandbox, args: &[&str]) -> (String, String, i32) {
    let mut argv = vec!["show"];
    argv.extend_from_slice(args);
    sandbox.run(&argv)
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn file_banner_is_centered() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("ab.txt", "AB");

    let mut args = vec!["--file", art.to_str().unwrap()];
    args.extend_from_slice(&SIZE_3X6);
    let (stdout, stderr, exit_code) = show(&sandbox, &args);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(printed_lines(&stdout), vec!["  AB  "]);
}

#[test]
fn screen_is_cleared_before_printing() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("ab.txt", "AB");

    let mut args = vec!["--file", art.to_str().unwrap()];
    args.extend_from_slice(&SIZE_3X6);
    let (stdout, _stderr, _exit_code) = show(&sandbox, &args);

    assert!(stdout.starts_with("\x1b[2J"), "got {:?}", stdout);
}

#[test]
fn named_banner_lines_span_the_terminal() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) =
        show(&sandbox, &["hacked", "--rows", "24", "--columns", "80"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let lines = printed_lines(&stdout);
    assert!(!lines.is_empty());
    for line in &lines {
        assert_eq!(line.chars().count(), 80, "{:?}", line);
    }
}

#[test]
fn body_text_is_centered_between_margins() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("x.txt", "X");
    let (stdout, _stderr, exit_code) = show(
        &sandbox,
        &[
            "--file",
            art.to_str().unwrap(),
            "-t",
            "hi",
            "--rows",
            "5",
            "--columns",
            "26",
        ],
    );

    assert_eq!(exit_code, 0);
    let lines = printed_lines(&stdout);
    let margin = " ".repeat(10);
    assert_eq!(lines[1], format!("{margin}  hi  {margin}"));
}

#[test]
fn background_fills_all_but_the_last_row() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("ab.txt", "AB");
    let (stdout, _stderr, exit_code) = show(
        &sandbox,
        &[
            "--file",
            art.to_str().unwrap(),
            "-b",
            "black",
            "--rows",
            "5",
            "--columns",
            "4",
        ],
    );

    assert_eq!(exit_code, 0);
    let lines = printed_lines(&stdout);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "\x1b[40m AB \x1b[0m");
    for fill in &lines[1..] {
        assert_eq!(fill, "\x1b[40m    \x1b[0m");
    }
}

#[test]
fn banner_dir_from_config_replaces_builtin_art() {
    let sandbox = Sandbox::new();
    sandbox.write("art/frozen.txt", "ICE");
    let config = format!(
        "[assets]\nbanner_dir = {:?}\n",
        sandbox.path().join("art").to_str().unwrap()
    );
    sandbox.write("config/config.toml", &config);

    let (stdout, stderr, exit_code) =
        show(&sandbox, &["frozen", "--rows", "3", "--columns", "5"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(printed_lines(&stdout), vec![" ICE "]);
}

// ============================================================================
// Hold
// ============================================================================

#[test]
fn show_for_clears_the_screen_afterwards() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("ab.txt", "AB");

    let mut args = vec!["--file", art.to_str().unwrap(), "--show-for", "0.1"];
    args.extend_from_slice(&SIZE_3X6);
    let (stdout, _stderr, exit_code) = show(&sandbox, &args);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.matches("\x1b[2J").count(), 2);
    assert!(stdout.trim_end_matches("\x1b[1;1H").ends_with("\x1b[2J"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn too_wide_banner_fails_without_output() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("wide.txt", "ABCDEFGHIJ");

    let mut args = vec!["--file", art.to_str().unwrap()];
    args.extend_from_slice(&SIZE_3X6);
    let (stdout, stderr, exit_code) = show(&sandbox, &args);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("banner too wide"), "stderr: {}", stderr);
    assert!(stdout.is_empty(), "stdout: {:?}", stdout);
}

#[test]
fn too_tall_content_fails() {
    let sandbox = Sandbox::new();
    let art = sandbox.write("x.txt", "X");
    let (_stdout, stderr, exit_code) = show(
        &sandbox,
        &[
            "--file",
            art.to_str().unwrap(),
            "-t",
            "aaaaaa bbbbbb cccccc",
            "--rows",
            "3",
            "--columns",
            "30",
        ],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("content too tall"), "stderr: {}", stderr);
}

#[test]
fn missing_banner_file_fails() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = show(&sandbox, &["--file", "missing.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
    assert!(stderr.contains("missing.txt"));
}

// ============================================================================
// Sound
// ============================================================================

#[test]
fn muted_sound_is_silent_success() {
    let sandbox = Sandbox::new();
    let mut args = vec!["updated", "-s", "tada", "--mute"];
    args.extend_from_slice(&["--rows", "24", "--columns", "80"]);
    let (_stdout, stderr, exit_code) = show(&sandbox, &args);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
}

#[test]
fn missing_sound_file_is_skipped_with_warning() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = show(
        &sandbox,
        &["updated", "-s", "won", "--rows", "24", "--columns", "80"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stderr.contains("sound file not found"), "stderr: {}", stderr);
}
