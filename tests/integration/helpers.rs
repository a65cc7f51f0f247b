//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Scratch space with an isolated config file location.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    /// Write `content` to `name` inside the sandbox and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the binary with the sandbox config, returning (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_uptane-banners"))
            .args(args)
            .env("UPTANE_BANNERS_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("UPTANE_BANNERS_LOG")
            .env_remove("RUST_LOG")
            .current_dir(self.path())
            .output()
            .expect("Failed to execute uptane-banners");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}

/// Printed lines with the clear-screen sequence removed.
pub fn printed_lines(stdout: &str) -> Vec<String> {
    stdout
        .replace("\x1b[2J", "")
        .replace("\x1b[1;1H", "")
        .lines()
        .map(str::to_string)
        .collect()
}
