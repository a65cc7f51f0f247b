//! Platform-specific audio players.

mod afplay;
mod aplay;
mod paplay;

pub use afplay::Afplay;
pub use aplay::Aplay;
pub use paplay::Paplay;

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use super::tool::{AudioTool, AudioToolError};

/// Get the platform-appropriate players in priority order.
pub fn platform_tools() -> Vec<Box<dyn AudioTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Afplay::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![Box::new(Paplay::new()), Box::new(Aplay::new())]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if `program` is on the PATH.
fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `program args... path`, waiting for it only when `blocking`.
fn run_player(
    program: &str,
    args: &[&str],
    path: &Path,
    blocking: bool,
) -> Result<(), AudioToolError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null());

    if !blocking {
        spawn_reaped(command.stderr(Stdio::null()))?;
        return Ok(());
    }

    let output = command
        .stderr(Stdio::piped())
        .output()
        .map_err(spawn_error)?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(AudioToolError::Failed(if stderr.is_empty() {
            format!("{} exited with {}", program, output.status)
        } else {
            stderr
        }))
    }
}

/// Start `command` without waiting for it. A background thread waits on
/// the child so it does not linger as a zombie once playback ends.
fn spawn_reaped(command: &mut Command) -> Result<JoinHandle<Option<ExitStatus>>, AudioToolError> {
    let mut child = command.spawn().map_err(spawn_error)?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                tracing::debug!(%status, "background player exited with failure");
            }
            Some(status)
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to wait on background player");
            None
        }
    }))
}

fn spawn_error(e: std::io::Error) -> AudioToolError {
    match e.kind() {
        std::io::ErrorKind::NotFound => AudioToolError::NotFound,
        _ => AudioToolError::Failed(e.to_string()),
    }
}
