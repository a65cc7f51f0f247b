//! macOS afplay audio player.

use std::path::Path;

use super::run_player;
use crate::sound::tool::{AudioTool, AudioToolError, PlayMethod};

/// macOS audio player.
///
/// Uses `afplay`, which ships with the OS, so availability is a platform check.
pub struct Afplay;

impl Afplay {
    /// Create a new Afplay tool.
    pub fn new() -> Self {
        Self
    }
}

impl AudioTool for Afplay {
    fn method(&self) -> PlayMethod {
        PlayMethod::Afplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn play(&self, path: &Path, blocking: bool) -> Result<(), AudioToolError> {
        run_player("afplay", &[], path, blocking)
    }
}

impl Default for Afplay {
    fn default() -> Self {
        Self::new()
    }
}
