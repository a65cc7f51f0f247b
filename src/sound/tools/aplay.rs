//! Linux ALSA player.

use std::path::Path;

use super::{run_player, tool_exists};
use crate::sound::tool::{AudioTool, AudioToolError, PlayMethod};

/// ALSA player.
///
/// Uses `aplay -q`. Plays WAV only.
pub struct Aplay;

impl Aplay {
    /// Create a new Aplay tool.
    pub fn new() -> Self {
        Self
    }
}

impl AudioTool for Aplay {
    fn method(&self) -> PlayMethod {
        PlayMethod::Aplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("aplay")
    }

    fn play(&self, path: &Path, blocking: bool) -> Result<(), AudioToolError> {
        run_player("aplay", &["-q"], path, blocking)
    }
}

impl Default for Aplay {
    fn default() -> Self {
        Self::new()
    }
}
