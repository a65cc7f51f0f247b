//! Linux PulseAudio player.

use std::path::Path;

use super::{run_player, tool_exists};
use crate::sound::tool::{AudioTool, AudioToolError, PlayMethod};

/// PulseAudio player.
///
/// Uses `paplay`; also works against PipeWire's Pulse server.
pub struct Paplay;

impl Paplay {
    /// Create a new Paplay tool.
    pub fn new() -> Self {
        Self
    }
}

impl AudioTool for Paplay {
    fn method(&self) -> PlayMethod {
        PlayMethod::Paplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("paplay")
    }

    fn play(&self, path: &Path, blocking: bool) -> Result<(), AudioToolError> {
        run_player("paplay", &[], path, blocking)
    }
}

impl Default for Paplay {
    fn default() -> Self {
        Self::new()
    }
}
