//! AudioTool trait and related error types.

use std::path::Path;

/// A command-line audio player.
///
/// Each implementation wraps a specific OS tool (afplay, paplay, ...)
/// and knows how to invoke it correctly.
pub trait AudioTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> PlayMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Play the file at `path`. With `blocking`, return only once playback
    /// has finished; otherwise return as soon as the player is started.
    fn play(&self, path: &Path, blocking: bool) -> Result<(), AudioToolError>;
}

/// Error from a specific tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioToolError {
    /// Tool binary could not be started
    NotFound,
    /// Tool ran but reported failure
    Failed(String),
}

/// Which player was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMethod {
    /// macOS built-in player
    Afplay,
    /// PulseAudio / PipeWire
    Paplay,
    /// ALSA
    Aplay,
}

impl PlayMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Afplay => "afplay",
            Self::Paplay => "paplay",
            Self::Aplay => "aplay",
        }
    }
}
