//! Playback orchestrator.

use std::path::PathBuf;

use super::catalog::{SoundCue, SoundSource};
use super::tool::{AudioTool, AudioToolError, PlayMethod};
use super::tools::platform_tools;
use crate::error::SoundError;

/// What happened to a cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A player accepted the file.
    Played { tool: PlayMethod },
    /// Nothing was played.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Sound is switched off.
    Muted,
    /// The sound file does not exist.
    FileMissing(PathBuf),
    /// No player is installed.
    NoPlayer,
}

/// Plays sound cues using available players.
///
/// Tries players in priority order. Sound is decoration: a missing file or
/// a machine without any player skips the cue with a warning. A player that
/// starts and then fails is an error.
pub struct Sound {
    tools: Vec<Box<dyn AudioTool>>,
    sound_dir: PathBuf,
    enabled: bool,
}

impl Sound {
    /// Create with platform-appropriate players.
    pub fn new(sound_dir: impl Into<PathBuf>) -> Self {
        Self::with_tools(platform_tools(), sound_dir)
    }

    /// Create with specific players (for testing).
    pub fn with_tools(tools: Vec<Box<dyn AudioTool>>, sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            tools,
            sound_dir: sound_dir.into(),
            enabled: true,
        }
    }

    /// A player that skips every cue.
    pub fn muted() -> Self {
        Self {
            tools: Vec::new(),
            sound_dir: PathBuf::new(),
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// File a cue refers to.
    pub fn resolve(&self, source: &SoundSource) -> PathBuf {
        match source {
            SoundSource::Named(name) => name.path_in(&self.sound_dir),
            SoundSource::File(path) => path.clone(),
        }
    }

    /// Play `cue`.
    pub fn play(&self, cue: &SoundCue) -> Result<PlayOutcome, SoundError> {
        if !self.enabled {
            return Ok(PlayOutcome::Skipped(SkipReason::Muted));
        }

        let path = self.resolve(&cue.source);
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "sound file not found, skipping");
            return Ok(PlayOutcome::Skipped(SkipReason::FileMissing(path)));
        }

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            tracing::debug!(
                tool = tool.name(),
                path = %path.display(),
                blocking = cue.blocking,
                "playing sound"
            );
            match tool.play(&path, cue.blocking) {
                Ok(()) => return Ok(PlayOutcome::Played { tool: tool.method() }),
                Err(AudioToolError::NotFound) => continue,
                Err(AudioToolError::Failed(message)) => {
                    return Err(SoundError::ToolFailed {
                        tool: tool.name(),
                        message,
                    })
                }
            }
        }

        tracing::warn!("no audio player available, skipping sound");
        Ok(PlayOutcome::Skipped(SkipReason::NoPlayer))
    }
}
