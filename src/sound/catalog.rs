//! Named sound effects and cues.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Sound effects that accompany the demo banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SoundName {
    Tada,
    Won,
    Lost,
    #[value(name = "lost2")]
    Lost2,
    Satan,
    Witch,
    Doomed,
    Ice,
    #[value(name = "ice2")]
    Ice2,
}

impl SoundName {
    pub const ALL: [SoundName; 9] = [
        Self::Tada,
        Self::Won,
        Self::Lost,
        Self::Lost2,
        Self::Satan,
        Self::Witch,
        Self::Doomed,
        Self::Ice,
        Self::Ice2,
    ];

    pub fn stem(self) -> &'static str {
        match self {
            Self::Tada => "tada",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Lost2 => "lost2",
            Self::Satan => "satan",
            Self::Witch => "witch",
            Self::Doomed => "doomed",
            Self::Ice => "ice",
            Self::Ice2 => "ice2",
        }
    }

    /// `<dir>/<stem>.wav`
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.wav", self.stem()))
    }
}

impl fmt::Display for SoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Where a sound comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A catalog sound, resolved against the configured sound directory.
    Named(SoundName),
    /// An explicit file.
    File(PathBuf),
}

/// A sound to play after a banner is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    pub source: SoundSource,
    /// Wait for playback to finish before moving on.
    pub blocking: bool,
}

impl SoundCue {
    /// Blocking cue for a catalog sound.
    pub fn named(name: SoundName) -> Self {
        Self {
            source: SoundSource::Named(name),
            blocking: true,
        }
    }

    /// Blocking cue for a file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: SoundSource::File(path.into()),
            blocking: true,
        }
    }

    pub fn non_blocking(mut self) -> Self {
        self.blocking = false;
        self
    }
}
