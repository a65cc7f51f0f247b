//! Banner art and the catalog of named banners.
//!
//! The named banners ship inside the binary. A configured asset directory
//! replaces them with `<dir>/<name>.txt`, and any other file can be loaded
//! with [`Banner::load`].

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{BannerError, LayoutError};

/// A block of ASCII art: one or more lines, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    lines: Vec<String>,
}

impl Banner {
    /// Build a banner from its lines.
    ///
    /// # Errors
    /// [`LayoutError::EmptyBanner`] if `lines` is empty.
    pub fn new(lines: Vec<String>) -> Result<Self, LayoutError> {
        if lines.is_empty() {
            return Err(LayoutError::EmptyBanner);
        }
        Ok(Self { lines })
    }

    /// Split text into banner lines on `\n`.
    ///
    /// A trailing newline produces a final empty line, so the art keeps the
    /// same height it has on disk. Carriage returns before a newline are
    /// dropped.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        // split always yields at least one item
        Self { lines }
    }

    /// Read a banner from a text file.
    pub fn load(path: &Path) -> Result<Self, BannerError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                BannerError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                BannerError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of the longest line, in characters.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// The status screens of an Uptane update demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum BannerName {
    Updated,
    Defended,
    Frozen,
    Hacked,
    Compromised,
    Replay,
    NoUpdateNeeded,
}

impl BannerName {
    pub const ALL: [BannerName; 7] = [
        Self::Updated,
        Self::Defended,
        Self::Frozen,
        Self::Hacked,
        Self::Compromised,
        Self::Replay,
        Self::NoUpdateNeeded,
    ];

    /// File stem of the banner's art, e.g. `no_update_needed`.
    pub fn stem(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Defended => "defended",
            Self::Frozen => "frozen",
            Self::Hacked => "hacked",
            Self::Compromised => "compromised",
            Self::Replay => "replay",
            Self::NoUpdateNeeded => "no_update_needed",
        }
    }

    /// The art compiled into the binary.
    pub fn builtin(self) -> &'static str {
        match self {
            Self::Updated => include_str!("../../ascii/updated.txt"),
            Self::Defended => include_str!("../../ascii/defended.txt"),
            Self::Frozen => include_str!("../../ascii/frozen.txt"),
            Self::Hacked => include_str!("../../ascii/hacked.txt"),
            Self::Compromised => include_str!("../../ascii/compromised.txt"),
            Self::Replay => include_str!("../../ascii/replay.txt"),
            Self::NoUpdateNeeded => include_str!("../../ascii/no_update_needed.txt"),
        }
    }
}

impl fmt::Display for BannerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Resolves named banners to art.
#[derive(Debug, Clone, Default)]
pub struct BannerCatalog {
    dir: Option<PathBuf>,
}

impl BannerCatalog {
    /// Catalog serving the built-in art.
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    /// Catalog reading `<dir>/<name>.txt`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Where `name` would be read from, if this catalog reads from disk.
    pub fn path_for(&self, name: BannerName) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.txt", name.stem())))
    }

    /// Get the art for `name`.
    pub fn get(&self, name: BannerName) -> Result<Banner, BannerError> {
        match self.path_for(name) {
            Some(path) => {
                tracing::debug!(banner = %name, path = %path.display(), "loading banner");
                Banner::load(&path)
            }
            None => Ok(Banner::from_text(name.builtin())),
        }
    }
}
