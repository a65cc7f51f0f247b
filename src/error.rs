//! Error types for banner layout, asset loading and display.

use std::path::PathBuf;

/// Layout constraints violated while fitting a banner into the terminal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("banner too wide: {width} columns needed, terminal has {columns}")]
    BannerTooWide { width: usize, columns: usize },

    #[error("content too tall: {height} rows needed, terminal has {rows}")]
    ContentTooTall { height: usize, rows: usize },

    #[error("banner has no lines")]
    EmptyBanner,

    #[error("no room for body text: terminal has {columns} columns, margins need more")]
    NoRoomForText { columns: usize },
}

/// Errors loading banner art from disk.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("Banner file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read banner {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the terminal port.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Failed to query terminal size: {0}")]
    Size(#[source] std::io::Error),

    #[error("Terminal reported an empty window ({rows}x{columns})")]
    ZeroSize { rows: u16, columns: u16 },

    #[error("Failed to write to terminal: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors from sound playback.
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("Audio player '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}

/// Everything that can abort showing a banner.
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Banner(#[from] BannerError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error(transparent)]
    Sound(#[from] SoundError),
}
