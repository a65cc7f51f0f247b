//! ANSI style vocabulary for banners.
//!
//! The renderer treats these as opaque prefixes: it never inspects the
//! escape sequences, it only concatenates them in a fixed order.

use clap::ValueEnum;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Font colors available for banner art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Foreground {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Foreground {
    /// Every foreground, in display order.
    pub const ALL: [Foreground; 7] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// The escape sequence selecting this color.
    pub fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            // Bright white; plain 37 renders gray on most terminals
            Self::White => "\x1b[97m",
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

/// Background fills available for banner screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Background {
    Black,
    Blue,
    White,
    Gray,
    Red,
    Magenta,
    Green,
    Yellow,
}

impl Background {
    /// Every background, in display order.
    pub const ALL: [Background; 8] = [
        Self::Black,
        Self::Blue,
        Self::White,
        Self::Gray,
        Self::Red,
        Self::Magenta,
        Self::Green,
        Self::Yellow,
    ];

    /// The escape sequence selecting this background.
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[40m",
            Self::Blue => "\x1b[44m",
            Self::White => "\x1b[107m",
            Self::Gray => "\x1b[100m",
            Self::Red => "\x1b[41m",
            Self::Magenta => "\x1b[45m",
            Self::Green => "\x1b[42m",
            Self::Yellow => "\x1b[43m",
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

/// Wrap `content` in the given styles: foreground first, then background,
/// then a single reset. Unstyled content is returned untouched.
pub fn paint(content: &str, fg: Option<Foreground>, bg: Option<Background>) -> String {
    if fg.is_none() && bg.is_none() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len() + 16);
    if let Some(fg) = fg {
        out.push_str(fg.code());
    }
    if let Some(bg) = bg {
        out.push_str(bg.code());
    }
    out.push_str(content);
    out.push_str(RESET);
    out
}
