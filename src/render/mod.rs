//! Banner layout.
//!
//! Turns a [`Banner`] plus [`RenderOptions`] into the exact lines to print
//! for a terminal of a given size. Pure: nothing here touches the terminal,
//! so every rule below is testable with fixed dimensions.
//!
//! - `style`: ANSI color vocabulary and the paint helper
//! - `wrap`: greedy word wrap for body text

pub mod style;
pub mod wrap;

use std::time::Duration;

use crate::banner::Banner;
use crate::error::LayoutError;
use crate::sound::SoundCue;

pub use style::{Background, Foreground, RESET};
pub use wrap::wrap_paragraph;

/// Columns reserved on each side of body text.
pub const TEXT_MARGIN: usize = 10;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u16,
    pub columns: u16,
}

impl Dimensions {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }
}

/// Text shown below the banner art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyText {
    /// One string; each `\n` starts a new paragraph.
    Text(String),
    /// Paragraphs given individually.
    Paragraphs(Vec<String>),
}

impl BodyText {
    /// The paragraphs to wrap, in order.
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => text.split('\n').collect(),
            Self::Paragraphs(paragraphs) => paragraphs.iter().map(String::as_str).collect(),
        }
    }
}

/// How a banner should be dressed and what happens around it.
///
/// `duration` and `sound` are not used by [`render`]; they are carried here
/// so one value describes a whole scene for the presenter.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Hold the screen this long, then clear it.
    pub duration: Option<Duration>,
    /// Font color for the banner art (never applied to body text).
    pub foreground: Option<Foreground>,
    /// Fill color for the art, the body text margins and the rest of the screen.
    pub background: Option<Background>,
    pub body_text: Option<BodyText>,
    pub sound: Option<SoundCue>,
}

impl RenderOptions {
    pub fn foreground(mut self, color: Foreground) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Background) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(BodyText::Text(text.into()));
        self
    }

    pub fn sound(mut self, cue: SoundCue) -> Self {
        self.sound = Some(cue);
        self
    }

    pub fn hold_for(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Left padding that centers a block `width` columns wide.
///
/// When the difference is odd the right side takes the extra column.
pub fn left_fill(width: usize, columns: usize) -> usize {
    if width >= columns {
        0
    } else {
        (columns - width) / 2
    }
}

/// Lay out `banner` for a terminal of `dims`.
///
/// Returns every line to print after clearing the screen. Each banner line
/// and each fill line is exactly `dims.columns` characters wide, not
/// counting escape sequences.
///
/// # Errors
/// - [`LayoutError::BannerTooWide`] if the longest art line exceeds the columns
/// - [`LayoutError::NoRoomForText`] if body text has words but the margins
///   leave no columns for them
/// - [`LayoutError::ContentTooTall`] if art plus wrapped text exceeds the rows
pub fn render(
    banner: &Banner,
    options: &RenderOptions,
    dims: Dimensions,
) -> Result<Vec<String>, LayoutError> {
    let rows = dims.rows as usize;
    let columns = dims.columns as usize;

    let width = banner.width();
    if width > columns {
        return Err(LayoutError::BannerTooWide { width, columns });
    }

    let text_lines = match &options.body_text {
        Some(body) => wrap_body(body, columns)?,
        None => Vec::new(),
    };

    let height = banner.height() + text_lines.len();
    if height > rows {
        return Err(LayoutError::ContentTooTall { height, rows });
    }

    let left = left_fill(width, columns);
    let mut out = Vec::with_capacity(rows);

    for line in banner.lines() {
        let padded = pad_line(line, left, columns);
        out.push(style::paint(&padded, options.foreground, options.background));
    }

    for text in &text_lines {
        out.push(body_line(text, columns, options.background));
    }

    // Fill to one row short of the screen; the last row stays unpainted.
    if let Some(bg) = options.background {
        let blank = " ".repeat(columns);
        for _ in 0..rows.saturating_sub(height + 1) {
            out.push(style::paint(&blank, None, Some(bg)));
        }
    }

    Ok(out)
}

/// Wrap every paragraph to the width left between the text margins.
///
/// Text with no words at all lays out as no lines, whatever the width.
fn wrap_body(body: &BodyText, columns: usize) -> Result<Vec<String>, LayoutError> {
    let paragraphs = body.paragraphs();
    if paragraphs.iter().all(|p| p.trim().is_empty()) {
        return Ok(Vec::new());
    }

    let width = columns
        .checked_sub(2 * TEXT_MARGIN)
        .filter(|w| *w > 0)
        .ok_or(LayoutError::NoRoomForText { columns })?;

    Ok(paragraphs
        .into_iter()
        .flat_map(|paragraph| wrap_paragraph(paragraph, width))
        .collect())
}

fn pad_line(line: &str, left: usize, columns: usize) -> String {
    let len = line.chars().count();
    let right = columns - left - len;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

/// One wrapped text line: margin, centered text, margin.
fn body_line(text: &str, columns: usize, bg: Option<Background>) -> String {
    let inner = columns - 2 * TEXT_MARGIN;
    let pad = inner.saturating_sub(text.chars().count());
    let left = pad / 2;
    let margin = style::paint(&" ".repeat(TEXT_MARGIN), None, bg);

    format!(
        "{margin}{}{text}{}{margin}",
        " ".repeat(left),
        " ".repeat(pad - left),
    )
}
