//! Terminal port.
//!
//! The presenter talks to the display only through [`Screen`], so layout and
//! orchestration can be exercised without a real terminal. [`TerminalScreen`]
//! is the production adapter built on crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::TerminalError;
use crate::render::Dimensions;

/// A display that banners are printed to.
pub trait Screen {
    /// Current size of the display. Asked for fresh on every banner.
    fn size(&mut self) -> Result<Dimensions, TerminalError>;

    /// Blank the display and home the cursor.
    fn clear(&mut self) -> Result<(), TerminalError>;

    /// Print one line (escape sequences included) followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), TerminalError>;

    /// Push buffered output to the display.
    fn flush(&mut self) -> Result<(), TerminalError> {
        Ok(())
    }
}

/// Screen backed by a real terminal.
///
/// Size comes from crossterm (which asks the controlling tty, so it works
/// even when stdout is redirected). Output goes to `W`, stdout by default.
pub struct TerminalScreen<W: Write = io::Stdout> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    /// Create a screen writing to stdout.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalScreen<W> {
    /// Create a screen writing to any sink (for testing).
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn size(&mut self) -> Result<Dimensions, TerminalError> {
        let (columns, rows) = crossterm::terminal::size().map_err(TerminalError::Size)?;
        if rows == 0 || columns == 0 {
            return Err(TerminalError::ZeroSize { rows, columns });
        }
        Ok(Dimensions { rows, columns })
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.out.flush()?;
        Ok(())
    }
}
