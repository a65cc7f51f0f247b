//! Putting a banner on screen.
//!
//! [`Presenter::show`] runs the whole sequence for one banner: size the
//! screen, lay out, clear, print, play the cue, hold, clear again. Layout
//! errors surface before anything is cleared or printed.

use std::time::Duration;

use crate::banner::Banner;
use crate::error::ShowError;
use crate::render::{render, Dimensions, RenderOptions};
use crate::sound::{PlayOutcome, Sound};
use crate::terminal::Screen;

/// Where the presenter gets the screen size from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSource {
    /// Ask the screen before every banner.
    #[default]
    Query,
    /// Always lay out for this size.
    Fixed(Dimensions),
}

/// Shows banners on a [`Screen`].
pub struct Presenter<S: Screen> {
    screen: S,
    sound: Sound,
    size: SizeSource,
    sleep: Box<dyn FnMut(Duration)>,
}

impl<S: Screen> Presenter<S> {
    pub fn new(screen: S, sound: Sound) -> Self {
        Self {
            screen,
            sound,
            size: SizeSource::Query,
            sleep: Box::new(std::thread::sleep),
        }
    }

    pub fn with_size(mut self, size: SizeSource) -> Self {
        self.size = size;
        self
    }

    /// Replace the function used to hold the screen (for testing).
    pub fn with_sleep(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Show one banner.
    pub fn show(&mut self, banner: &Banner, options: &RenderOptions) -> Result<(), ShowError> {
        let dims = match self.size {
            SizeSource::Query => self.screen.size()?,
            SizeSource::Fixed(dims) => dims,
        };
        tracing::debug!(rows = dims.rows, columns = dims.columns, "laying out banner");

        let lines = render(banner, options, dims)?;

        self.screen.clear()?;
        for line in &lines {
            self.screen.write_line(line)?;
        }
        self.screen.flush()?;
        tracing::debug!(lines = lines.len(), "banner printed");

        if let Some(cue) = &options.sound {
            match self.sound.play(cue)? {
                PlayOutcome::Played { tool } => tracing::debug!(tool = tool.name(), "sound played"),
                PlayOutcome::Skipped(reason) => tracing::debug!(?reason, "sound skipped"),
            }
        }

        if let Some(duration) = options.duration {
            tracing::debug!(seconds = duration.as_secs_f64(), "holding banner");
            (self.sleep)(duration);
            self.screen.clear()?;
        }

        Ok(())
    }
}
