//! Sound effects for banners.
//!
//! Playback shells out to whichever command-line player the platform has:
//! - macOS: afplay
//! - Linux: paplay, then aplay
//!
//! # Usage
//!
//! ```no_run
//! use uptane_banners::sound::{Sound, SoundCue, SoundName};
//!
//! let sound = Sound::new("sounds");
//! sound.play(&SoundCue::named(SoundName::Tada)).unwrap();
//! ```

pub mod catalog;
pub mod play;
pub mod tool;
pub mod tools;

pub use catalog::{SoundCue, SoundName, SoundSource};
pub use play::{PlayOutcome, SkipReason, Sound};
pub use tool::{AudioTool, AudioToolError, PlayMethod};
