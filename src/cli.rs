//! Command-line interface definition.
//!
//! Lives in the library so the xtask crate can render a man page from it.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::banner::BannerName;
use crate::render::{Background, Dimensions, Foreground};
use crate::show::SizeSource;
use crate::sound::SoundName;

#[derive(Parser, Debug)]
#[command(
    name = "uptane-banners",
    version,
    about = "Full-screen status banners for Uptane update demos",
    long_about = "Prints pre-drawn ASCII-art banners centered in the terminal, with optional \
                  colors, explanatory text, a sound effect and a timed hold.\n\n\
                  Without a subcommand the full demo sequence is shown."
)]
pub struct Cli {
    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every status banner in turn
    Demo(DemoArgs),

    /// Show a single banner
    Show(ShowArgs),

    /// List banners, colors and sounds
    List,

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Do not play sounds
    #[arg(long)]
    pub mute: bool,

    #[command(flatten)]
    pub size: SizeArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Built-in banner to show
    #[arg(value_enum, required_unless_present = "file", conflicts_with = "file")]
    pub name: Option<BannerName>,

    /// Show art from this file instead of a named banner
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Font color of the art
    #[arg(short, long, value_enum)]
    pub color: Option<Foreground>,

    /// Background color; also fills the rest of the screen
    #[arg(short, long, value_enum)]
    pub background: Option<Background>,

    /// Paragraph of text below the art (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text below the art from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    /// Sound effect to play after printing
    #[arg(short, long, value_enum, conflicts_with = "sound_file")]
    pub sound: Option<SoundName>,

    /// Sound file to play after printing
    #[arg(long, value_name = "PATH")]
    pub sound_file: Option<PathBuf>,

    /// Start the sound and return without waiting for it
    #[arg(long)]
    pub no_wait: bool,

    /// Keep the banner up this many seconds, then clear the screen
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub show_for: Option<Duration>,

    /// Do not play sounds
    #[arg(long)]
    pub mute: bool,

    #[command(flatten)]
    pub size: SizeArgs,
}

/// Explicit layout size, for when the terminal can't be asked.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct SizeArgs {
    /// Lay out for this many rows instead of querying the terminal
    #[arg(long, requires = "columns", value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Lay out for this many columns instead of querying the terminal
    #[arg(long, requires = "rows", value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: Option<u16>,
}

impl SizeArgs {
    pub fn source(&self) -> SizeSource {
        match (self.rows, self.columns) {
            (Some(rows), Some(columns)) => SizeSource::Fixed(Dimensions::new(rows, columns)),
            _ => SizeSource::Query,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse a positive number of seconds.
fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("'{}' must be a positive number of seconds", s));
    }
    Ok(Duration::from_secs_f64(secs))
}
