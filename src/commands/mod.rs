//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod demo;
pub mod list;
pub mod show;

use std::io;

use uptane_banners::sound::Sound;
use uptane_banners::{BannerCatalog, Config, Presenter, SizeSource, TerminalScreen};

/// Banner catalog described by the config.
pub fn catalog(config: &Config) -> BannerCatalog {
    match &config.assets.banner_dir {
        Some(dir) => BannerCatalog::from_dir(dir),
        None => BannerCatalog::builtin(),
    }
}

/// Presenter on stdout with sound set up from the config.
pub fn presenter(
    config: &Config,
    mute: bool,
    size: SizeSource,
) -> Presenter<TerminalScreen<io::Stdout>> {
    let mut sound = Sound::new(&config.assets.sound_dir);
    sound.set_enabled(config.sound.enabled && !mute);
    Presenter::new(TerminalScreen::stdout(), sound).with_size(size)
}

/// Whether colored output was switched off via `NO_COLOR`.
pub fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
