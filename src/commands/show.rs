//! Show command handler

use std::fs;

use anyhow::{Context, Result};

use uptane_banners::cli::ShowArgs;
use uptane_banners::sound::SoundCue;
use uptane_banners::{Banner, BodyText, Config, RenderOptions};

/// Show a single banner.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &ShowArgs) -> Result<()> {
    let banner = load_banner(config, args)?;
    let options = build_options(config, args)?;

    let mut presenter = super::presenter(config, args.mute, args.size.source());
    presenter.show(&banner, &options)?;
    Ok(())
}

fn load_banner(config: &Config, args: &ShowArgs) -> Result<Banner> {
    if let Some(path) = &args.file {
        return Ok(Banner::load(path)?);
    }
    let name = args
        .name
        .context("No banner given (pass a name or --file)")?;
    Ok(super::catalog(config).get(name)?)
}

/// Translate flags into render options.
fn build_options(config: &Config, args: &ShowArgs) -> Result<RenderOptions> {
    let body_text = match &args.text_file {
        Some(path) => Some(BodyText::Text(fs::read_to_string(path).with_context(|| {
            format!("Failed to read text file {}", path.display())
        })?)),
        None if args.text.is_empty() => None,
        None => Some(BodyText::Paragraphs(args.text.clone())),
    };

    let cue = match (&args.sound, &args.sound_file) {
        (Some(name), _) => Some(SoundCue::named(*name)),
        (None, Some(path)) => Some(SoundCue::file(path)),
        (None, None) => None,
    }
    .map(|cue| {
        if args.no_wait || !config.sound.blocking {
            cue.non_blocking()
        } else {
            cue
        }
    });

    Ok(RenderOptions {
        duration: args.show_for,
        foreground: args.color,
        background: args.background,
        body_text,
        sound: cue,
    })
}
