//! Demo command handler

use anyhow::Result;

use uptane_banners::cli::DemoArgs;
use uptane_banners::script;
use uptane_banners::Config;

/// Run the full banner sequence.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &DemoArgs) -> Result<()> {
    let catalog = super::catalog(config);
    let mut presenter = super::presenter(config, args.mute, args.size.source());
    let scenes = script::demo_scenes(config.sound.blocking);

    script::run(&mut presenter, &catalog, &scenes)?;
    Ok(())
}
