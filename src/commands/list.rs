//! List command handler

use anyhow::Result;

use uptane_banners::render::style::paint;
use uptane_banners::render::{Background, Foreground};
use uptane_banners::sound::SoundName;
use uptane_banners::BannerName;

/// Print the names accepted by `show`.
pub fn handle() -> Result<()> {
    let plain = super::no_color();

    println!("Banners:");
    for name in BannerName::ALL {
        println!("  {}", name);
    }

    println!("\nColors:");
    for fg in Foreground::ALL {
        let label = if plain {
            fg.name().to_string()
        } else {
            paint(fg.name(), Some(fg), None)
        };
        println!("  {}", label);
    }

    println!("\nBackgrounds:");
    for bg in Background::ALL {
        let label = if plain {
            bg.name().to_string()
        } else {
            paint(&format!(" {} ", bg.name()), None, Some(bg))
        };
        println!("  {}", label);
    }

    println!("\nSounds:");
    for sound in SoundName::ALL {
        println!("  {}", sound);
    }

    Ok(())
}
