//! The demo sequence: every status screen of an Uptane update, in order.

use std::time::Duration;

use crate::banner::{BannerCatalog, BannerName};
use crate::error::ShowError;
use crate::render::{Background, Foreground, RenderOptions};
use crate::show::Presenter;
use crate::sound::{SoundCue, SoundName};
use crate::terminal::Screen;

/// Body text shown under the banners that carry an explanation.
pub const DEMO_TEXT: &str = "\
Lorem ipsum dolor sit amet, consectetur adipisicing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua.
Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore \
eu fugiat nulla pariatur.
Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia \
deserunt mollit anim id est laborum.";

/// How long the closing banner stays up.
pub const FINAL_HOLD: Duration = Duration::from_secs(3);

/// One banner with its dressing.
#[derive(Debug, Clone)]
pub struct Scene {
    pub banner: BannerName,
    pub options: RenderOptions,
}

impl Scene {
    fn new(banner: BannerName, options: RenderOptions) -> Self {
        Self { banner, options }
    }
}

/// The demo scenes in the order they are shown.
///
/// `blocking` decides whether each sound finishes before the next banner.
pub fn demo_scenes(blocking: bool) -> Vec<Scene> {
    let cue = |name| {
        let cue = SoundCue::named(name);
        if blocking {
            cue
        } else {
            cue.non_blocking()
        }
    };
    let base = RenderOptions::default;

    vec![
        Scene::new(
            BannerName::Updated,
            base()
                .foreground(Foreground::Green)
                .text(DEMO_TEXT)
                .sound(cue(SoundName::Won)),
        ),
        Scene::new(
            BannerName::Defended,
            base()
                .foreground(Foreground::Blue)
                .background(Background::Yellow)
                .text(DEMO_TEXT)
                .sound(cue(SoundName::Tada)),
        ),
        Scene::new(
            BannerName::Frozen,
            base()
                .foreground(Foreground::Cyan)
                .background(Background::Gray)
                .sound(cue(SoundName::Ice)),
        ),
        Scene::new(
            BannerName::Compromised,
            base()
                .foreground(Foreground::Red)
                .background(Background::Black)
                .sound(cue(SoundName::Satan)),
        ),
        Scene::new(
            BannerName::Hacked,
            base()
                .foreground(Foreground::Red)
                .background(Background::Black)
                .text(DEMO_TEXT)
                .sound(cue(SoundName::Doomed)),
        ),
        Scene::new(
            BannerName::Replay,
            base()
                .foreground(Foreground::Red)
                .background(Background::Black)
                .sound(cue(SoundName::Witch)),
        ),
        Scene::new(
            BannerName::NoUpdateNeeded,
            base()
                .foreground(Foreground::Red)
                .background(Background::Black)
                .hold_for(FINAL_HOLD),
        ),
    ]
}

/// Show `scenes` one after another. The first failure stops the run.
pub fn run<S: Screen>(
    presenter: &mut Presenter<S>,
    catalog: &BannerCatalog,
    scenes: &[Scene],
) -> Result<(), ShowError> {
    for scene in scenes {
        tracing::info!(banner = %scene.banner, "showing banner");
        let banner = catalog.get(scene.banner)?;
        presenter.show(&banner, &scene.options)?;
    }
    Ok(())
}
