//! Uptane status banners.
//!
//! Full-screen, centered ASCII-art banners for update demos: "updated",
//! "defended", "compromised" and friends, optionally colored, captioned,
//! accompanied by a sound and held for a few seconds.
//!
//! - [`render`]: pure layout of a banner for a given terminal size
//! - [`show`]: the clear / print / sound / hold sequence around it
//! - [`terminal`] and [`sound`]: the side-effecting ports

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod script;
pub mod show;
pub mod sound;
pub mod terminal;

pub use banner::{Banner, BannerCatalog, BannerName};
pub use config::Config;
pub use error::{BannerError, LayoutError, ShowError};
pub use render::{render, BodyText, Dimensions, RenderOptions};
pub use show::{Presenter, SizeSource};
pub use terminal::{Screen, TerminalScreen};
