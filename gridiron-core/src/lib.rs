//! Gridiron composes college-football wallpapers.
//!
//! A render takes a team, its season schedule and a handful of style options and produces
//! one raster at a fixed device resolution (`pc` 2560×1440, `mobile` 1284×2778).
//!
//! # Pipeline overview
//!
//! 1. **Background**: a solid fill, one of seven generated gradients, or a pre-rendered
//!    sticker-bomb collage.
//! 2. **Hero logo**: the team logo, bounded in width and outlined, at the top (or center).
//! 3. **Schedule grid**: up to twelve opponent thumbnails with stroked `MM-DD` date labels.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic backgrounds**: identical gradient inputs give identical pixels. Only
//!   collage generation is random, and its random source is injected.
//! - **Read-only assets**: logos, schedules and fonts are never written back; every render
//!   owns its canvas.
//! - **All-or-nothing**: fatal errors return no image; missing thumbnails and broken collage
//!   logos are recovered and reported.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod background;
mod collage;
mod compose;
mod config;
mod effects;
mod foundation;
mod schedule;
mod service;

pub use assets::catalog::{FsCatalog, LogoResolver, ScheduleProvider, TeamListing};
pub use assets::icons::{DROPDOWN_ICON_SIZE, IconReport, generate_dropdown_icons};
pub use assets::loader::{LogoLoader, SmallLogo};
pub use assets::palette::{
    SECONDARY_DARKEN, TeamPalette, derive_palette, parse_hex, parse_optional_hex, team_colors,
};
pub use background::gradient::{
    FADE_DARKEN, GradientSpec, GradientStyle, NoiseDetail, gradient, solid_background,
};
pub use collage::generator::{
    COLLAGE_BACKGROUND, Collage, CollageOptions, CollagePlan, CollageReport, DEFAULT_PRIORITY,
    Placement, generate_collage, paint_collage, plan_collage,
};
pub use compose::label::{LabelFont, LabelStyle, date_colors, draw_stroked_label};
pub use compose::layout::ProfileLayout;
pub use compose::wallpaper::{
    BackgroundKind, ComposeOptions, Composer, LOGO_OUTLINE, RenderReport, Wallpaper,
};
pub use config::AssetConfig;
pub use effects::composite::{over_opaque, over_straight, paste, paste_centered};
pub use effects::outline::{DIE_CUT_THRESHOLD, OutlineQuality, add_outline};
pub use effects::transform::{center_crop, fit_width, rotate_expand, thumbnail};
pub use foundation::core::{CanvasSize, DeviceProfile, Rgb8};
pub use foundation::error::{WallpaperError, WallpaperResult};
pub use schedule::model::{
    BYE, MAX_GRID_GAMES, Schedule, ScheduleEntry, logo_filename_for_opponent,
    logo_filename_for_team,
};
pub use service::{WallpaperService, encode_png};
