use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage, imageops::FilterType};

use crate::{
    assets::{
        loader::LogoLoader,
        palette::{TeamPalette, derive_palette},
    },
    background::gradient::{GradientSpec, GradientStyle, NoiseDetail, gradient, solid_background},
    compose::{
        label::{LabelFont, LabelStyle, date_colors, draw_stroked_label},
        layout::ProfileLayout,
    },
    effects::{
        composite::paste,
        outline::{OutlineQuality, add_outline},
    },
    foundation::{
        core::{CanvasSize, DeviceProfile, Rgb8},
        error::{WallpaperError, WallpaperResult},
    },
    schedule::model::Schedule,
};

/// Outline color for hero and opponent logos.
pub const LOGO_OUTLINE: Rgb8 = Rgb8::WHITE;

/// Per-request styling knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposeOptions {
    /// Solid fill; the logo's primary color when unset.
    pub user_color: Option<Rgb8>,
    /// Draw a generated gradient instead of a solid fill.
    pub gradient_enabled: bool,
    /// Gradient family.
    pub style: GradientStyle,
    /// Gradient start; the logo's primary color when unset.
    pub color1: Option<Rgb8>,
    /// Gradient end; the logo's secondary color when unset.
    pub color2: Option<Rgb8>,
    /// Gradient angle in degrees.
    pub angle: f64,
    /// Noise lattice density.
    pub noise_detail: NoiseDetail,
    /// Use the pre-rendered collage as background (no schedule).
    pub stickerbomb: bool,
    /// Draw the schedule grid.
    pub show_schedule: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            user_color: None,
            gradient_enabled: false,
            style: GradientStyle::Linear,
            color1: None,
            color2: None,
            angle: 0.0,
            noise_detail: NoiseDetail::Medium,
            stickerbomb: false,
            show_schedule: true,
        }
    }
}

/// Which background a render ended up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundKind {
    /// Pre-rendered collage.
    Collage,
    /// Generated gradient.
    Gradient(GradientStyle),
    /// Uniform fill.
    Solid,
}

/// What a single render did, including recovered failures.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    /// Profile rendered.
    pub profile: DeviceProfile,
    /// Background used.
    pub background: BackgroundKind,
    /// Schedule cells drawn.
    pub grid_cells: usize,
    /// Opponent logos that fell back to the placeholder.
    pub degraded_assets: Vec<PathBuf>,
    /// Date labels were skipped because no font was available.
    pub labels_skipped: bool,
}

/// A finished wallpaper.
#[derive(Debug)]
pub struct Wallpaper {
    /// Pixels at the profile's exact size.
    pub image: RgbImage,
    /// Render summary.
    pub report: RenderReport,
}

/// Lays a hero logo and schedule grid over a background.
#[derive(Debug)]
pub struct Composer {
    loader: LogoLoader,
    font: Option<LabelFont>,
}

impl Composer {
    /// Composer reading assets through `loader`; the label font is loaded from its config.
    ///
    /// A missing or invalid font is logged and date labels are then skipped.
    pub fn new(loader: LogoLoader) -> Self {
        let font_path = loader.config().font();
        let font = match LabelFont::from_path(&font_path) {
            Ok(font) => Some(font),
            Err(err) => {
                tracing::warn!(error = %err, "label font unavailable; dates will not be drawn");
                None
            }
        };
        Self { loader, font }
    }

    /// Replace the label font.
    pub fn with_font(mut self, font: Option<LabelFont>) -> Self {
        self.font = font;
        self
    }

    /// The loader this composer reads through.
    pub fn loader(&self) -> &LogoLoader {
        &self.loader
    }

    /// Render one wallpaper.
    ///
    /// Fatal failures (hero logo or collage asset missing, bad gradient input) abort and
    /// return no image. Missing opponent logos fall back to the placeholder.
    #[tracing::instrument(skip(self, schedule, logo_path, options, profile), fields(profile = %profile))]
    pub fn compose(
        &self,
        team: &str,
        schedule: &Schedule,
        logo_path: &Path,
        options: &ComposeOptions,
        profile: DeviceProfile,
    ) -> WallpaperResult<Wallpaper> {
        let size = profile.size();
        let layout = ProfileLayout::for_profile(profile);
        let mut report = RenderReport {
            profile,
            background: BackgroundKind::Solid,
            grid_cells: 0,
            degraded_assets: Vec::new(),
            labels_skipped: false,
        };

        let hero = self.hero(logo_path, &layout)?;

        if options.stickerbomb {
            let mut canvas = self.collage_background(profile, size)?;
            paste(
                &mut canvas,
                &hero,
                centered(size.width, hero.width()),
                centered(size.height, hero.height()),
            );
            report.background = BackgroundKind::Collage;
            return Ok(Wallpaper {
                image: canvas,
                report,
            });
        }

        let (mut canvas, background) = self.background(logo_path, options, size)?;
        report.background = background;

        if !options.show_schedule {
            paste(
                &mut canvas,
                &hero,
                centered(size.width, hero.width()),
                centered(size.height, hero.height()),
            );
            return Ok(Wallpaper {
                image: canvas,
                report,
            });
        }

        // The hero is padded by its outline; keep the logo body at the fixed top edge.
        let hero_y = i64::from(layout.hero_top) - i64::from(layout.hero_outline);
        paste(
            &mut canvas,
            &hero,
            centered(size.width, hero.width()),
            hero_y,
        );
        self.draw_grid(&mut canvas, schedule, &layout, &mut report)?;

        tracing::debug!(
            team,
            cells = report.grid_cells,
            degraded = report.degraded_assets.len(),
            "composed wallpaper"
        );
        Ok(Wallpaper {
            image: canvas,
            report,
        })
    }

    fn hero(&self, logo_path: &Path, layout: &ProfileLayout) -> WallpaperResult<RgbaImage> {
        let logo = self
            .loader
            .load_hero_logo(logo_path, layout.hero_max_width)?;
        outlined(&logo, layout.hero_outline)
    }

    fn collage_background(
        &self,
        profile: DeviceProfile,
        size: CanvasSize,
    ) -> WallpaperResult<RgbImage> {
        let path = self
            .loader
            .config()
            .collage_dir()
            .join(format!("{}.png", profile.as_str()));
        let collage = self.loader.decode(&path)?;
        let collage = if collage.dimensions() == (size.width, size.height) {
            collage
        } else {
            tracing::warn!(
                collage = %path.display(),
                width = collage.width(),
                height = collage.height(),
                "collage asset has the wrong size; resizing"
            );
            image::imageops::resize(&collage, size.width, size.height, FilterType::Lanczos3)
        };
        Ok(image::DynamicImage::ImageRgba8(collage).to_rgb8())
    }

    fn background(
        &self,
        logo_path: &Path,
        options: &ComposeOptions,
        size: CanvasSize,
    ) -> WallpaperResult<(RgbImage, BackgroundKind)> {
        let palette = || -> WallpaperResult<TeamPalette> {
            Ok(derive_palette(&self.loader.decode(logo_path)?))
        };

        if options.gradient_enabled {
            let (color1, color2) = match (options.color1, options.color2) {
                (Some(c1), Some(c2)) => (c1, c2),
                (c1, c2) => {
                    let p = palette()?;
                    (c1.unwrap_or(p.primary), c2.unwrap_or(p.secondary))
                }
            };
            let spec = GradientSpec {
                style: options.style,
                color1,
                color2,
                angle: options.angle,
                detail: options.noise_detail,
            };
            let img = gradient(size.width, size.height, &spec)?;
            return Ok((img, BackgroundKind::Gradient(options.style)));
        }

        let color = match options.user_color {
            Some(c) => c,
            None => palette()?.primary,
        };
        Ok((
            solid_background(size.width, size.height, color),
            BackgroundKind::Solid,
        ))
    }

    fn draw_grid(
        &self,
        canvas: &mut RgbImage,
        schedule: &Schedule,
        layout: &ProfileLayout,
        report: &mut RenderReport,
    ) -> WallpaperResult<()> {
        let logos_dir = self.loader.config().logos_dir();
        if self.font.is_none() {
            report.labels_skipped = true;
        }

        let entries = schedule.grid_entries();
        for (index, entry) in entries.iter().take(layout.capacity()).enumerate() {
            let Some((cx, top)) = layout.cell_origin(index, canvas.width()) else {
                break;
            };

            let small = self
                .loader
                .load_small_logo_with_status(logos_dir.join(&entry.opponent_logo), layout.thumb_size)?;
            if let Some(WallpaperError::DegradedAsset { requested, .. }) = small.degraded {
                report.degraded_assets.push(requested);
            }
            let thumb = outlined(&small.image, layout.thumb_outline)?;
            paste(
                canvas,
                &thumb,
                cx - i64::from(thumb.width() / 2),
                top - i64::from(layout.thumb_outline),
            );

            if let Some(font) = &self.font {
                let (fill, stroke) = date_colors(entry.home);
                let style = LabelStyle {
                    px: layout.date_font_px,
                    fill,
                    stroke,
                    stroke_width: layout.date_stroke,
                };
                let cy = top + i64::from(layout.thumb_size + layout.date_offset);
                draw_stroked_label(canvas, font, &entry.date, cx, cy, &style);
            }
            report.grid_cells += 1;
        }
        Ok(())
    }
}

/// Pad by `thickness` and draw the crisp white logo outline.
fn outlined(logo: &RgbaImage, thickness: u32) -> WallpaperResult<RgbaImage> {
    if thickness == 0 {
        return Ok(logo.clone());
    }
    let mut padded = RgbaImage::new(logo.width() + 2 * thickness, logo.height() + 2 * thickness);
    image::imageops::replace(&mut padded, logo, i64::from(thickness), i64::from(thickness));
    add_outline(&padded, thickness, LOGO_OUTLINE, OutlineQuality::Crisp)
}

/// Floor-divided, so an oversized sprite hangs off both edges evenly.
fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/wallpaper.rs"]
mod tests;
