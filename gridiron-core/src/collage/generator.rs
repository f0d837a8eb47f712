use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use image::{RgbImage, RgbaImage};
use rand::{Rng, seq::SliceRandom as _};

use crate::{
    assets::loader::LogoLoader,
    effects::{
        composite::paste,
        outline::{OutlineQuality, add_outline},
        transform::{rotate_expand, thumbnail},
    },
    foundation::{
        core::{CanvasSize, DeviceProfile, Rgb8},
        error::{WallpaperError, WallpaperResult},
    },
};

/// Logo file stems drawn on top of everything else by default.
pub const DEFAULT_PRIORITY: [&str; 16] = [
    "Alabama",
    "Auburn",
    "Arkansas",
    "Florida",
    "Georgia",
    "Kentucky",
    "LSU",
    "Mississippi_State",
    "Missouri",
    "Ole_Miss",
    "Oklahoma",
    "South_Carolina",
    "Tennessee",
    "Texas",
    "Texas_A&M",
    "Vanderbilt",
];

/// Near-black backdrop behind the stickers.
pub const COLLAGE_BACKGROUND: Rgb8 = Rgb8::new(17, 17, 17);

/// Knobs for [`plan_collage`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollageOptions {
    /// Working canvas size relative to the target; the result is center-cropped back.
    pub scale: f64,
    /// Copies pasted per logo.
    pub copies: RangeInclusive<u32>,
    /// Thumbnail bound in pixels, per copy.
    pub size: RangeInclusive<u32>,
    /// Rotation is uniform in `[-max_rotation, max_rotation]` degrees.
    pub max_rotation: f64,
    /// Die-cut border thickness; `None` pastes logos bare.
    pub border: Option<u32>,
    /// Border color.
    pub border_color: Rgb8,
    /// Canvas fill.
    pub background: Rgb8,
}

impl Default for CollageOptions {
    fn default() -> Self {
        Self {
            scale: 1.35,
            copies: 5..=8,
            size: 70..=180,
            max_rotation: 25.0,
            border: None,
            border_color: Rgb8::WHITE,
            background: COLLAGE_BACKGROUND,
        }
    }
}

/// One pasted copy of a logo.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Source logo.
    pub logo: PathBuf,
    /// Whether the logo belongs to the priority group.
    pub priority: bool,
    /// Thumbnail bound in pixels.
    pub size: u32,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
    /// Horizontal position in `[0, 1]` of the free space left of the rotated sprite.
    pub fx: f64,
    /// Vertical position in `[0, 1]` of the free space above the rotated sprite.
    pub fy: f64,
}

/// Every random decision of a collage, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct CollagePlan {
    /// Final output size.
    pub target: CanvasSize,
    /// Oversized canvas the placements are painted onto.
    pub working: CanvasSize,
    /// Canvas fill.
    pub background: Rgb8,
    /// Die-cut border thickness, if any.
    pub border: Option<u32>,
    /// Border color.
    pub border_color: Rgb8,
    /// Placements, bottom layer first.
    pub placements: Vec<Placement>,
}

/// Outcome counters of [`paint_collage`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollageReport {
    /// Placements painted.
    pub placed: usize,
    /// Placements skipped after a load or paste failure.
    pub skipped: usize,
    /// Logos that failed, each listed once.
    pub failed_logos: Vec<PathBuf>,
}

/// A finished collage.
#[derive(Debug)]
pub struct Collage {
    /// Pixels at the target size.
    pub image: RgbImage,
    /// What was painted and what was skipped.
    pub report: CollageReport,
}

/// Draw all random decisions for a collage of `logos` on `profile`.
///
/// Logos whose file stem is in `priority` are placed after (on top of) the rest; order
/// inside each group is shuffled.
pub fn plan_collage<P, R>(
    logos: &[PathBuf],
    priority: &[P],
    profile: DeviceProfile,
    options: &CollageOptions,
    rng: &mut R,
) -> WallpaperResult<CollagePlan>
where
    P: AsRef<str>,
    R: Rng + ?Sized,
{
    if logos.is_empty() {
        return Err(WallpaperError::validation("collage needs at least one logo"));
    }
    if options.copies.is_empty() || options.size.is_empty() || *options.size.start() == 0 {
        return Err(WallpaperError::validation(
            "collage copy and size ranges must be non-empty and positive",
        ));
    }
    if options.scale.is_nan() || options.scale < 1.0 {
        return Err(WallpaperError::validation(format!(
            "collage scale must be >= 1, got {}",
            options.scale
        )));
    }

    let is_priority = |logo: &Path| {
        logo.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| priority.iter().any(|p| p.as_ref() == stem))
    };
    let (mut top, mut rest): (Vec<&PathBuf>, Vec<&PathBuf>) =
        logos.iter().partition(|p| is_priority(p));
    rest.shuffle(rng);
    top.shuffle(rng);

    let max_rotation = options.max_rotation.abs();
    let mut placements = Vec::new();
    for (group, flag) in [(rest, false), (top, true)] {
        for logo in group {
            let copies = rng.gen_range(options.copies.clone());
            for _ in 0..copies {
                placements.push(Placement {
                    logo: logo.clone(),
                    priority: flag,
                    size: rng.gen_range(options.size.clone()),
                    rotation: if max_rotation > 0.0 {
                        rng.gen_range(-max_rotation..=max_rotation)
                    } else {
                        0.0
                    },
                    fx: rng.r#gen::<f64>(),
                    fy: rng.r#gen::<f64>(),
                });
            }
        }
    }

    let target = profile.size();
    tracing::debug!(
        profile = %profile,
        logos = logos.len(),
        placements = placements.len(),
        "planned collage"
    );
    Ok(CollagePlan {
        target,
        working: target.scaled(options.scale),
        background: options.background,
        border: options.border,
        border_color: options.border_color,
        placements,
    })
}

/// Paint `plan` and crop it to its target size.
///
/// A logo that fails to load or paste is logged and its placements are skipped.
pub fn paint_collage(plan: &CollagePlan, loader: &LogoLoader) -> WallpaperResult<Collage> {
    let mut canvas = RgbImage::from_pixel(
        plan.working.width,
        plan.working.height,
        plan.background.to_pixel(),
    );
    let mut report = CollageReport::default();
    let mut source: Option<(&Path, Option<RgbaImage>)> = None;

    for placement in &plan.placements {
        let cached = matches!(&source, Some((path, _)) if *path == placement.logo.as_path());
        if !cached {
            let decoded = match loader.decode(&placement.logo) {
                Ok(img) => Some(img),
                Err(err) => {
                    skip_logo(&mut report, &placement.logo, &err);
                    None
                }
            };
            source = Some((placement.logo.as_path(), decoded));
        }

        let Some((_, Some(img))) = &source else {
            report.skipped += 1;
            continue;
        };
        match render_sticker(img, placement, plan) {
            Ok(sticker) => {
                let (x, y) = position(plan.working, &sticker, placement);
                paste(&mut canvas, &sticker, x, y);
                report.placed += 1;
            }
            Err(err) => {
                skip_logo(&mut report, &placement.logo, &err);
                report.skipped += 1;
            }
        }
    }

    let image = image::imageops::crop_imm(
        &canvas,
        (plan.working.width - plan.target.width.min(plan.working.width)) / 2,
        (plan.working.height - plan.target.height.min(plan.working.height)) / 2,
        plan.target.width,
        plan.target.height,
    )
    .to_image();
    Ok(Collage { image, report })
}

/// Plan and paint a collage of `logos` for `profile`.
#[tracing::instrument(skip_all, fields(profile = %profile, logos = logos.len()))]
pub fn generate_collage<P, R>(
    logos: &[PathBuf],
    priority: &[P],
    profile: DeviceProfile,
    options: &CollageOptions,
    loader: &LogoLoader,
    rng: &mut R,
) -> WallpaperResult<Collage>
where
    P: AsRef<str>,
    R: Rng + ?Sized,
{
    let plan = plan_collage(logos, priority, profile, options, rng)?;
    let collage = paint_collage(&plan, loader)?;
    tracing::info!(
        placed = collage.report.placed,
        skipped = collage.report.skipped,
        "collage painted"
    );
    Ok(collage)
}

fn render_sticker(
    img: &RgbaImage,
    placement: &Placement,
    plan: &CollagePlan,
) -> WallpaperResult<RgbaImage> {
    let mut sticker = thumbnail(img.clone(), placement.size);
    if let Some(thickness) = plan.border {
        sticker = add_outline(
            &pad(&sticker, thickness),
            thickness,
            plan.border_color,
            OutlineQuality::DieCut,
        )?;
    }
    Ok(rotate_expand(&sticker, placement.rotation))
}

/// Transparent margin so the outline has room to grow.
fn pad(img: &RgbaImage, margin: u32) -> RgbaImage {
    let mut out = RgbaImage::new(img.width() + 2 * margin, img.height() + 2 * margin);
    image::imageops::replace(&mut out, img, i64::from(margin), i64::from(margin));
    out
}

fn position(canvas: CanvasSize, sticker: &RgbaImage, placement: &Placement) -> (i64, i64) {
    let free_x = canvas.width.saturating_sub(sticker.width());
    let free_y = canvas.height.saturating_sub(sticker.height());
    let x = (placement.fx.clamp(0.0, 1.0) * f64::from(free_x)) as i64;
    let y = (placement.fy.clamp(0.0, 1.0) * f64::from(free_y)) as i64;
    (x, y)
}

fn skip_logo(report: &mut CollageReport, logo: &Path, err: &WallpaperError) {
    let err = WallpaperError::collage_placement(logo, err);
    tracing::warn!(error = %err, "skipping collage logo");
    if !report.failed_logos.iter().any(|p| p == logo) {
        report.failed_logos.push(logo.to_path_buf());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collage/generator.rs"]
mod tests;
