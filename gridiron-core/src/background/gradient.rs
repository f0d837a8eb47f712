use image::RgbImage;
use rayon::prelude::*;

use crate::{
    background::noise::value_noise,
    foundation::{
        core::{CanvasSize, Rgb8},
        error::WallpaperResult,
        math::{Fnv1a64, lerp_channel},
    },
};

/// Amount `fade` darkens `color1` by to get its end color.
pub const FADE_DARKEN: u8 = 40;

/// Background gradient family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientStyle {
    /// `color1 → color2` along a line at `angle`.
    #[default]
    Linear,
    /// By distance from the center, normalized to the corner distance.
    Radial,
    /// By Manhattan distance from the center.
    Diamond,
    /// Vertical `color1 → color1` darkened; `color2` is ignored.
    Fade,
    /// Hard two-color split along the rotated axis.
    Split,
    /// `color1 → color2 → color1` along the rotated axis.
    Mirror,
    /// Smooth value noise drives the blend.
    Noise,
}

impl GradientStyle {
    /// Parse a style name; unknown names fall back to [`GradientStyle::Linear`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "radial" => Self::Radial,
            "diamond" => Self::Diamond,
            "fade" => Self::Fade,
            "split" => Self::Split,
            "mirror" => Self::Mirror,
            "noise" => Self::Noise,
            _ => Self::Linear,
        }
    }

    /// Every style.
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Radial,
        Self::Diamond,
        Self::Fade,
        Self::Split,
        Self::Mirror,
        Self::Noise,
    ];

    fn tag(self) -> u8 {
        self as u8
    }
}

/// Lattice density for the noise style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NoiseDetail {
    /// 32px cells: large soft blobs.
    Low,
    /// 16px cells.
    #[default]
    Medium,
    /// 8px cells: fine grain.
    High,
}

impl NoiseDetail {
    /// Numeric level as sent by the web form: 1 = low, 3 = high, anything else = medium.
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Self::Low,
            3 => Self::High,
            _ => Self::Medium,
        }
    }

    /// Lattice cell size in pixels.
    pub fn cell_size(self) -> u32 {
        match self {
            Self::Low => 32,
            Self::Medium => 16,
            Self::High => 8,
        }
    }
}

/// Everything that determines a generated background besides the canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    /// Gradient family.
    pub style: GradientStyle,
    /// Start color.
    pub color1: Rgb8,
    /// End color.
    pub color2: Rgb8,
    /// Axis rotation in degrees, counter-clockwise (linear, split, mirror).
    pub angle: f64,
    /// Noise lattice density (noise only).
    pub detail: NoiseDetail,
}

impl GradientSpec {
    /// Spec with default angle (0) and detail (medium).
    pub fn new(style: GradientStyle, color1: Rgb8, color2: Rgb8) -> Self {
        Self {
            style,
            color1,
            color2,
            angle: 0.0,
            detail: NoiseDetail::default(),
        }
    }

    fn noise_seed(&self, size: CanvasSize) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u8(self.style.tag());
        h.write_u32(size.width);
        h.write_u32(size.height);
        h.write_bytes(&self.color1.to_array());
        h.write_bytes(&self.color2.to_array());
        h.write_f64(self.angle);
        h.write_u32(self.detail.cell_size());
        h.finish()
    }
}

/// Uniform fill.
pub fn solid_background(width: u32, height: u32, color: Rgb8) -> RgbImage {
    RgbImage::from_pixel(width, height, color.to_pixel())
}

/// Render `spec` onto a fresh `width`×`height` canvas.
///
/// Deterministic: identical arguments always give identical pixels.
#[tracing::instrument(skip(spec), fields(style = ?spec.style))]
pub fn gradient(width: u32, height: u32, spec: &GradientSpec) -> WallpaperResult<RgbImage> {
    let size = CanvasSize::new(width, height)?;
    let (c1, c2) = (spec.color1, spec.color2);

    let img = match spec.style {
        GradientStyle::Linear => {
            let axis = RotatedAxis::new(size, spec.angle);
            fill(size, c1, c2, |x, y| axis.row_fraction(x, y))
        }
        GradientStyle::Split => {
            let axis = RotatedAxis::new(size, spec.angle);
            let mid = axis.diag / 2;
            fill(size, c1, c2, |x, y| {
                if axis.row(x, y) < mid { 0.0 } else { 1.0 }
            })
        }
        GradientStyle::Mirror => {
            let axis = RotatedAxis::new(size, spec.angle);
            let mid = (axis.diag / 2).max(1) as f64;
            fill(size, c1, c2, |x, y| {
                let row = axis.row(x, y) as f64;
                if row <= mid { row / mid } else { (axis.diag as f64 - row) / mid }
            })
        }
        GradientStyle::Radial => {
            let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
            let reach = (cx * cx + cy * cy).sqrt();
            fill(size, c1, c2, |x, y| {
                let (dx, dy) = (x as f64 - cx, y as f64 - cy);
                (dx * dx + dy * dy).sqrt() / reach
            })
        }
        GradientStyle::Diamond => {
            let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
            let reach = cx + cy;
            fill(size, c1, c2, |x, y| {
                ((x as f64 - cx).abs() + (y as f64 - cy).abs()) / reach
            })
        }
        GradientStyle::Fade => {
            let end = c1.darken(FADE_DARKEN);
            let span = f64::from(height.saturating_sub(1).max(1));
            fill(size, c1, end, |_, y| y as f64 / span)
        }
        GradientStyle::Noise => {
            let field = value_noise(width, height, spec.detail.cell_size(), spec.noise_seed(size));
            let w = width as usize;
            fill(size, c1, c2, |x, y| field[y * w + x])
        }
    };
    Ok(img)
}

/// Fill every pixel with `lerp(c1, c2, t(x, y))`, rows in parallel.
fn fill<F>(size: CanvasSize, c1: Rgb8, c2: Rgb8, t: F) -> RgbImage
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    let w = size.width as usize;
    let mut buf = vec![0u8; w * size.height as usize * 3];
    buf.par_chunks_mut(w * 3).enumerate().for_each(|(y, row)| {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            let t = t(x, y);
            px[0] = lerp_channel(c1.r, c2.r, t);
            px[1] = lerp_channel(c1.g, c2.g, t);
            px[2] = lerp_channel(c1.b, c2.b, t);
        }
    });
    RgbImage::from_raw(size.width, size.height, buf)
        .unwrap_or_else(|| RgbImage::new(size.width, size.height))
}

/// A square of side `diag` (the canvas diagonal) painted in horizontal rows, rotated by
/// `angle` about its center and cropped to the canvas. Sampled analytically, so the
/// rotated square never leaves unfilled corners inside the crop.
struct RotatedAxis {
    diag: i64,
    sin: f64,
    cos: f64,
    cx: f64,
    cy: f64,
}

impl RotatedAxis {
    fn new(size: CanvasSize, angle: f64) -> Self {
        let (w, h) = (f64::from(size.width), f64::from(size.height));
        let diag = ((w * w + h * h).sqrt() as i64).max(2);
        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            diag,
            sin,
            cos,
            cx: w / 2.0,
            cy: h / 2.0,
        }
    }

    /// Row of the unrotated square that lands on canvas pixel `(x, y)`.
    fn row(&self, x: usize, y: usize) -> i64 {
        let ox = x as f64 + 0.5 - self.cx;
        let oy = y as f64 + 0.5 - self.cy;
        let by = self.sin * ox + self.cos * oy;
        ((by + self.diag as f64 / 2.0).floor() as i64).clamp(0, self.diag - 1)
    }

    fn row_fraction(&self, x: usize, y: usize) -> f64 {
        self.row(x, y) as f64 / (self.diag - 1) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/gradient.rs"]
mod tests;
