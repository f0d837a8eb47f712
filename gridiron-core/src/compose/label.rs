use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::Context as _;
use image::RgbImage;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::foundation::{
    core::Rgb8,
    error::{WallpaperError, WallpaperResult},
};

/// A TrueType font for schedule labels.
pub struct LabelFont {
    font: FontVec,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").finish_non_exhaustive()
    }
}

impl LabelFont {
    /// Parse font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> WallpaperResult<Self> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| WallpaperError::validation(format!("invalid font data: {e}")))?;
        Ok(Self { font })
    }

    /// Read and parse a font file.
    pub fn from_path(path: &Path) -> WallpaperResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font '{}'", path.display()))
            .map_err(|e| WallpaperError::missing_asset(path, format!("{e:#}")))?;
        Self::from_bytes(bytes)
    }
}

/// Look of a stroked label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub px: f32,
    /// Glyph color.
    pub fill: Rgb8,
    /// Stroke color.
    pub stroke: Rgb8,
    /// Stroke offset in pixels.
    pub stroke_width: u32,
}

/// Fill and stroke for a date label: white on black for away games, inverted for home.
pub fn date_colors(home: bool) -> (Rgb8, Rgb8) {
    if home {
        (Rgb8::BLACK, Rgb8::WHITE)
    } else {
        (Rgb8::WHITE, Rgb8::BLACK)
    }
}

/// Draw `text` centered on `(cx, cy)` with a stroke made of eight offset copies.
pub fn draw_stroked_label(
    canvas: &mut RgbImage,
    font: &LabelFont,
    text: &str,
    cx: i64,
    cy: i64,
    style: &LabelStyle,
) {
    if text.is_empty() {
        return;
    }
    let scale = PxScale::from(style.px);
    let (w, h) = text_size(scale, &font.font, text);
    let x = (cx - i64::from(w) / 2) as i32;
    let y = (cy - i64::from(h) / 2) as i32;

    let d = style.stroke_width as i32;
    for dx in [-d, 0, d] {
        for dy in [-d, 0, d] {
            if dx != 0 || dy != 0 {
                draw_text_mut(
                    canvas,
                    style.stroke.to_pixel(),
                    x + dx,
                    y + dy,
                    scale,
                    &font.font,
                    text,
                );
            }
        }
    }
    draw_text_mut(canvas, style.fill.to_pixel(), x, y, scale, &font.font, text);
}

#[cfg(test)]
#[path = "../../tests/unit/compose/label.rs"]
mod tests;
