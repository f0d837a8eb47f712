use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb8,
    error::{WallpaperError, WallpaperResult},
};

/// Amount subtracted from the primary color to derive the secondary.
pub const SECONDARY_DARKEN: u8 = 40;

/// Two-color palette used when the caller supplies no explicit colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TeamPalette {
    /// Mean color of the logo.
    pub primary: Rgb8,
    /// Primary darkened by [`SECONDARY_DARKEN`].
    pub secondary: Rgb8,
}

/// Parse `#RRGGBB` (the `#` is optional). Blank input means "unset".
pub fn parse_hex(s: &str) -> WallpaperResult<Option<Rgb8>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(WallpaperError::validation(format!(
            "hex color must be #RRGGBB, got \"{s}\""
        )));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| WallpaperError::validation(format!("invalid hex color \"{s}\"")))
    };
    Ok(Some(Rgb8::new(byte(0)?, byte(2)?, byte(4)?)))
}

/// Parse an optional hex string, treating `None` and blank the same.
pub fn parse_optional_hex(s: Option<&str>) -> WallpaperResult<Option<Rgb8>> {
    match s {
        Some(s) => parse_hex(s),
        None => Ok(None),
    }
}

/// Mean RGB over every pixel (alpha ignored) plus a darkened secondary.
pub fn derive_palette(img: &image::RgbaImage) -> TeamPalette {
    let n = u64::from(img.width()) * u64::from(img.height());
    if n == 0 {
        return TeamPalette {
            primary: Rgb8::BLACK,
            secondary: Rgb8::BLACK,
        };
    }

    let mut sum = [0u64; 3];
    for px in img.pixels() {
        for (acc, &c) in sum.iter_mut().zip(&px.0[..3]) {
            *acc += u64::from(c);
        }
    }
    let primary = Rgb8::new((sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8);
    TeamPalette {
        primary,
        secondary: primary.darken(SECONDARY_DARKEN),
    }
}

/// Open a logo and derive its palette.
pub fn team_colors(logo_path: &Path) -> WallpaperResult<TeamPalette> {
    let img = image::open(logo_path)
        .with_context(|| format!("open logo '{}'", logo_path.display()))
        .map_err(|e| WallpaperError::missing_asset(logo_path, format!("{e:#}")))?;
    Ok(derive_palette(&img.to_rgba8()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/palette.rs"]
mod tests;
