use std::{fmt, str::FromStr};

use crate::foundation::error::{WallpaperError, WallpaperResult};

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `delta` to every channel, clamping to `0..=255`.
    pub fn offset(self, delta: i16) -> Self {
        fn ch(c: u8, delta: i16) -> u8 {
            (i16::from(c) + delta).clamp(0, 255) as u8
        }
        Self::new(ch(self.r, delta), ch(self.g, delta), ch(self.b, delta))
    }

    /// Subtract `amount` from every channel, clamped at 0.
    pub fn darken(self, amount: u8) -> Self {
        self.offset(-i16::from(amount))
    }

    /// Add `amount` to every channel, clamped at 255.
    pub fn lighten(self, amount: u8) -> Self {
        self.offset(i16::from(amount))
    }

    /// `#RRGGBB` (uppercase hex).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same color as an [`image::Rgb`] pixel.
    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb(self.to_array())
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Pixel dimensions of an output canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Construct a size, rejecting empty canvases.
    pub fn new(width: u32, height: u32) -> WallpaperResult<Self> {
        if width == 0 || height == 0 {
            return Err(WallpaperError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Scale both sides by `factor`, truncating.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: ((f64::from(self.width) * factor) as u32).max(1),
            height: ((f64::from(self.height) * factor) as u32).max(1),
        }
    }
}

/// One of the two fixed output targets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    /// Desktop, 2560×1440.
    Pc,
    /// Phone, 1284×2778.
    Mobile,
}

impl DeviceProfile {
    /// Both presets.
    pub const ALL: [Self; 2] = [Self::Pc, Self::Mobile];

    /// Target resolution.
    pub fn size(self) -> CanvasSize {
        match self {
            Self::Pc => CanvasSize {
                width: 2560,
                height: 1440,
            },
            Self::Mobile => CanvasSize {
                width: 1284,
                height: 2778,
            },
        }
    }

    /// Wire name (`pc` / `mobile`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Mobile => "mobile",
        }
    }
}

impl FromStr for DeviceProfile {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Ok(Self::Pc),
            "mobile" => Ok(Self::Mobile),
            _ => Err(WallpaperError::invalid_profile(s)),
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
