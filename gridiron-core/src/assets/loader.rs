use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    config::AssetConfig,
    effects::transform::{fit_width, thumbnail},
    foundation::error::{WallpaperError, WallpaperResult},
};

/// A thumbnail plus whether the fallback logo had to stand in for it.
#[derive(Debug)]
pub struct SmallLogo {
    /// Decoded, bounded thumbnail.
    pub image: RgbaImage,
    /// `Some(DegradedAsset)` when the requested file was absent.
    pub degraded: Option<WallpaperError>,
}

/// Loads logo rasters from the asset tree.
///
/// Relative paths resolve against the configured asset root; absolute paths are used as-is.
/// Loaded assets are never written back.
#[derive(Clone, Debug)]
pub struct LogoLoader {
    config: AssetConfig,
}

impl LogoLoader {
    /// Loader over the layout described by `config`.
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    /// The layout this loader resolves against.
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Absolute path for `path`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.config.resolve(path)
    }

    /// Absolute path of the fallback logo.
    pub fn fallback_path(&self) -> PathBuf {
        self.config.fallback_logo()
    }

    /// Decode any image file to straight-alpha RGBA8.
    pub fn decode(&self, path: impl AsRef<Path>) -> WallpaperResult<RgbaImage> {
        let path = self.resolve(path);
        let img = image::open(&path)
            .with_context(|| format!("decode image '{}'", path.display()))
            .map_err(|e| WallpaperError::missing_asset(&path, format!("{e:#}")))?;
        Ok(img.to_rgba8())
    }

    /// Large logo, downscaled so its width does not exceed `max_width`.
    ///
    /// A missing or unreadable file is fatal: there is no fallback for the hero logo.
    #[tracing::instrument(skip(self, path), fields(logo = %path.as_ref().display()))]
    pub fn load_hero_logo(
        &self,
        path: impl AsRef<Path>,
        max_width: u32,
    ) -> WallpaperResult<RgbaImage> {
        let img = self.decode(path)?;
        Ok(fit_width(img, max_width))
    }

    /// Thumbnail bounded to `max_size` on both sides, never upscaled.
    ///
    /// A missing file is replaced by the fallback logo and logged.
    pub fn load_small_logo(
        &self,
        path: impl AsRef<Path>,
        max_size: u32,
    ) -> WallpaperResult<RgbaImage> {
        Ok(self.load_small_logo_with_status(path, max_size)?.image)
    }

    /// Like [`Self::load_small_logo`], also reporting whether the fallback was used.
    pub fn load_small_logo_with_status(
        &self,
        path: impl AsRef<Path>,
        max_size: u32,
    ) -> WallpaperResult<SmallLogo> {
        let (source, degraded) = self.resolve_small(path);
        let img = self.decode(&source)?;
        Ok(SmallLogo {
            image: thumbnail(img, max_size),
            degraded,
        })
    }

    /// Pick the file a thumbnail should be read from.
    pub fn resolve_small(&self, path: impl AsRef<Path>) -> (PathBuf, Option<WallpaperError>) {
        let requested = self.resolve(path);
        if requested.exists() {
            return (requested, None);
        }

        let fallback = self.fallback_path();
        let degraded = WallpaperError::DegradedAsset {
            requested,
            fallback: fallback.clone(),
        };
        tracing::warn!(error = %degraded, "thumbnail logo missing; using fallback");
        (fallback, Some(degraded))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
