use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::WallpaperResult;

/// Filesystem layout of the read-only asset tree, relative to an asset root.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root every relative path is resolved against.
    #[serde(skip)]
    pub root: PathBuf,
    /// Directory holding `<Team_Name>.png` logos.
    pub logos_dir: PathBuf,
    /// Logo substituted for missing thumbnails.
    pub fallback_logo: PathBuf,
    /// Directory holding `<Team_Name>.json` schedules.
    pub schedules_dir: PathBuf,
    /// Directory holding pre-rendered `pc.png` / `mobile.png` collages.
    pub collage_dir: PathBuf,
    /// TrueType font used for date labels.
    pub font: PathBuf,
    /// Output directory for dropdown icons.
    pub dropdown_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            logos_dir: PathBuf::from("data/logos"),
            fallback_logo: PathBuf::from("data/logos/fallback.png"),
            schedules_dir: PathBuf::from("data/schedules"),
            collage_dir: PathBuf::from("data/stickerbomb"),
            font: PathBuf::from("data/fonts/Montserrat-Bold.ttf"),
            dropdown_dir: PathBuf::from("data/logos_dropdown"),
        }
    }
}

impl AssetConfig {
    /// Default layout under `root`, made absolute against the working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: absolute_root(root.into()),
            ..Self::default()
        }
    }

    /// Load layout overrides from a JSON file; `root` is not part of the file.
    pub fn from_path(path: &Path, root: impl Into<PathBuf>) -> WallpaperResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read asset config '{}'", path.display()))?;
        let mut cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse asset config '{}'", path.display()))?;
        cfg.root = absolute_root(root.into());
        Ok(cfg)
    }

    /// Join `rel` to the root; absolute paths pass through unchanged.
    pub fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        let rel = rel.as_ref();
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }

    /// Absolute logos directory.
    pub fn logos_dir(&self) -> PathBuf {
        self.resolve(&self.logos_dir)
    }

    /// Absolute fallback logo path.
    pub fn fallback_logo(&self) -> PathBuf {
        self.resolve(&self.fallback_logo)
    }

    /// Absolute schedules directory.
    pub fn schedules_dir(&self) -> PathBuf {
        self.resolve(&self.schedules_dir)
    }

    /// Absolute collage directory.
    pub fn collage_dir(&self) -> PathBuf {
        self.resolve(&self.collage_dir)
    }

    /// Absolute font path.
    pub fn font(&self) -> PathBuf {
        self.resolve(&self.font)
    }

    /// Absolute dropdown icon directory.
    pub fn dropdown_dir(&self) -> PathBuf {
        self.resolve(&self.dropdown_dir)
    }
}

/// Resolved paths are passed back into [`AssetConfig::resolve`], so a relative root would
/// be joined twice.
fn absolute_root(root: PathBuf) -> PathBuf {
    std::path::absolute(&root).unwrap_or(root)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
