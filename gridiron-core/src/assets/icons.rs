use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    assets::loader::LogoLoader,
    effects::outline::{OutlineQuality, add_outline},
    foundation::{
        core::Rgb8,
        error::{WallpaperError, WallpaperResult},
    },
};

/// Edge length of the team-picker icons.
pub const DROPDOWN_ICON_SIZE: u32 = 32;

/// Outcome of a dropdown icon batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconReport {
    /// Icons written.
    pub written: usize,
    /// Files that failed and were skipped.
    pub failed: Vec<String>,
}

/// Write a small, 1px white-outlined copy of every `*.png` in `src_dir` into `dst_dir`.
///
/// Icons are padded by one pixel per side so the outline is never clipped.
///
/// A file that fails to decode or encode is logged and skipped.
pub fn generate_dropdown_icons(
    loader: &LogoLoader,
    src_dir: &Path,
    dst_dir: &Path,
    max_size: u32,
) -> WallpaperResult<IconReport> {
    if !src_dir.is_dir() {
        return Err(WallpaperError::missing_asset(
            src_dir,
            "logos directory not found",
        ));
    }
    std::fs::create_dir_all(dst_dir)
        .with_context(|| format!("create icon dir '{}'", dst_dir.display()))?;

    let mut entries = Vec::new();
    for entry in
        std::fs::read_dir(src_dir).with_context(|| format!("list '{}'", src_dir.display()))?
    {
        let path = entry
            .with_context(|| format!("list '{}'", src_dir.display()))?
            .path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            entries.push(path);
        }
    }
    entries.sort();

    let mut report = IconReport::default();
    for input in entries {
        let Some(name) = input.file_name() else {
            continue;
        };
        let output = dst_dir.join(name);
        match write_icon(loader, &input, &output, max_size) {
            Ok(()) => {
                tracing::debug!(icon = %output.display(), "wrote dropdown icon");
                report.written += 1;
            }
            Err(err) => {
                tracing::warn!(logo = %input.display(), error = %err, "skipping dropdown icon");
                report.failed.push(name.to_string_lossy().into_owned());
            }
        }
    }
    Ok(report)
}

fn write_icon(
    loader: &LogoLoader,
    input: &Path,
    output: &Path,
    max_size: u32,
) -> WallpaperResult<()> {
    let img = loader.load_small_logo(input, max_size)?;
    // One pixel of room so the stroke survives on edge-to-edge logos.
    let mut padded = RgbaImage::new(img.width() + 2, img.height() + 2);
    image::imageops::replace(&mut padded, &img, 1, 1);
    let img = add_outline(&padded, 1, Rgb8::WHITE, OutlineQuality::Sprite)?;
    img.save(output)
        .with_context(|| format!("write icon '{}'", output.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
