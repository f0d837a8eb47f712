use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    config::AssetConfig,
    foundation::error::{WallpaperError, WallpaperResult},
    schedule::model::{Schedule, logo_filename_for_team},
};

/// Maps a team name to its logo file.
pub trait LogoResolver {
    /// Path of the team's logo, or `None` when the asset tree has none.
    fn logo_path_for(&self, team: &str) -> Option<PathBuf>;
}

/// Supplies a team's season schedule.
pub trait ScheduleProvider {
    /// The team's schedule, or [`WallpaperError::ScheduleNotFound`].
    fn schedule_for(&self, team: &str) -> WallpaperResult<Schedule>;
}

/// A selectable team: has both a logo and a schedule.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TeamListing {
    /// Display name (`_` replaced by spaces).
    pub name: String,
    /// Logo filename.
    pub logo: String,
}

/// Logo and schedule lookup over the on-disk asset tree.
#[derive(Clone, Debug)]
pub struct FsCatalog {
    config: AssetConfig,
}

impl FsCatalog {
    /// Catalog over the layout described by `config`.
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    /// Every `*.png` in the logos directory except the fallback, sorted by path.
    pub fn collage_logos(&self) -> WallpaperResult<Vec<PathBuf>> {
        let fallback_name = self.config.fallback_logo.file_name().map(|n| n.to_owned());
        let mut out: Vec<PathBuf> = self
            .png_files(&self.config.logos_dir())?
            .into_iter()
            .filter(|p| p.file_name().map(|n| n.to_owned()) != fallback_name)
            .collect();
        out.sort();
        Ok(out)
    }

    /// Teams that have both a logo and a schedule, sorted by display name.
    pub fn list_teams(&self) -> WallpaperResult<Vec<TeamListing>> {
        let schedules = self.config.schedules_dir();
        if !schedules.is_dir() {
            return Err(WallpaperError::missing_asset(
                &schedules,
                "schedules directory not found",
            ));
        }

        let mut teams = Vec::new();
        for logo in self.png_files(&self.config.logos_dir())? {
            let Some(stem) = logo.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !schedules.join(format!("{stem}.json")).is_file() {
                continue;
            }
            let Some(file) = logo.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            teams.push(TeamListing {
                name: stem.replace('_', " "),
                logo: file.to_owned(),
            });
        }
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    fn png_files(&self, dir: &std::path::Path) -> WallpaperResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(WallpaperError::missing_asset(dir, "logos directory not found"));
        }
        let mut out = Vec::new();
        for entry in
            std::fs::read_dir(dir).with_context(|| format!("list '{}'", dir.display()))?
        {
            let path = entry
                .with_context(|| format!("list '{}'", dir.display()))?
                .path();
            let is_png = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("png"));
            if is_png && path.is_file() {
                out.push(path);
            }
        }
        Ok(out)
    }
}

impl LogoResolver for FsCatalog {
    fn logo_path_for(&self, team: &str) -> Option<PathBuf> {
        let path = self
            .config
            .logos_dir()
            .join(logo_filename_for_team(team));
        path.is_file().then_some(path)
    }
}

impl ScheduleProvider for FsCatalog {
    fn schedule_for(&self, team: &str) -> WallpaperResult<Schedule> {
        let file = format!("{}.json", team.trim().replace(' ', "_"));
        let path = self.config.schedules_dir().join(file);
        if !path.is_file() {
            return Err(WallpaperError::ScheduleNotFound(team.to_owned()));
        }
        Schedule::from_path(&path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
