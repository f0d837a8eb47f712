use std::io::Cursor;

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat};

use crate::{
    assets::{
        catalog::{FsCatalog, LogoResolver, ScheduleProvider, TeamListing},
        loader::LogoLoader,
        palette::{TeamPalette, team_colors},
    },
    compose::wallpaper::{ComposeOptions, Composer, Wallpaper},
    config::AssetConfig,
    foundation::{
        core::DeviceProfile,
        error::{WallpaperError, WallpaperResult},
    },
    schedule::model::{Schedule, logo_filename_for_team},
};

/// The boundary a web handler or CLI talks to: team name in, PNG bytes out.
///
/// Stateless across calls; every render allocates its own canvas.
#[derive(Debug)]
pub struct WallpaperService<C = FsCatalog> {
    composer: Composer,
    catalog: C,
}

impl WallpaperService<FsCatalog> {
    /// Service over the on-disk asset tree described by `config`.
    pub fn from_config(config: AssetConfig) -> Self {
        let composer = Composer::new(LogoLoader::new(config.clone()));
        Self::new(composer, FsCatalog::new(config))
    }

    /// Teams that have both a logo and a schedule.
    pub fn list_teams(&self) -> WallpaperResult<Vec<TeamListing>> {
        self.catalog.list_teams()
    }
}

impl<C> WallpaperService<C>
where
    C: LogoResolver + ScheduleProvider,
{
    /// Service over an injected logo and schedule lookup.
    pub fn new(composer: Composer, catalog: C) -> Self {
        Self { composer, catalog }
    }

    /// The composer used for every render.
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Render `team` for the named profile and encode it as PNG.
    ///
    /// `profile` must be `pc` or `mobile`. A schedule is only looked up when it will be
    /// drawn; a missing one is an error.
    pub fn render_wallpaper(
        &self,
        team: &str,
        profile: &str,
        options: &ComposeOptions,
    ) -> WallpaperResult<Vec<u8>> {
        let wallpaper = self.render_image(team, profile, options)?;
        encode_png(wallpaper.image)
    }

    /// Like [`Self::render_wallpaper`] but returns the raster and its report.
    #[tracing::instrument(skip(self, options))]
    pub fn render_image(
        &self,
        team: &str,
        profile: &str,
        options: &ComposeOptions,
    ) -> WallpaperResult<Wallpaper> {
        let profile: DeviceProfile = profile.parse()?;
        let team = team.trim();
        if team.is_empty() {
            return Err(WallpaperError::validation("team is required"));
        }

        let logo = self.logo_path(team)?;
        let schedule = if options.stickerbomb || !options.show_schedule {
            Schedule::default()
        } else {
            self.catalog.schedule_for(team)?
        };

        let wallpaper = self
            .composer
            .compose(team, &schedule, &logo, options, profile)?;
        tracing::info!(
            background = ?wallpaper.report.background,
            cells = wallpaper.report.grid_cells,
            degraded = wallpaper.report.degraded_assets.len(),
            "rendered wallpaper"
        );
        Ok(wallpaper)
    }

    /// Primary and secondary colors derived from the team's logo.
    pub fn team_colors(&self, team: &str) -> WallpaperResult<TeamPalette> {
        team_colors(&self.logo_path(team)?)
    }

    fn logo_path(&self, team: &str) -> WallpaperResult<std::path::PathBuf> {
        self.catalog.logo_path_for(team).ok_or_else(|| {
            WallpaperError::missing_asset(logo_filename_for_team(team), "team logo not found")
        })
    }
}

/// Encode an RGB raster as PNG.
pub fn encode_png(image: image::RgbImage) -> WallpaperResult<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("encode PNG")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../tests/unit/service.rs"]
mod tests;
