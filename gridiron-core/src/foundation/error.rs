use std::path::PathBuf;

/// Convenience result type used across the engine.
pub type WallpaperResult<T> = Result<T, WallpaperError>;

/// Top-level error taxonomy used by engine APIs.
///
/// `MissingAsset`, `InvalidProfile`, `ScheduleNotFound` and `Validation` abort a render.
/// `DegradedAsset` and `CollagePlacement` are recovered where they occur and only ever
/// reach callers through logs and render reports.
#[derive(thiserror::Error, Debug)]
pub enum WallpaperError {
    /// A required asset (hero logo, collage background, font) could not be opened.
    #[error("missing asset '{}': {reason}", path.display())]
    MissingAsset {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// A thumbnail asset was absent and the fallback logo was substituted.
    #[error("degraded asset '{}': substituted '{}'", requested.display(), fallback.display())]
    DegradedAsset {
        /// Path that was requested.
        requested: PathBuf,
        /// Fallback path used instead.
        fallback: PathBuf,
    },

    /// Device profile outside the known presets.
    #[error("invalid profile '{0}': expected 'pc' or 'mobile'")]
    InvalidProfile(String),

    /// A single collage placement failed and was skipped.
    #[error("collage placement failed for '{}': {reason}", logo.display())]
    CollagePlacement {
        /// Logo that failed.
        logo: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// The schedule provider has no schedule for the team.
    #[error("no schedule found for '{0}'")]
    ScheduleNotFound(String),

    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WallpaperError {
    /// Build a [`WallpaperError::MissingAsset`] value.
    pub fn missing_asset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::MissingAsset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`WallpaperError::CollagePlacement`] value.
    pub fn collage_placement(logo: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::CollagePlacement {
            logo: logo.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`WallpaperError::InvalidProfile`] value.
    pub fn invalid_profile(name: impl Into<String>) -> Self {
        Self::InvalidProfile(name.into())
    }

    /// Build a [`WallpaperError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error aborts the current render.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::DegradedAsset { .. } | Self::CollagePlacement { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
