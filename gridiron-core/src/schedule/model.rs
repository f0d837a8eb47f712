use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::WallpaperResult;

/// Opponent value marking a week without a game.
pub const BYE: &str = "BYE";

/// Maximum number of games drawn in a schedule grid.
pub const MAX_GRID_GAMES: usize = 12;

/// One game (or bye week) in a team's season.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    /// Opponent display name, or [`BYE`].
    pub opponent: String,
    /// Logo filename of the opponent inside the logos directory.
    #[serde(default)]
    pub opponent_logo: String,
    /// Kick-off date as `MM-DD`.
    pub date: String,
    /// Whether the team plays at home.
    pub home: bool,
    /// Week number, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
}

impl ScheduleEntry {
    /// Entry with the opponent logo derived from the opponent name.
    pub fn new(opponent: impl Into<String>, date: impl Into<String>, home: bool) -> Self {
        let opponent = opponent.into();
        Self {
            opponent_logo: logo_filename_for_opponent(&opponent),
            opponent,
            date: date.into(),
            home,
            week: None,
        }
    }

    /// Whether this is a bye week.
    pub fn is_bye(&self) -> bool {
        self.opponent == BYE
    }
}

/// A team's season in the order the provider lists it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    /// Entries in season order; bowl games in January come last.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Wrap entries, keeping their order.
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// Parse the JSON array format written by the schedule downloader.
    ///
    /// Entries without `opponent_logo` get one derived from the opponent name.
    pub fn from_json(text: &str) -> WallpaperResult<Self> {
        let mut entries: Vec<ScheduleEntry> =
            serde_json::from_str(text).context("parse schedule JSON")?;
        for e in &mut entries {
            if e.opponent_logo.trim().is_empty() && !e.is_bye() {
                e.opponent_logo = logo_filename_for_opponent(&e.opponent);
            }
        }
        Ok(Self::new(entries))
    }

    /// Read and parse a schedule file.
    pub fn from_path(path: &Path) -> WallpaperResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read schedule '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Games that get a grid cell: byes removed, capped at [`MAX_GRID_GAMES`].
    pub fn grid_entries(&self) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| !e.is_bye())
            .take(MAX_GRID_GAMES)
            .collect()
    }

    /// Number of entries, byes included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Logo filename for a team as the asset tree stores it: spaces become `_`.
pub fn logo_filename_for_team(team: &str) -> String {
    format!("{}.png", team.trim().replace(' ', "_"))
}

/// Filename normalization used for opponents coming from the sports-data feed:
/// non-ASCII and `' " . , & ( )` are dropped, spaces become `_`.
pub fn logo_filename_for_opponent(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii() && !matches!(c, '\'' | '"' | '.' | ',' | '&' | '(' | ')'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    format!("{stem}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/model.rs"]
mod tests;
