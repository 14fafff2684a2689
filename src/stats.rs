//! Session statistics: win/loss/tie and action counters, kept separately
//! for one-player and two-player games and persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Which statistics bucket a game records into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    OnePlayer,
    TwoPlayer,
}

/// Counters for one mode. `wins` counts Red (the human in one-player
/// mode), `losses` counts Black (the computer).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeStats {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    pub hints: u64,
    pub undos: u64,
    pub clears: u64,
}

impl ModeStats {
    /// Share of finished games won, as a whole percentage. Zero wins is
    /// reported as zero even before any game has finished.
    pub fn success_rate(&self) -> u64 {
        if self.wins == 0 {
            return 0;
        }
        self.wins * 100 / (self.wins + self.losses + self.ties)
    }
}

/// All persisted statistics, one bucket per mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    one_player: ModeStats,
    two_player: ModeStats,
}

impl Statistics {
    /// Load statistics from a JSON file, starting fresh if the file does
    /// not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self, StatsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write statistics to disk. Goes through a temp file and rename so a
    /// crash mid-write cannot corrupt the existing file.
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn mode(&self, mode: GameMode) -> &ModeStats {
        match mode {
            GameMode::OnePlayer => &self.one_player,
            GameMode::TwoPlayer => &self.two_player,
        }
    }

    pub fn mode_mut(&mut self, mode: GameMode) -> &mut ModeStats {
        match mode {
            GameMode::OnePlayer => &mut self.one_player,
            GameMode::TwoPlayer => &mut self.two_player,
        }
    }

    /// Clear the counters of one mode; the other mode's history stays.
    pub fn reset(&mut self, mode: GameMode) {
        *self.mode_mut(mode) = ModeStats::default();
    }
}
