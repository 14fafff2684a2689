use std::path::Path;

use crate::ai::MAX_DIFFICULTY;
use crate::error::SettingsError;
use crate::stats::GameMode;

/// Player-facing settings, persisted as TOML between sessions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// One player against the computer, or two humans sharing the board.
    pub one_player: bool,
    /// Sampling budget exponent for the computer opponent.
    pub difficulty: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            one_player: true,
            difficulty: 7,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file does not exist
    /// yet (first run).
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write settings back to disk.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self).expect("settings serialize");
        std::fs::write(path, content).map_err(|e| SettingsError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate settings values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.difficulty > MAX_DIFFICULTY {
            return Err(SettingsError::Validation(format!(
                "difficulty must be <= {MAX_DIFFICULTY}"
            )));
        }
        Ok(())
    }

    /// The statistics bucket the current mode records into.
    pub fn mode(&self) -> GameMode {
        if self.one_player {
            GameMode::OnePlayer
        } else {
            GameMode::TwoPlayer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.one_player);
        assert_eq!(settings.difficulty, 7);
        settings.validate().expect("defaults should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("difficulty = 3").unwrap();
        assert_eq!(settings.difficulty, 3);
        assert!(settings.one_player);
    }

    #[test]
    fn test_validation_rejects_oversized_difficulty() {
        let mut settings = Settings::default();
        settings.difficulty = MAX_DIFFICULTY + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("none.toml")).unwrap();
        assert_eq!(settings.difficulty, 7);
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.one_player = false;
        settings.difficulty = 2;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert!(!loaded.one_player);
        assert_eq!(loaded.difficulty, 2);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "difficulty = 99").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_mode_tracks_player_count() {
        let mut settings = Settings::default();
        assert_eq!(settings.mode(), GameMode::OnePlayer);
        settings.one_player = false;
        assert_eq!(settings.mode(), GameMode::TwoPlayer);
    }
}
