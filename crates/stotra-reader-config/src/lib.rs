use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound of the stored font-scale factor.
pub const FONT_SCALE_MIN: f32 = 0.8;
/// Upper bound of the stored font-scale factor.
pub const FONT_SCALE_MAX: f32 = 2.5;

/// Playback-rate factors the player offers. A stored rate outside this set is
/// treated as corrupt.
pub const PLAYBACK_RATES: [f32; 4] = [0.75, 1.0, 1.25, 1.5];

const DEFAULT_LANGUAGE: &str = "english";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Last-selected language id.
    pub language: String,
    /// Text-size multiplier, kept within [`FONT_SCALE_MIN`, `FONT_SCALE_MAX`].
    pub font_scale: f32,
    /// Playback-rate factor, one of [`PLAYBACK_RATES`].
    pub playback_rate: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            font_scale: 1.0,
            playback_rate: 1.0,
        }
    }
}

impl Preferences {
    /// Load preferences, returning `Ok(None)` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, PreferencesError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| PreferencesError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut preferences: Preferences =
            toml::from_str(&content).map_err(|source| PreferencesError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        preferences.sanitize();

        Ok(Some(preferences))
    }

    /// Load preferences from the default location, silently falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::preferences_path())
    }

    /// Like [`Preferences::load_or_default`] for an explicit path.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_path(path)
            .unwrap_or_default()
            .unwrap_or_default()
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::preferences_path())
    }

    pub fn preferences_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/stotra-reader");
        PathBuf::from(config_dir.as_ref()).join("preferences.toml")
    }

    /// Pull out-of-range values back to documented defaults: font scale is
    /// clamped, a playback rate outside the fixed set resets to 1.0.
    pub fn sanitize(&mut self) {
        if !self.font_scale.is_finite() {
            self.font_scale = 1.0;
        }
        self.font_scale = self.font_scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);

        if !PLAYBACK_RATES
            .iter()
            .any(|rate| (rate - self.playback_rate).abs() < 1e-3)
        {
            self.playback_rate = 1.0;
        }

        if self.language.is_empty() {
            self.language = DEFAULT_LANGUAGE.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn preferences_path_expands_tilde() {
        let path = Preferences::preferences_path();
        let path_str = path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/stotra-reader/preferences.toml"));
    }

    #[test]
    fn serialization_roundtrip() {
        let original = Preferences {
            language: "tamil".to_string(),
            font_scale: 1.4,
            playback_rate: 1.25,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Preferences = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn load_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Preferences::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn load_or_default_swallows_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert_eq!(
            Preferences::load_or_default_from(&missing),
            Preferences::default()
        );
    }

    #[test]
    fn load_or_default_swallows_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        std::fs::write(&path, "not { valid toml").unwrap();

        assert_eq!(
            Preferences::load_or_default_from(&path),
            Preferences::default()
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        let preferences = Preferences {
            language: "devanagari".to_string(),
            font_scale: 2.0,
            playback_rate: 0.75,
        };

        preferences.save_to_path(&path).unwrap();
        let loaded = Preferences::load_from_path(&path).unwrap().unwrap();

        assert_eq!(loaded, preferences);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/preferences.toml");

        Preferences::default().save_to_path(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn out_of_range_font_scale_is_clamped_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        std::fs::write(&path, "language = \"english\"\nfont_scale = 9.0\nplayback_rate = 1.0\n")
            .unwrap();

        let loaded = Preferences::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded.font_scale, FONT_SCALE_MAX);
    }

    #[test]
    fn unknown_playback_rate_resets_to_normal() {
        let mut preferences = Preferences {
            playback_rate: 3.0,
            ..Preferences::default()
        };
        preferences.sanitize();
        assert_eq!(preferences.playback_rate, 1.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let preferences: Preferences = toml::from_str("language = \"kannada\"").unwrap();
        assert_eq!(preferences.language, "kannada");
        assert_eq!(preferences.font_scale, 1.0);
        assert_eq!(preferences.playback_rate, 1.0);
    }
}
