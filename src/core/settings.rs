//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file in the per-user
//! configuration directory.
//!
//! # File Location
//!
//! Resolved through [`ProjectDirs`], e.g.
//! `~/.config/hotseatchess/settings.json` on Linux. Falls back to
//! `settings.json` in the working directory when no config directory exists.
//!
//! # Error Handling
//!
//! - [`load_settings`] and [`save_settings`] return [`CoreResult`]
//! - [`load_or_default`] falls back to defaults and reports a
//!   [`SettingsOrigin`], so a broken file never prevents a game from starting

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{CoreError, CoreResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for the terminal session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Draw pieces with chess glyphs instead of letters
    pub unicode_pieces: bool,

    /// Print file letters and rank numbers around the board
    pub show_coordinates: bool,

    /// Mark the selected piece's legal destinations
    pub show_legal_moves: bool,

    /// Draw the board from Black's side while Black is to move
    pub flip_for_black: bool,

    /// Default tracing filter, e.g. `info` or `chess_rules=debug`
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            unicode_pieces: true,
            show_coordinates: true,
            show_legal_moves: true,
            flip_for_black: false,
            log_level: "warn".to_string(),
        }
    }
}

/// Default path of `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "HotseatChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
///
/// # Errors
///
/// I/O errors (including a missing file) and malformed JSON.
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Where [`load_or_default`] got its settings from
#[derive(Debug)]
pub enum SettingsOrigin {
    /// Parsed from the file
    File,
    /// No file at the path, defaults used
    Missing,
    /// The file exists but could not be read or parsed, defaults used
    Invalid(CoreError),
}

impl SettingsOrigin {
    pub fn is_default(&self) -> bool {
        !matches!(self, SettingsOrigin::File)
    }

    /// Report the origin; settings are read before the subscriber exists, so
    /// the binary calls this once tracing is installed
    pub fn log(&self, path: &Path) {
        match self {
            SettingsOrigin::File => info!("[SETTINGS] Loaded settings from {:?}", path),
            SettingsOrigin::Missing => {
                info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path)
            }
            SettingsOrigin::Invalid(e) => warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            ),
        }
    }
}

/// Read settings from `path`, using defaults if the file is missing or invalid
pub fn load_or_default(path: &Path) -> (GameSettings, SettingsOrigin) {
    if !path.exists() {
        return (GameSettings::default(), SettingsOrigin::Missing);
    }

    match load_settings(path) {
        Ok(settings) => (settings, SettingsOrigin::File),
        Err(e) => (GameSettings::default(), SettingsOrigin::Invalid(e)),
    }
}

/// Write settings to `path` as pretty JSON, creating the parent directory
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
