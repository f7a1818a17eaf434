//! Application settings (game install, content folders, badge directories).
//!
//! Settings live in `~/.config/pitwall/settings.toml`. The file is optional:
//! a missing file yields defaults, and a corrupt one is reported and then
//! ignored, so a bad edit never prevents a scan.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::query::ContentKind;

/// Folder name suffix that identifies a game install directory.
const INSTALL_DIR_SUFFIX: &str = "assettocorsa";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub badges: BadgeSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Game root, the folder containing `content/`
    pub install_path: Option<PathBuf>,
    /// Overrides `<install>/content/cars`
    pub cars_dir: Option<PathBuf>,
    /// Overrides `<install>/content/tracks`
    pub tracks_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeSettings {
    /// Searched first; badges here replace the defaults
    pub user_dir: Option<PathBuf>,
    pub default_dir: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/pitwall/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pitwall").join("settings.toml")
}

/// Load settings from the canonical location.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

pub fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

/// Resolve the game install path:
///
/// 1. CLI override (if `Some`)
/// 2. `game.install_path` in `settings.toml`
pub fn resolve_install_path(cli_override: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    cli_override.or_else(|| settings.game.install_path.clone())
}

/// Whether `path` looks like a game install folder: its last component ends
/// with "assettocorsa", ignoring case.
pub fn is_valid_install_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().ends_with(INSTALL_DIR_SUFFIX))
}

/// Content folders inside a game install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    pub cars: PathBuf,
    pub tracks: PathBuf,
}

impl ContentPaths {
    pub fn from_install(install: &Path) -> Self {
        let content = install.join("content");
        Self {
            cars: content.join("cars"),
            tracks: content.join("tracks"),
        }
    }

    pub fn get(&self, kind: ContentKind) -> &Path {
        match kind {
            ContentKind::Cars => &self.cars,
            ContentKind::Tracks => &self.tracks,
        }
    }
}

/// Resolve the folder to scan for `kind`:
///
/// 1. Explicit directory (if `Some`)
/// 2. `game.cars_dir` / `game.tracks_dir` in `settings.toml`
/// 3. The matching content folder of the install path
pub fn content_dir(
    kind: ContentKind,
    dir_override: Option<PathBuf>,
    install: Option<&Path>,
    settings: &Settings,
) -> Option<PathBuf> {
    let configured = match kind {
        ContentKind::Cars => &settings.game.cars_dir,
        ContentKind::Tracks => &settings.game.tracks_dir,
    };
    dir_override
        .or_else(|| configured.clone())
        .or_else(|| install.map(|i| ContentPaths::from_install(i).get(kind).to_path_buf()))
}

/// Badge directories in search order: user overrides, then defaults.
///
/// Unset entries fall back to `~/.config/pitwall/badges` and
/// `~/.local/share/pitwall/badges` (platform equivalents elsewhere).
pub fn badge_dirs(settings: &Settings) -> Vec<PathBuf> {
    let user = settings
        .badges
        .user_dir
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("pitwall").join("badges")));
    let default = settings
        .badges
        .default_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("pitwall").join("badges")));
    user.into_iter().chain(default).collect()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
