//! User settings: hot-key overrides and palette overrides.
//!
//! Stored as JSON under the per-user cache directory. Entries that cannot be
//! understood are logged and skipped; a broken file never stops startup.

use crate::core::command::Command;
use crate::core::keymap::{parse_keybinding, Keymap};
use crate::ui::core::palette::{Palette, Role};
use crate::ui::core::style::{parse_color, Mod, Style};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".ism";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub palette: Vec<PaletteRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    /// Empty unbinds the key.
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRule {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<String>,
}

impl Settings {
    /// The default hot-key table with this file's rules applied in order.
    pub fn keymap(&self) -> Keymap {
        let mut keymap = Keymap::with_defaults();
        for rule in &self.keybindings {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unknown key in keybinding");
                continue;
            };
            if rule.command.trim().is_empty() {
                keymap.unbind(&key);
                continue;
            }
            match Command::from_name(&rule.command) {
                Command::Custom(name) => {
                    tracing::warn!(key = %rule.key, command = %name, "unknown command in keybinding");
                }
                command => {
                    keymap.bind(key, command);
                }
            }
        }
        keymap
    }

    /// The default palette with this file's roles replaced.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for rule in &self.palette {
            let Some(role) = Role::parse(&rule.role) else {
                tracing::warn!(role = %rule.role, "unknown palette role");
                continue;
            };
            palette.set(role, rule.style());
        }
        palette
    }
}

impl PaletteRule {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg.as_deref() {
            match parse_color(fg) {
                Some(color) => style = style.fg(color),
                None => tracing::warn!(role = %self.role, color = fg, "unknown color"),
            }
        }
        if let Some(bg) = self.bg.as_deref() {
            match parse_color(bg) {
                Some(color) => style = style.bg(color),
                None => tracing::warn!(role = %self.role, color = bg, "unknown color"),
            }
        }
        for m in &self.mods {
            match Mod::parse(m) {
                Some(m) => style = style.add_mod(m),
                None => tracing::warn!(role = %self.role, modifier = %m, "unknown modifier"),
            }
        }
        style
    }
}

pub fn parse_settings(data: &str) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(data)?)
}

pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    parse_settings(&data)
}

/// Writes default settings to `path` unless something is already there.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_app_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// Settings from the user's file, or defaults if it is missing or broken.
pub fn load_settings() -> Settings {
    let Some(path) = get_settings_path() else {
        return Settings::default();
    };
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default settings");
            Settings::default()
        }
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_dir().map(|dir| dir.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

fn get_app_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR))
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/settings.rs"]
mod tests;
