//! Light/dark theme preference.
//!
//! The preference is process-wide: it is read once when the store is
//! initialised and only changes through [`ThemeStore::toggle`], which also
//! persists it under the single `theme` key of the preferences file.

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::runtime::Runtime;

/// Overrides the directory holding `preferences.json`.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow!("Unknown theme: {}. Expected light or dark.", s)),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

pub struct ThemeStore<R: Runtime> {
    runtime: R,
    path: Option<PathBuf>,
    current: Theme,
}

impl<R: Runtime> ThemeStore<R> {
    /// Reads the stored preference, falling back to `system_default` when
    /// nothing usable is stored.
    #[tracing::instrument(skip(runtime))]
    pub fn init(runtime: R, system_default: Theme) -> Self {
        let path = preferences_path(&runtime);
        let stored = path.as_ref().and_then(|p| {
            if !runtime.exists(p) {
                return None;
            }
            match read_preferences(&runtime, p) {
                Ok(prefs) => prefs.theme,
                Err(e) => {
                    warn!("Ignoring unreadable preferences {:?}: {:#}", p, e);
                    None
                }
            }
        });

        let current = stored.unwrap_or(system_default);
        debug!(
            "Theme initialised to {} ({})",
            current,
            if stored.is_some() { "stored" } else { "system default" }
        );

        Self {
            runtime,
            path,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. On failure the current theme is kept.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| anyhow!("No configuration directory to store the theme in"))?;

        if let Some(parent) = path.parent() {
            self.runtime.create_dir_all(parent)?;
        }
        let prefs = Preferences { theme: Some(next) };
        let json = serde_json::to_string_pretty(&prefs)?;
        self.runtime
            .write(path, json.as_bytes())
            .with_context(|| format!("Failed to save theme preference to {:?}", path))?;

        debug!("Theme switched from {} to {}", self.current, next);
        self.current = next;
        Ok(next)
    }
}

fn preferences_path<R: Runtime>(runtime: &R) -> Option<PathBuf> {
    let dir = match runtime.env_var(CONFIG_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => runtime.config_dir()?.join("folio"),
    };
    Some(dir.join(PREFERENCES_FILE))
}

fn read_preferences<R: Runtime>(runtime: &R, path: &std::path::Path) -> Result<Preferences> {
    let content = runtime.read_to_string(path)?;
    serde_json::from_str(&content).context("Failed to parse preferences")
}
