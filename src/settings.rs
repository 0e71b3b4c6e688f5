//! User preferences
//!
//! Persisted separately from everything else; currently only the theme.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether the root element carries the `dark` class
    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Storage key for the theme
    pub const THEME_KEY: &'static str = "theme";

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Load settings; `fallback` is used when nothing valid is stored (the
    /// host passes the system colour-scheme preference)
    pub fn load(storage: &dyn Storage, fallback: Theme) -> Self {
        let theme = match storage.get(Self::THEME_KEY) {
            Ok(Some(raw)) => Theme::from_str(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring unknown theme {raw:?}");
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                log::warn!("Could not read theme: {e}");
                fallback
            }
        };
        log::info!("Using {} theme", theme.as_str());
        Self { theme }
    }

    /// Save settings; failures are logged and otherwise ignored
    pub fn save(&self, storage: &mut dyn Storage) {
        match storage.set(Self::THEME_KEY, self.theme.as_str()) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {e}"),
        }
    }
}
