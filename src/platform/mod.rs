//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time and run seeds
//! - Durable storage (LocalStorage on web, a JSON file natively)
//! - The system colour-scheme preference

use chrono::{Local, NaiveDateTime};

use crate::persistence::{MemoryStorage, Storage};
use crate::settings::Theme;

/// Environment variable overriding the native store location
pub const STORE_PATH_ENV: &str = "ENVIRO_LYTIX_STORE";
/// Default native store location, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "enviro-lytix.json";

/// Local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Seed for a new game, taken from the clock
pub fn seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Open the platform's durable store, falling back to memory when it is
/// unavailable
pub fn open_storage() -> Box<dyn Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::persistence::LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                log::warn!("LocalStorage unavailable, nothing will be saved");
                Box::new(MemoryStorage::new())
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::env::var(STORE_PATH_ENV).unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        match crate::persistence::FileStorage::open(&path) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("Could not open {path}: {e}; nothing will be saved");
                Box::new(MemoryStorage::new())
            }
        }
    }
}

/// Theme to use when none is stored
pub fn preferred_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|m| m.matches());
        if dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::Light
    }
}
