//! Theme preference persistence.
//!
//! The theme is owned by the UI layer, not the workout store; it shares the
//! same key-value backend under its own key.

use std::fmt;
use std::str::FromStr;

use crate::error::{FitfuelError, Result};

use super::backend::StorageBackend;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "fitfuel_theme_v1";

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("unknown theme: {} (expected dark or light)", s)),
        }
    }
}

/// Load the persisted theme preference.
///
/// Fails open: missing or unrecognized values yield the default dark theme.
pub fn load_theme(backend: &dyn StorageBackend) -> Theme {
    match backend.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_default(),
        _ => Theme::default(),
    }
}

/// Persist the theme preference.
pub fn save_theme(backend: &mut dyn StorageBackend, theme: Theme) -> Result<()> {
    backend
        .set(THEME_KEY, theme.as_str())
        .map_err(|e| FitfuelError::Persistence {
            message: e.to_string(),
        })
}
