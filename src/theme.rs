use std::{fmt, str::FromStr};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{FolioError, LocalStorage, Result};

/// Storage key of the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
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
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::InvalidValue {
                message: format!("unknown theme '{}', expected light or dark", other),
            }),
        }
    }
}

/// Guesses the terminal color scheme from `COLORFGBG` ("fg;bg").
///
/// Background colors 0-6 and 8 are the dark half of the 16-color palette.
pub fn detect_system_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or(Theme::Light)
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if bg <= 6 || bg == 8 {
        Some(Theme::Dark)
    } else {
        Some(Theme::Light)
    }
}

/// Light/dark preference backed by local storage.
#[derive(Debug)]
pub struct ThemePreference {
    current: Theme,
    storage: LocalStorage,
}

impl ThemePreference {
    /// Reads the stored preference, falling back to `system` when absent or
    /// unreadable.
    pub fn load(storage: LocalStorage, system: Theme) -> Self {
        let current = match storage.get_raw(THEME_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Theme>(&raw) {
                Ok(theme) => theme,
                Err(e) => {
                    warn!("Ignoring unreadable theme preference: {}", e);
                    system
                }
            },
            Ok(None) => {
                debug!("No stored theme, using system preference {}", system);
                system
            }
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                system
            }
        };

        Self { current, storage }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists the new value.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.storage.set_item(THEME_KEY, &next)?;
        info!("Theme switched to {}", next);
        self.current = next;
        Ok(next)
    }
}
