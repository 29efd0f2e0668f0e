use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use which::which;

use crate::{FolioError, Result, Theme};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory backing local storage (session record, theme preference)
    pub data_dir: PathBuf,

    /// Editor command used for long text fields
    pub editor_command: Option<String>,

    /// Simulated delay for contact form submission (in milliseconds)
    pub contact_delay_ms: u64,

    /// Simulated loading delay before the first view (in milliseconds)
    pub loading_delay_ms: u64,

    /// Overrides the detected system color scheme
    pub system_theme: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("dev", "folio", "folio")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".folio"));

        Self {
            data_dir,
            editor_command: None,
            contact_delay_ms: 1500,
            loading_delay_ms: 800,
            system_theme: None,
        }
    }
}

impl Config {
    /// Default location of the configuration file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(FolioError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            FolioError::ConfigError {
                message: format!("Invalid config file {}: {}", path.display(), e),
            }
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        // First try the configured editor
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        // Then try environment variable
        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        // Fall back to platform defaults
        if cfg!(windows) {
            "notepad".to_string()
        } else if cfg!(target_os = "macos") {
            "open -t".to_string()
        } else {
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_simulated_delays() {
        let config = Config::default();
        assert_eq!(config.contact_delay_ms, 1500);
        assert_eq!(config.loading_delay_ms, 800);
        assert!(config.system_theme.is_none());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(FolioError::ConfigError { .. })));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"data_dir": "/tmp/folio-data", "system_theme": "dark"}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/folio-data"));
        assert_eq!(config.system_theme, Some(Theme::Dark));
        assert_eq!(config.contact_delay_ms, 1500);
    }

    #[test]
    fn test_configured_editor_wins() {
        let config = Config {
            editor_command: Some("code --wait".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_editor_command(), "code --wait");
    }
}
