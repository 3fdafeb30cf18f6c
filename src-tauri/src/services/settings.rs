use crate::models::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional settings document in the working directory
pub const SETTINGS_FILE_NAME: &str = "lang.json";

const NOT_FOUND_NOTICE: &str = "Language-File not found - using english";

/// Result of loading settings: always a usable record, plus an optional
/// message for the status bar when the defaults had to be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub notice: Option<String>,
}

impl LoadedSettings {
    fn fallback(notice: String) -> Self {
        Self {
            settings: Settings::default(),
            notice: Some(notice),
        }
    }
}

/// Loader for `lang.json`
pub struct SettingsLoader {
    settings_path: PathBuf,
}

impl SettingsLoader {
    /// Create a loader looking for `lang.json` inside `working_dir`
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: working_dir.as_ref().join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk
    ///
    /// Never fails: a missing or malformed document yields the english/utf-8
    /// defaults together with a notice describing what happened.
    pub fn load(&self) -> LoadedSettings {
        if !self.settings_exists() {
            tracing::info!(
                "No settings file at {}, using defaults",
                self.settings_path.display()
            );
            return LoadedSettings::fallback(NOT_FOUND_NOTICE.to_string());
        }

        match self.read_settings() {
            Ok(settings) => {
                tracing::info!(
                    language = %settings.language,
                    encoding = %settings.encoding,
                    "Loaded settings from {}",
                    self.settings_path.display()
                );
                LoadedSettings {
                    settings,
                    notice: None,
                }
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", self.settings_path.display(), e);
                LoadedSettings::fallback(format!(
                    "Language-File Importing-Error {} - using english & utf-8",
                    e
                ))
            }
        }
    }

    /// Get the settings file path
    pub fn settings_file_path(&self) -> &Path {
        &self.settings_path
    }

    /// Check if the settings file exists
    pub fn settings_exists(&self) -> bool {
        self.settings_path.is_file()
    }

    fn read_settings(&self) -> Result<Settings, String> {
        let content = fs::read_to_string(&self.settings_path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings file: {}", e))
    }
}
