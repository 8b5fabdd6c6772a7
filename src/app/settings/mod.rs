pub mod keybinds;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app::core::refresh::DEFAULT_REFRESH_PERIOD;
use crate::app::metrics::DEFAULT_JITTER_PERIOD;

/// Errors from loading or persisting the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no usable configuration directory on this system")]
    NoConfigDir,
}

/// Persisted user settings, stored as TOML in the platform config dir.
/// Every field has a default so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Host serving the live, embedded dashboard views.
    pub base_url: Url,
    /// Auto-refresh cadence for live panels, in seconds.
    pub refresh_secs: u64,
    /// Cadence of the demo metric jitter, in seconds.
    pub metrics_jitter_secs: u64,
    /// Where exported documents are written; current directory if unset.
    pub export_dir: Option<PathBuf>,
    /// "dark" or "light".
    pub theme: String,
    /// Optional per-request timeout for live loads. Unset by default: a
    /// load waits on the remote's own success or failure signal, however
    /// long that takes, and a panel stuck loading stays that way until
    /// the user retries or the refresh cycle fires.
    pub load_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: Url::parse("https://dashboards.example.net/")
                .expect("default base URL parses"),
            refresh_secs: DEFAULT_REFRESH_PERIOD.as_secs(),
            metrics_jitter_secs: DEFAULT_JITTER_PERIOD.as_secs(),
            export_dir: None,
            theme: "dark".to_string(),
            load_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn jitter_period(&self) -> Duration {
        Duration::from_secs(self.metrics_jitter_secs)
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_secs.map(Duration::from_secs)
    }

    pub fn dark_theme(&self) -> bool {
        self.theme != "light"
    }
}

fn project_dirs() -> Result<ProjectDirs, SettingsError> {
    ProjectDirs::from("", "", "threatdeck").ok_or(SettingsError::NoConfigDir)
}

/// Path of the settings file inside the platform config directory.
pub fn config_file() -> Result<PathBuf, SettingsError> {
    Ok(project_dirs()?.config_dir().join("settings.toml"))
}

/// Directory for log files.
pub fn log_dir() -> Result<PathBuf, SettingsError> {
    Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Load settings from the default location; defaults when absent.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&config_file()?)
}

/// Load settings from an explicit path; defaults when the file is
/// missing, an error when it exists but does not parse.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Persist settings to the default location, creating the directory as
/// needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = config_file()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&path, toml::to_string_pretty(settings)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "refresh_secs = 60\ntheme = \"light\"\n").unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.refresh_secs, 60);
        assert!(!loaded.dark_theme());
        assert_eq!(loaded.metrics_jitter_secs, 5);
        assert!(loaded.load_timeout_secs.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "refresh_secs = \"soon\"\n").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn roundtrip_through_toml() {
        let mut s = Settings::default();
        s.refresh_secs = 45;
        s.load_timeout_secs = Some(20);
        let text = toml::to_string_pretty(&s).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, s);
    }
}
