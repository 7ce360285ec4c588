//! File-based settings (YAML)
//!
//! User-level settings live at `~/.config/scribe/config.yaml` (or the
//! platform equivalent).

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigResult;
use super::settings::LogSettings;

/// Settings file on disk
///
/// # Example
///
/// ```no_run
/// use scribe_core::config::SettingsFile;
///
/// let settings = SettingsFile::user().load().unwrap();
/// println!("logging topic {}", settings.topic);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level settings file
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("scribe").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read settings; a missing file gives the defaults
    pub fn load(&self) -> ConfigResult<LogSettings> {
        if !self.path.exists() {
            return Ok(LogSettings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LogSettings::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write settings, creating parent directories
    pub fn save(&self, settings: &LogSettings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
