//! Configuration
//!
//! - `LogSettings`: topic, module, directory, render mode, backend
//! - `SettingsFile`: YAML persistence for settings

mod error;
mod file;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use file::SettingsFile;
pub use settings::{LogSettings, DEFAULT_TOPIC};
