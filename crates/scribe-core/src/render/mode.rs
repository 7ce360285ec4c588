//! Render mode selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// How a value is turned into text before it is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Strings pass through; everything else gets a nested key/index dump
    #[default]
    Plain,
    /// Literal re-construction of the value (`array ( ... )` syntax)
    Exported,
    /// `Exported`, reshaped into indented `[ ... ]` blocks
    #[serde(alias = "pretty")]
    PrettyExported,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Plain => "plain",
            RenderMode::Exported => "exported",
            RenderMode::PrettyExported => "pretty_exported",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(RenderMode::Plain),
            "exported" | "export" => Ok(RenderMode::Exported),
            "pretty" | "pretty_exported" | "pretty-exported" => Ok(RenderMode::PrettyExported),
            _ => Err(ConfigError::InvalidRenderMode(s.to_string())),
        }
    }
}
