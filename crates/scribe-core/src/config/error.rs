//! Configuration errors

/// Errors that can occur while loading or interpreting settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown render mode: {0}")]
    InvalidRenderMode(String),

    #[error("Unknown backend: {0}")]
    InvalidBackend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
