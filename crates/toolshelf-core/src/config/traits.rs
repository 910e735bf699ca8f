//! Configuration provider trait

use super::settings::Settings;

/// Source of [`Settings`]
///
/// Implementations:
/// - `MemoryConfigProvider`: in-memory, for tests and embedding
/// - `FileConfigProvider`: YAML file at user or workspace level
pub trait ConfigProvider: Send + Sync {
    /// Current settings; a missing source yields defaults
    fn settings(&self) -> ConfigResult<Settings>;

    /// Replace the stored settings
    fn save_settings(&self, settings: &Settings) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
