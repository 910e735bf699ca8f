//! Configuration provider abstractions
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: YAML file-based (user/workspace level)

mod traits;
mod settings;
mod memory;
mod file;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use settings::{Settings, CatalogSettings, CatalogSource, BrowseSettings, SettingsLayer, CatalogLayer, BrowseLayer};
pub use memory::MemoryConfigProvider;
pub use file::{FileConfigProvider, ConfigLevel, layered_settings};
