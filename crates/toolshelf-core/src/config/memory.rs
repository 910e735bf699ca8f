//! In-memory configuration provider

use parking_lot::RwLock;

use super::settings::Settings;
use super::traits::{ConfigProvider, ConfigResult};

/// Settings held in memory; nothing is persisted
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    settings: RwLock<Settings>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Reset to defaults
    pub fn clear(&self) {
        *self.settings.write() = Settings::default();
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn settings(&self) -> ConfigResult<Settings> {
        Ok(self.settings.read().clone())
    }

    fn save_settings(&self, settings: &Settings) -> ConfigResult<()> {
        *self.settings.write() = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortBy;

    #[test]
    fn test_memory_config_provider() {
        let config = MemoryConfigProvider::new();
        assert_eq!(config.settings().unwrap(), Settings::default());

        let mut settings = Settings::default();
        settings.browse.default_sort = Some(SortBy::Popular);
        config.save_settings(&settings).unwrap();
        assert_eq!(config.settings().unwrap().browse.default_sort, Some(SortBy::Popular));

        config.clear();
        assert_eq!(config.settings().unwrap(), Settings::default());
    }
}
