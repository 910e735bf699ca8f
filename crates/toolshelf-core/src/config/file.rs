//! File-based configuration provider (YAML)
//!
//! Supports user-level (~/.config/toolshelf/config.yaml) and workspace-level
//! (.config/toolshelf/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::settings::{CatalogSource, Settings, SettingsLayer};
use super::traits::{ConfigProvider, ConfigResult};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/toolshelf/config.yaml)
    User,
    /// Workspace-level config (.config/toolshelf/config.yaml in the workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Settings stored in a YAML file
///
/// The file is read lazily and cached; [`reload`](Self::reload) drops the
/// cache. A missing file means default settings.
///
/// # Example
///
/// ```no_run
/// use toolshelf_core::config::{layered_settings, FileConfigProvider};
///
/// let user = FileConfigProvider::user();
/// let workspace = FileConfigProvider::workspace("/path/to/site");
/// let settings = layered_settings(&user, Some(&workspace)).unwrap();
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<Settings>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// User-level provider in the platform config directory
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("toolshelf").join("config.yaml"), ConfigLevel::User)
    }

    /// Workspace-level provider under `<root>/.config/toolshelf/`
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("toolshelf").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Directory relative catalog paths are resolved against
    ///
    /// For a workspace file that is the workspace root, otherwise the
    /// directory holding the config file.
    pub fn base_dir(&self) -> PathBuf {
        let config_dir = self.path.parent().map(Path::to_path_buf).unwrap_or_default();
        match self.level {
            ConfigLevel::User => config_dir,
            ConfigLevel::Workspace => config_dir
                .parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or(config_dir),
        }
    }

    fn load(&self) -> ConfigResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        let settings: Settings = serde_yaml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> ConfigResult<()> {
        settings.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_yaml::to_string(settings)?)?;
        *self.cache.write() = Some(settings.clone());
        Ok(())
    }

    /// Re-read the file, replacing the cache
    pub fn reload(&self) -> ConfigResult<Settings> {
        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    /// Settings with a relative catalog path made absolute against [`base_dir`](Self::base_dir)
    pub fn resolved_settings(&self) -> ConfigResult<Settings> {
        let mut settings = self.settings()?;
        if let CatalogSource::File(path) = &settings.catalog.source {
            if path.is_relative() {
                settings.catalog.source = CatalogSource::File(self.base_dir().join(path));
            }
        }
        Ok(settings)
    }

    /// Only the keys the file sets, with a relative catalog path resolved
    ///
    /// Bypasses the cache. A missing or empty file sets nothing.
    pub fn layer(&self) -> ConfigResult<SettingsLayer> {
        if !self.path.exists() {
            return Ok(SettingsLayer::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SettingsLayer::default());
        }
        let mut layer: SettingsLayer = serde_yaml::from_str(&content)?;
        layer.validate()?;
        if let Some(CatalogSource::File(path)) = &layer.catalog.source {
            if path.is_relative() {
                layer.catalog.source = Some(CatalogSource::File(self.base_dir().join(path)));
            }
        }
        Ok(layer)
    }

    /// Copy the current file next to itself with a `.backup` suffix
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    pub fn export_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.settings()?)?)
    }

    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let settings: Settings = serde_json::from_str(json)?;
        self.save(&settings)
    }
}

impl ConfigProvider for FileConfigProvider {
    fn settings(&self) -> ConfigResult<Settings> {
        if let Some(settings) = self.cache.read().as_ref() {
            return Ok(settings.clone());
        }
        self.reload()
    }

    fn save_settings(&self, settings: &Settings) -> ConfigResult<()> {
        self.save(settings)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

/// User settings with the workspace's layered on top
///
/// Every key the workspace file sets wins, including ones equal to the
/// default. Relative catalog paths are resolved per file before merging.
pub fn layered_settings(user: &FileConfigProvider, workspace: Option<&FileConfigProvider>) -> ConfigResult<Settings> {
    let mut settings = user.resolved_settings()?;
    if let Some(workspace) = workspace {
        settings = settings.overlay(workspace.layer()?);
    }
    Ok(settings)
}
