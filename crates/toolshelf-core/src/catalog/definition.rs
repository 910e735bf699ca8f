//! Serialized catalog definitions (YAML or JSON)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CategoryRecord, ToolRecord};

/// Built-in catalog compiled into the crate
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yaml");

/// File formats a catalog can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "json" => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The raw category and tool lists, in definition order
///
/// This is what catalog files contain. It is not validated; build a
/// [`CatalogRegistry`](super::CatalogRegistry) from it to get the checked,
/// queryable form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub tools: Vec<ToolRecord>,
}

impl CatalogDefinition {
    pub fn new(categories: Vec<CategoryRecord>, tools: Vec<ToolRecord>) -> Self {
        Self { categories, tools }
    }

    /// The definition shipped with the crate
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parse(content: &str, format: CatalogFormat) -> CatalogResult<Self> {
        match format {
            CatalogFormat::Yaml => Self::from_yaml_str(content),
            CatalogFormat::Json => Self::from_json_str(content),
        }
    }

    /// Read a catalog file, picking the parser from the extension
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    pub fn to_yaml_string(&self) -> CatalogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
