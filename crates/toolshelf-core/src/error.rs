//! Catalog error types

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog
///
/// Query operations on a loaded registry never surface these directly; they
/// degrade to fallback values. The `try_*` variants and the loaders return
/// them so callers can show a "not found" state or reject bad data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No tool with this id
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// No category with this id
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The same tool id appears more than once
    #[error("Duplicate tool id '{id}' (categories: {})", categories.join(", "))]
    DuplicateToolId { id: String, categories: Vec<String> },

    /// The same category id appears more than once
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    /// A record has an empty identifier
    #[error("Empty {kind} id at position {index}")]
    EmptyId { kind: &'static str, index: usize },

    /// A tool references a category that does not exist (strict loading only)
    #[error("Tool '{tool_id}' references unknown category '{category}'")]
    DanglingCategory { tool_id: String, category: String },

    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings naming the catalog could not be read
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Catalog file extension is not one we can parse
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl CatalogError {
    /// Create a tool-not-found error
    pub fn tool_not_found(id: impl Into<String>) -> Self {
        Self::ToolNotFound(id.into())
    }

    /// Create a category-not-found error
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::CategoryNotFound(id.into())
    }

    /// Whether this is one of the NotFound conditions
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::CategoryNotFound(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
