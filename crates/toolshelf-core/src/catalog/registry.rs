//! Catalog registry: the validated, read-only set of tools and categories

use std::path::Path;

use super::definition::CatalogDefinition;
use super::validation::{validate_definitions, CatalogIssue, Severity, ValidationReport};
use crate::config::{CatalogSettings, CatalogSource};
use crate::error::{CatalogError, CatalogResult};
use crate::logging::SharedLogger;
use crate::search::{filter_tools, ToolQuery};
use crate::types::{CategoryRecord, ToolRecord};

/// Options controlling how strictly a definition is checked on load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject tools whose category does not exist instead of warning
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Immutable registry of tool and category records
///
/// Built once at startup and shared (usually behind an `Arc`) with every
/// component that reads the catalog. Nothing mutates it after construction,
/// so concurrent reads need no locking.
///
/// Lookups are linear; catalogs hold tens of entries.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    tools: Vec<ToolRecord>,
    categories: Vec<CategoryRecord>,
}

impl CatalogRegistry {
    /// Validate and load a definition, warning about dangling categories
    pub fn new(def: CatalogDefinition, logger: &SharedLogger) -> CatalogResult<Self> {
        Self::with_options(def, LoadOptions::default(), logger)
    }

    /// Validate and load a definition
    ///
    /// Empty or duplicate ids always fail; a duplicate tool id is never
    /// resolved by guessing which category is canonical. Everything else
    /// is logged as a warning, except dangling categories in strict mode.
    pub fn with_options(def: CatalogDefinition, options: LoadOptions, logger: &SharedLogger) -> CatalogResult<Self> {
        let report = validate_definitions(&def);

        for issue in &report.issues {
            let blocking = issue.severity() == Severity::Error
                || (options.strict && matches!(issue, CatalogIssue::DanglingCategory { .. }));

            if blocking {
                crate::log_error!(logger, "[CatalogRegistry] {}", issue);
                if let Some(err) = issue.to_error() {
                    return Err(err);
                }
            } else {
                crate::log_warn!(logger, "[CatalogRegistry] {}", issue);
            }
        }

        crate::log_info!(
            logger,
            "[CatalogRegistry] Loaded {} tools in {} categories",
            def.tools.len(),
            def.categories.len()
        );

        Ok(Self {
            tools: def.tools,
            categories: def.categories,
        })
    }

    /// Load the catalog compiled into the crate
    pub fn builtin(logger: &SharedLogger) -> CatalogResult<Self> {
        Self::new(CatalogDefinition::builtin()?, logger)
    }

    /// Load a YAML or JSON catalog file
    pub fn from_path(path: impl AsRef<Path>, options: LoadOptions, logger: &SharedLogger) -> CatalogResult<Self> {
        let path = path.as_ref();
        crate::log_debug!(logger, "[CatalogRegistry] Reading catalog from {}", path.display());
        Self::with_options(CatalogDefinition::from_path(path)?, options, logger)
    }

    /// Load whichever catalog the settings point at
    pub fn from_settings(settings: &CatalogSettings, logger: &SharedLogger) -> CatalogResult<Self> {
        let options = LoadOptions { strict: settings.strict };
        match &settings.source {
            CatalogSource::Builtin => Self::with_options(CatalogDefinition::builtin()?, options, logger),
            CatalogSource::File(path) => Self::from_path(path, options, logger),
        }
    }

    /// All tools in definition order
    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    /// All categories in definition order
    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn find_tool_by_id(&self, id: &str) -> Option<&ToolRecord> {
        if id.is_empty() {
            return None;
        }
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn find_category_by_id(&self, id: &str) -> Option<&CategoryRecord> {
        if id.is_empty() {
            return None;
        }
        self.categories.iter().find(|c| c.id == id)
    }

    /// Like [`find_tool_by_id`](Self::find_tool_by_id) but as an error
    pub fn get_tool(&self, id: &str) -> CatalogResult<&ToolRecord> {
        self.find_tool_by_id(id).ok_or_else(|| CatalogError::tool_not_found(id))
    }

    /// Category a tool belongs to, if it exists
    pub fn category_of(&self, tool: &ToolRecord) -> Option<&CategoryRecord> {
        self.find_category_by_id(&tool.category)
    }

    /// Tools of one category, in definition order
    pub fn tools_in_category(&self, category_id: &str) -> Vec<&ToolRecord> {
        self.tools.iter().filter(|t| t.category == category_id).collect()
    }

    /// Each category with its tool count, in definition order
    pub fn category_counts(&self) -> Vec<(&CategoryRecord, usize)> {
        self.categories
            .iter()
            .map(|c| (c, self.tools.iter().filter(|t| t.category == c.id).count()))
            .collect()
    }

    /// Filter and sort tools; see [`filter_tools`]
    pub fn filter(&self, query: &ToolQuery) -> Vec<&ToolRecord> {
        filter_tools(self, query)
    }

    /// Re-run the data-integrity checks on the loaded records
    pub fn validate(&self) -> ValidationReport {
        validate_definitions(&self.to_definition())
    }

    /// Copy the records back into their serializable form
    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition::new(self.categories.clone(), self.tools.clone())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
