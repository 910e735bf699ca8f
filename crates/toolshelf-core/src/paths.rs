//! Tool route resolution
//!
//! Canonical tool routes have the shape `/tools/<categoryId>/<toolId>`.
//! When the tool or its category cannot be found the resolver still returns
//! a link, `/tools/<toolId>`, so navigation never fails; it may point at a
//! route that does not exist.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::CatalogRegistry;
use crate::error::{CatalogError, CatalogResult};
use crate::logging::SharedLogger;
use crate::types::ToolRecord;

/// Route derived from a category and tool id
pub fn derived_path(category_id: &str, tool_id: &str) -> String {
    format!("/tools/{}/{}", category_id, tool_id)
}

/// Degraded route used when a tool or its category is missing
pub fn fallback_path(tool_id: &str) -> String {
    format!("/tools/{}", tool_id)
}

/// A tool whose stored path disagrees with its derived one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInconsistency {
    pub tool_id: String,
    pub stored: String,
    pub derived: String,
}

/// Resolves tool ids to navigable routes
#[derive(Clone)]
pub struct PathResolver {
    registry: Arc<CatalogRegistry>,
    logger: SharedLogger,
}

impl PathResolver {
    pub fn new(registry: Arc<CatalogRegistry>, logger: SharedLogger) -> Self {
        Self { registry, logger }
    }

    /// Derive the canonical route, reporting which lookup failed
    pub fn try_resolve_path(&self, tool_id: &str) -> CatalogResult<String> {
        let tool = self
            .registry
            .find_tool_by_id(tool_id)
            .ok_or_else(|| CatalogError::tool_not_found(tool_id))?;
        let category = self
            .registry
            .find_category_by_id(&tool.category)
            .ok_or_else(|| CatalogError::category_not_found(&tool.category))?;
        Ok(derived_path(&category.id, &tool.id))
    }

    /// Derive the canonical route, degrading to `/tools/<toolId>`
    pub fn resolve_path(&self, tool_id: &str) -> String {
        match self.try_resolve_path(tool_id) {
            Ok(path) => path,
            Err(e) => {
                crate::log_warn!(self.logger, "[PathResolver] {} - using fallback route", e);
                fallback_path(tool_id)
            }
        }
    }

    /// Route to link a tool page with
    ///
    /// The stored path is authoritative display data; records without one
    /// get the derived route.
    pub fn tool_path(&self, tool: &ToolRecord) -> String {
        match tool.stored_path() {
            Some(stored) => stored.to_string(),
            None => self.resolve_path(&tool.id),
        }
    }

    /// Every tool whose stored path differs from the derived route
    ///
    /// Tools with a missing category are compared against the fallback route.
    pub fn check_consistency(&self) -> Vec<PathInconsistency> {
        self.registry
            .tools()
            .iter()
            .filter_map(|tool| {
                let stored = tool.stored_path()?;
                let derived = self
                    .try_resolve_path(&tool.id)
                    .unwrap_or_else(|_| fallback_path(&tool.id));
                (stored != derived).then(|| PathInconsistency {
                    tool_id: tool.id.clone(),
                    stored: stored.to_string(),
                    derived,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver")
            .field("tools", &self.registry.len())
            .finish()
    }
}
