//! Tool filtering

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::sort::sort_tools;
use crate::catalog::CatalogRegistry;
use crate::types::{SortBy, ToolRecord};

/// Predicates applied to every tool; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFilter {
    /// Case-insensitive substring of the name, description or a tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Keep tools in any of these categories
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub categories: HashSet<String>,
    /// Keep tools carrying at least one of these tags
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub tags: HashSet<String>,
}

impl ToolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Lowercased search needle, `None` when blank
    ///
    /// Surrounding whitespace is part of the needle.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Check if a tool passes every predicate
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        if let Some(needle) = self.needle() {
            if !matches_search(tool, &needle) {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&tool.category) {
            return false;
        }

        if !self.tags.is_empty() && !tool.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }

        true
    }
}

fn matches_search(tool: &ToolRecord, needle: &str) -> bool {
    tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
        || tool.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// A filter plus an optional ordering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolQuery {
    #[serde(flatten)]
    pub filter: ToolFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl ToolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.filter = self.filter.with_search(search);
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = self.filter.with_categories(categories);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = self.filter.with_tags(tags);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Filter the registry, then sort when the query names an order
///
/// Without a sort key the result keeps definition order.
pub fn filter_tools<'a>(registry: &'a CatalogRegistry, query: &ToolQuery) -> Vec<&'a ToolRecord> {
    let mut tools: Vec<&ToolRecord> = registry
        .tools()
        .iter()
        .filter(|t| query.filter.matches(t))
        .collect();

    if let Some(sort_by) = query.sort_by {
        sort_tools(&mut tools, sort_by);
    }

    tools
}
