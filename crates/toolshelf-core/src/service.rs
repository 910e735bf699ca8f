//! Catalog facade used by routing, listings and navigation

use std::path::Path;
use std::sync::Arc;

use crate::breadcrumbs::breadcrumbs_for;
use crate::catalog::{CatalogRegistry, LoadOptions, ValidationReport};
use crate::config::{BrowseSettings, ConfigProvider, Settings};
use crate::error::CatalogResult;
use crate::icons::{resolve_icon, ResolvedIcon};
use crate::logging::SharedLogger;
use crate::paths::{PathInconsistency, PathResolver};
use crate::related::related_to;
use crate::search::{filter_tools, ToolQuery};
use crate::types::{Breadcrumb, CategoryRecord, ToolRecord};

/// A loaded catalog together with the browse defaults applied to it
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone)]
pub struct Catalog {
    registry: Arc<CatalogRegistry>,
    resolver: PathResolver,
    browse: BrowseSettings,
    logger: SharedLogger,
}

impl Catalog {
    pub fn new(registry: CatalogRegistry, logger: SharedLogger) -> Self {
        let registry = Arc::new(registry);
        Self {
            resolver: PathResolver::new(registry.clone(), logger.clone()),
            registry,
            browse: BrowseSettings::default(),
            logger,
        }
    }

    pub fn with_browse_settings(mut self, browse: BrowseSettings) -> Self {
        self.browse = browse;
        self
    }

    /// The catalog compiled into the crate
    pub fn builtin(logger: SharedLogger) -> CatalogResult<Self> {
        let registry = CatalogRegistry::builtin(&logger)?;
        Ok(Self::new(registry, logger))
    }

    pub fn from_path(path: impl AsRef<Path>, options: LoadOptions, logger: SharedLogger) -> CatalogResult<Self> {
        let registry = CatalogRegistry::from_path(path, options, &logger)?;
        Ok(Self::new(registry, logger))
    }

    /// Load the catalog the settings name and apply their browse defaults
    pub fn from_settings(settings: &Settings, logger: SharedLogger) -> CatalogResult<Self> {
        let registry = CatalogRegistry::from_settings(&settings.catalog, &logger)?;
        Ok(Self::new(registry, logger).with_browse_settings(settings.browse.clone()))
    }

    /// Load using whatever settings the provider currently holds
    pub fn from_provider(provider: &dyn ConfigProvider, logger: SharedLogger) -> CatalogResult<Self> {
        let settings = provider.settings()?;
        Self::from_settings(&settings, logger)
    }

    pub fn registry(&self) -> &Arc<CatalogRegistry> {
        &self.registry
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn browse_settings(&self) -> &BrowseSettings {
        &self.browse
    }

    pub fn tools(&self) -> &[ToolRecord] {
        self.registry.tools()
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        self.registry.categories()
    }

    pub fn find_tool(&self, id: &str) -> Option<&ToolRecord> {
        self.registry.find_tool_by_id(id)
    }

    pub fn find_category(&self, id: &str) -> Option<&CategoryRecord> {
        self.registry.find_category_by_id(id)
    }

    pub fn tools_in_category(&self, category_id: &str) -> Vec<&ToolRecord> {
        self.registry.tools_in_category(category_id)
    }

    pub fn resolve_path(&self, tool_id: &str) -> String {
        self.resolver.resolve_path(tool_id)
    }

    pub fn tool_path(&self, tool: &ToolRecord) -> String {
        self.resolver.tool_path(tool)
    }

    pub fn check_paths(&self) -> Vec<PathInconsistency> {
        self.resolver.check_consistency()
    }

    /// Filter and sort, using the configured default order when the query has none
    pub fn filter(&self, query: &ToolQuery) -> Vec<&ToolRecord> {
        match (query.sort_by, self.browse.default_sort) {
            (None, Some(default_sort)) => {
                let query = query.clone().sort_by(default_sort);
                filter_tools(&self.registry, &query)
            }
            _ => filter_tools(&self.registry, query),
        }
    }

    /// Tools related to `tool_id`; `None` uses the configured limit
    ///
    /// An unknown id yields nothing.
    pub fn related(&self, tool_id: &str, limit: Option<usize>) -> Vec<&ToolRecord> {
        let limit = limit.unwrap_or(self.browse.related_limit);
        match self.registry.find_tool_by_id(tool_id) {
            Some(tool) => related_to(tool, &self.registry, limit),
            None => {
                crate::log_debug!(self.logger, "[Catalog] No related tools for unknown id '{}'", tool_id);
                Vec::new()
            }
        }
    }

    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        breadcrumbs_for(&self.registry, path)
    }

    pub fn validate(&self) -> ValidationReport {
        self.registry.validate()
    }

    pub fn resolve_icon(&self, name: &str) -> ResolvedIcon {
        resolve_icon(name, &self.logger)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("tools", &self.registry.len())
            .field("categories", &self.registry.categories().len())
            .field("browse", &self.browse)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::config::MemoryConfigProvider;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use crate::types::SortBy;

    fn catalog() -> Catalog {
        Catalog::new(fixtures::registry(), Arc::new(NoOpLogger::new()))
    }

    fn ids(tools: &[&ToolRecord]) -> Vec<String> {
        tools.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin(Arc::new(NoOpLogger::new())).unwrap();
        assert!(!catalog.tools().is_empty());
        assert!(catalog.find_category("calculators").is_some());
        assert_eq!(
            catalog.resolve_path("bmi-calculator"),
            "/tools/calculators/bmi-calculator"
        );
        assert!(catalog.check_paths().is_empty());
    }

    #[test]
    fn test_from_provider_applies_browse_settings() {
        let mut settings = Settings::default();
        settings.browse.related_limit = 1;
        settings.browse.default_sort = Some(SortBy::Recent);
        let provider = MemoryConfigProvider::with_settings(settings);

        let catalog = Catalog::from_provider(&provider, Arc::new(NoOpLogger::new())).unwrap();
        assert_eq!(catalog.browse_settings().related_limit, 1);
        assert_eq!(ids(&catalog.related("bmi-calculator", None)), vec!["calorie-calculator"]);
        assert!(catalog.filter(&ToolQuery::new())[0].is_new);
    }

    #[test]
    fn test_filter_applies_default_sort_only_without_explicit_sort() {
        let catalog = catalog().with_browse_settings(BrowseSettings {
            default_sort: Some(SortBy::NameDesc),
            related_limit: 4,
        });
        let query = ToolQuery::new().categories(["calculators"]);

        assert_eq!(
            ids(&catalog.filter(&query)),
            vec!["percentage-calculator", "calorie-calculator", "bmi-calculator"]
        );
        assert_eq!(
            ids(&catalog.filter(&query.sort_by(SortBy::NameAsc))),
            vec!["bmi-calculator", "calorie-calculator", "percentage-calculator"]
        );
    }

    #[test]
    fn test_filter_without_any_sort_keeps_definition_order() {
        let catalog = catalog();
        let all = catalog.filter(&ToolQuery::new().search(""));
        assert_eq!(all.len(), catalog.tools().len());
        assert_eq!(all[0].id, "percentage-calculator");
    }

    #[test]
    fn test_related_uses_configured_limit() {
        let catalog = catalog().with_browse_settings(BrowseSettings {
            default_sort: None,
            related_limit: 2,
        });

        assert_eq!(
            ids(&catalog.related("bmi-calculator", None)),
            vec!["calorie-calculator", "percentage-calculator"]
        );
        assert_eq!(ids(&catalog.related("bmi-calculator", Some(1))), vec!["calorie-calculator"]);
        assert!(catalog.related("no-such-tool", Some(3)).is_empty());
    }

    #[test]
    fn test_breadcrumbs_and_icons() {
        let logger = Arc::new(MemoryLogger::new());
        let catalog = Catalog::new(fixtures::registry(), logger.clone());

        let trail = catalog.breadcrumbs("/category/calculators");
        assert_eq!(trail, vec![Breadcrumb::current("Handy Calculators")]);

        let icon = catalog.resolve_icon("Unicorn");
        assert!(icon.is_fallback);
        assert_eq!(logger.messages(LogLevel::Warn).len(), 1);
    }
}
