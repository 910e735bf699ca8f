//! Node.js bindings for Toolshelf via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::str::FromStr;
use std::sync::Arc;

use toolshelf_core::catalog::{CatalogIssue as CoreCatalogIssue, LoadOptions, Severity as CoreSeverity};
use toolshelf_core::config::{
    layered_settings,
    CatalogSource as CoreCatalogSource,
    ConfigLevel as CoreConfigLevel,
    ConfigProvider as CoreConfigProvider,
    FileConfigProvider as CoreFileConfigProvider,
    Settings as CoreSettings,
};
use toolshelf_core::logging::{ConsoleLogger, SharedLogger};
use toolshelf_core::profile::{
    Caller as CoreCaller,
    MemoryProfileService as CoreMemoryProfileService,
    ProfileService as CoreProfileService,
    UserProfile as CoreUserProfile,
};
use toolshelf_core::search::ToolQuery as CoreToolQuery;
use toolshelf_core::types::{
    Breadcrumb as CoreBreadcrumb,
    CategoryRecord as CoreCategoryRecord,
    SortBy as CoreSortBy,
    ToolRecord as CoreToolRecord,
};
use toolshelf_core::Catalog as CoreCatalog;

fn to_napi_error(e: impl std::fmt::Display) -> Error {
    Error::from_reason(e.to_string())
}

/// JS numbers above u32 saturate instead of wrapping
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn default_logger() -> SharedLogger {
    Arc::new(ConsoleLogger::new())
}

// ============================================================================
// Catalog Types
// ============================================================================

#[napi(object)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[napi(object)]
pub struct Testimonial {
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub rating: Option<u32>,
}

#[napi(object)]
pub struct PerformanceMetric {
    pub label: String,
    pub value: String,
}

#[napi(object)]
pub struct ApiInfo {
    pub endpoint: Option<String>,
    pub method: Option<String>,
    pub description: String,
}

#[napi(object)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    /// Route to link the tool page with
    pub path: String,
    pub tags: Vec<String>,
    pub is_new: bool,
    pub faqs: Vec<Faq>,
    pub about_content: Option<String>,
    pub usability_steps: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub performance_metrics: Vec<PerformanceMetric>,
    pub api_info: Option<ApiInfo>,
}

impl Tool {
    fn from_record(tool: &CoreToolRecord, path: String) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            description: tool.description.clone(),
            category: tool.category.clone(),
            icon: tool.icon.clone(),
            path,
            tags: tool.tags.clone(),
            is_new: tool.is_new,
            faqs: tool
                .faqs
                .iter()
                .map(|f| Faq { question: f.question.clone(), answer: f.answer.clone() })
                .collect(),
            about_content: tool.about_content().map(str::to_string),
            usability_steps: tool.usability_steps.clone(),
            testimonials: tool
                .testimonials
                .iter()
                .map(|t| Testimonial {
                    author: t.author.clone(),
                    role: t.role.clone(),
                    quote: t.quote.clone(),
                    rating: t.rating.map(u32::from),
                })
                .collect(),
            performance_metrics: tool
                .performance_metrics
                .iter()
                .map(|m| PerformanceMetric { label: m.label.clone(), value: m.value.clone() })
                .collect(),
            api_info: tool.api_info().map(|info| ApiInfo {
                endpoint: info.endpoint.clone(),
                method: info.method.clone(),
                description: info.description.clone(),
            }),
        }
    }
}

#[napi(object)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub path: String,
}

impl From<&CoreCategoryRecord> for Category {
    fn from(category: &CoreCategoryRecord) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            display_name: category.display_name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            path: category.path(),
        }
    }
}

#[napi(object)]
pub struct Breadcrumb {
    pub label: String,
    /// Absent for the current page
    pub path: Option<String>,
}

impl From<CoreBreadcrumb> for Breadcrumb {
    fn from(crumb: CoreBreadcrumb) -> Self {
        Self { label: crumb.label, path: crumb.path }
    }
}

/// Filter and sort options for `Catalog.filter`
#[napi(object)]
pub struct ToolQuery {
    pub search: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    /// One of "name-asc", "name-desc", "popular", "recent"
    pub sort_by: Option<String>,
}

impl TryFrom<ToolQuery> for CoreToolQuery {
    type Error = Error;

    fn try_from(query: ToolQuery) -> Result<Self> {
        let mut core = CoreToolQuery::new()
            .categories(query.categories.unwrap_or_default())
            .tags(query.tags.unwrap_or_default());
        if let Some(search) = query.search {
            core = core.search(search);
        }
        if let Some(sort_by) = query.sort_by {
            core = core.sort_by(CoreSortBy::from_str(&sort_by).map_err(to_napi_error)?);
        }
        Ok(core)
    }
}

#[napi(object)]
pub struct ResolvedIcon {
    pub name: String,
    pub is_fallback: bool,
}

#[napi(string_enum)]
pub enum Severity {
    Error,
    Warning,
}

impl From<CoreSeverity> for Severity {
    fn from(severity: CoreSeverity) -> Self {
        match severity {
            CoreSeverity::Error => Severity::Error,
            CoreSeverity::Warning => Severity::Warning,
        }
    }
}

#[napi(object)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub message: String,
}

impl From<&CoreCatalogIssue> for CatalogIssue {
    fn from(issue: &CoreCatalogIssue) -> Self {
        Self { severity: issue.severity().into(), message: issue.to_string() }
    }
}

#[napi(object)]
pub struct ValidationReport {
    /// No error-severity issues
    pub ok: bool,
    pub issues: Vec<CatalogIssue>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only tool catalog with routing, listing and navigation helpers
#[napi]
pub struct Catalog {
    inner: Arc<CoreCatalog>,
}

#[napi]
impl Catalog {
    /// The catalog shipped with the library
    #[napi(factory)]
    pub fn builtin() -> Result<Self> {
        let catalog = CoreCatalog::builtin(default_logger()).map_err(to_napi_error)?;
        Ok(Self { inner: Arc::new(catalog) })
    }

    /// Load a `.yaml`, `.yml` or `.json` catalog file
    #[napi(factory)]
    pub fn from_file(path: String, strict: Option<bool>) -> Result<Self> {
        let options = LoadOptions { strict: strict.unwrap_or(true) };
        let catalog = CoreCatalog::from_path(path, options, default_logger()).map_err(to_napi_error)?;
        Ok(Self { inner: Arc::new(catalog) })
    }

    /// Load the catalog named by the user config, with an optional workspace layered on top
    #[napi(factory)]
    pub fn from_settings(workspace_root: Option<String>) -> Result<Self> {
        let user = CoreFileConfigProvider::user();
        let workspace = workspace_root.map(CoreFileConfigProvider::workspace);
        let settings = layered_settings(&user, workspace.as_ref()).map_err(to_napi_error)?;
        let catalog = CoreCatalog::from_settings(&settings, default_logger()).map_err(to_napi_error)?;
        Ok(Self { inner: Arc::new(catalog) })
    }

    #[napi(getter)]
    pub fn tools(&self) -> Vec<Tool> {
        self.inner.tools().iter().map(|t| self.tool(t)).collect()
    }

    #[napi(getter)]
    pub fn categories(&self) -> Vec<Category> {
        self.inner.categories().iter().map(Category::from).collect()
    }

    #[napi]
    pub fn find_tool(&self, id: String) -> Option<Tool> {
        self.inner.find_tool(&id).map(|t| self.tool(t))
    }

    #[napi]
    pub fn find_category(&self, id: String) -> Option<Category> {
        self.inner.find_category(&id).map(Category::from)
    }

    #[napi]
    pub fn tools_in_category(&self, category_id: String) -> Vec<Tool> {
        self.inner.tools_in_category(&category_id).into_iter().map(|t| self.tool(t)).collect()
    }

    /// Canonical route for a tool id; never throws
    #[napi]
    pub fn resolve_path(&self, tool_id: String) -> String {
        self.inner.resolve_path(&tool_id)
    }

    /// Stored route when the tool has one, else the canonical route
    #[napi]
    pub fn tool_path(&self, tool_id: String) -> String {
        match self.inner.find_tool(&tool_id) {
            Some(tool) => self.inner.tool_path(tool),
            None => self.inner.resolve_path(&tool_id),
        }
    }

    #[napi]
    pub fn filter(&self, query: Option<ToolQuery>) -> Result<Vec<Tool>> {
        let query = match query {
            Some(q) => CoreToolQuery::try_from(q)?,
            None => CoreToolQuery::new(),
        };
        Ok(self.inner.filter(&query).into_iter().map(|t| self.tool(t)).collect())
    }

    #[napi]
    pub fn related(&self, tool_id: String, limit: Option<u32>) -> Vec<Tool> {
        self.inner
            .related(&tool_id, limit.map(|l| l as usize))
            .into_iter()
            .map(|t| self.tool(t))
            .collect()
    }

    #[napi]
    pub fn breadcrumbs(&self, path: String) -> Vec<Breadcrumb> {
        self.inner.breadcrumbs(&path).into_iter().map(Breadcrumb::from).collect()
    }

    #[napi]
    pub fn validate(&self) -> ValidationReport {
        let report = self.inner.validate();
        ValidationReport {
            ok: report.is_ok(),
            issues: report.issues.iter().map(CatalogIssue::from).collect(),
        }
    }

    #[napi]
    pub fn resolve_icon(&self, name: String) -> ResolvedIcon {
        let icon = self.inner.resolve_icon(&name);
        ResolvedIcon { name: icon.name, is_fallback: icon.is_fallback }
    }
}

impl Catalog {
    fn tool(&self, tool: &CoreToolRecord) -> Tool {
        Tool::from_record(tool, self.inner.tool_path(tool))
    }
}

// ============================================================================
// Config Types
// ============================================================================

#[napi(string_enum)]
pub enum ConfigLevel {
    User,
    Workspace,
}

impl From<CoreConfigLevel> for ConfigLevel {
    fn from(level: CoreConfigLevel) -> Self {
        match level {
            CoreConfigLevel::User => ConfigLevel::User,
            CoreConfigLevel::Workspace => ConfigLevel::Workspace,
        }
    }
}

#[napi(object)]
pub struct Settings {
    /// "builtin" or a path to a catalog file
    pub catalog_source: String,
    pub strict: bool,
    pub default_sort: Option<String>,
    pub related_limit: u32,
}

impl From<CoreSettings> for Settings {
    fn from(settings: CoreSettings) -> Self {
        Self {
            catalog_source: settings.catalog.source.into(),
            strict: settings.catalog.strict,
            default_sort: settings.browse.default_sort.map(|s| s.to_string()),
            related_limit: saturating_u32(settings.browse.related_limit),
        }
    }
}

impl TryFrom<Settings> for CoreSettings {
    type Error = Error;

    fn try_from(settings: Settings) -> Result<Self> {
        let mut core = CoreSettings::default();
        core.catalog.source = CoreCatalogSource::from(settings.catalog_source);
        core.catalog.strict = settings.strict;
        core.browse.default_sort = settings
            .default_sort
            .map(|s| CoreSortBy::from_str(&s))
            .transpose()
            .map_err(to_napi_error)?;
        core.browse.related_limit = settings.related_limit as usize;
        Ok(core)
    }
}

/// File-based configuration provider (YAML)
#[napi]
pub struct FileConfigProvider {
    inner: Arc<CoreFileConfigProvider>,
}

#[napi]
impl FileConfigProvider {
    #[napi(factory)]
    pub fn user() -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::user()) }
    }

    #[napi(factory)]
    pub fn workspace(workspace_root: String) -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::workspace(workspace_root)) }
    }

    #[napi(getter)]
    pub fn path(&self) -> String {
        self.inner.path().to_string_lossy().to_string()
    }

    #[napi(getter)]
    pub fn level(&self) -> ConfigLevel {
        self.inner.level().into()
    }

    #[napi]
    pub fn exists(&self) -> bool {
        self.inner.exists()
    }

    #[napi]
    pub fn get_settings(&self) -> Result<Settings> {
        self.inner.settings()
            .map(Settings::from)
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn save_settings(&self, settings: Settings) -> Result<()> {
        let settings = CoreSettings::try_from(settings)?;
        self.inner.save_settings(&settings)
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn reload(&self) -> Result<()> {
        self.inner.reload()
            .map_err(to_napi_error)?;
        Ok(())
    }

    #[napi]
    pub fn backup(&self) -> Result<Option<String>> {
        let backup_path = self.inner.backup()
            .map_err(to_napi_error)?;
        Ok(backup_path.map(|p| p.to_string_lossy().to_string()))
    }

    #[napi]
    pub fn export_json(&self) -> Result<String> {
        self.inner.export_json()
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn import_json(&self, json: String) -> Result<()> {
        self.inner.import_json(&json)
            .map_err(to_napi_error)
    }
}

// ============================================================================
// Profile Types
// ============================================================================

#[napi(string_enum)]
pub enum Role {
    User,
    Admin,
}

/// Identity making a profile request; no id means anonymous
#[napi(object)]
pub struct Caller {
    pub id: Option<String>,
    pub role: Option<Role>,
}

impl From<Caller> for CoreCaller {
    fn from(caller: Caller) -> Self {
        match (caller.id, caller.role) {
            (None, _) => CoreCaller::Anonymous,
            (Some(id), Some(Role::Admin)) => CoreCaller::admin(id),
            (Some(id), _) => CoreCaller::user(id),
        }
    }
}

#[napi(object)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub credits: i64,
}

impl From<CoreUserProfile> for UserProfile {
    fn from(profile: CoreUserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            display_name: profile.display_name,
            email: profile.email,
            credits: i64::try_from(profile.credits).unwrap_or(i64::MAX),
        }
    }
}

impl From<UserProfile> for CoreUserProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            display_name: profile.display_name,
            email: profile.email,
            credits: u64::try_from(profile.credits).unwrap_or(0),
        }
    }
}

#[napi(object)]
pub struct ToolUsage {
    pub tool_id: String,
    pub count: i64,
}

// ============================================================================
// ProfileStore
// ============================================================================

/// In-memory profile, credit and usage store
#[napi]
pub struct ProfileStore {
    inner: Arc<CoreMemoryProfileService>,
}

#[napi]
impl ProfileStore {
    #[napi(constructor)]
    pub fn new(starting_credits: Option<u32>) -> Self {
        let service = CoreMemoryProfileService::with_starting_credits(u64::from(starting_credits.unwrap_or(0)));
        Self { inner: Arc::new(service) }
    }

    #[napi]
    pub async fn get_caller_profile(&self, caller: Caller) -> Result<Option<UserProfile>> {
        let profile = self.inner.get_caller_profile(&caller.into()).await
            .map_err(to_napi_error)?;
        Ok(profile.map(UserProfile::from))
    }

    #[napi]
    pub async fn save_caller_profile(&self, caller: Caller, profile: UserProfile) -> Result<()> {
        self.inner.save_caller_profile(&caller.into(), profile.into()).await
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn get_user_profile(&self, caller: Caller, user_id: String) -> Result<Option<UserProfile>> {
        let profile = self.inner.get_user_profile(&caller.into(), &user_id).await
            .map_err(to_napi_error)?;
        Ok(profile.map(UserProfile::from))
    }

    /// Returns false when the balance is too low
    #[napi]
    pub async fn consume_credits(&self, caller: Caller, amount: u32) -> Result<bool> {
        self.inner.consume_credits(&caller.into(), u64::from(amount)).await
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn grant_credits(&self, caller: Caller, user_id: String, amount: u32) -> Result<i64> {
        let balance = self.inner.grant_credits(&caller.into(), &user_id, u64::from(amount)).await
            .map_err(to_napi_error)?;
        Ok(i64::try_from(balance).unwrap_or(i64::MAX))
    }

    #[napi]
    pub async fn record_tool_usage(&self, caller: Caller, user_id: String, tool_id: String) -> Result<()> {
        self.inner.record_tool_usage(&caller.into(), &user_id, &tool_id).await
            .map_err(to_napi_error)
    }

    #[napi]
    pub async fn tool_usage(&self, caller: Caller, user_id: String) -> Result<Vec<ToolUsage>> {
        let usage = self.inner.tool_usage(&caller.into(), &user_id).await
            .map_err(to_napi_error)?;
        Ok(usage
            .into_iter()
            .map(|u| ToolUsage { tool_id: u.tool_id, count: i64::try_from(u.count).unwrap_or(i64::MAX) })
            .collect())
    }

    #[napi]
    pub fn len(&self) -> u32 {
        saturating_u32(self.inner.len())
    }

    #[napi]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
