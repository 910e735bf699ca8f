//! Toolshelf Core
//!
//! Catalog, routing and metadata layer for a utility-tools site.
//! This crate has no UI or runtime dependencies and can be used from any
//! environment (Node.js via napi-rs, a native CLI, a server, etc.)
//!
//! ## Catalog
//!
//! A [`CatalogRegistry`] is loaded once from the built-in definitions or a
//! YAML/JSON file and shared read-only. [`Catalog`] bundles it with the
//! resolvers the UI needs:
//!
//! ```rust
//! use std::sync::Arc;
//! use toolshelf_core::{Catalog, NoOpLogger, SortBy, ToolQuery};
//!
//! let catalog = Catalog::builtin(Arc::new(NoOpLogger::new())).unwrap();
//!
//! // Routing
//! assert_eq!(catalog.resolve_path("bmi-calculator"), "/tools/calculators/bmi-calculator");
//!
//! // Listings
//! let health = catalog.filter(&ToolQuery::new().tags(["health"]).sort_by(SortBy::NameAsc));
//! assert!(!health.is_empty());
//!
//! // Related tools and navigation
//! let related = catalog.related("bmi-calculator", Some(3));
//! assert!(related.iter().all(|t| t.id != "bmi-calculator"));
//! let trail = catalog.breadcrumbs("/tools/calculators/bmi-calculator");
//! assert_eq!(trail.len(), 2);
//! ```

pub mod types;
pub mod error;
pub mod logging;
pub mod config;
pub mod catalog;
pub mod paths;
pub mod search;
pub mod related;
pub mod breadcrumbs;
pub mod icons;
pub mod profile;
pub mod service;

// Re-export commonly used types
pub use types::{
    ToolRecord, CategoryRecord, Breadcrumb, SortBy,
    Faq, Testimonial, PerformanceMetric, ApiInfo,
};

pub use error::{CatalogError, CatalogResult};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{ConfigProvider, MemoryConfigProvider, FileConfigProvider, Settings};

pub use catalog::{
    CatalogDefinition, CatalogRegistry, LoadOptions,
    validate_definitions, ValidationReport, CatalogIssue, Severity,
};

pub use paths::PathResolver;
pub use search::{ToolFilter, ToolQuery, filter_tools};
pub use related::related_to;
pub use breadcrumbs::breadcrumbs_for;
pub use icons::{resolve_icon, ResolvedIcon, FALLBACK_ICON};

pub use profile::{ProfileService, MemoryProfileService, Caller, UserProfile, ProfileError};

pub use service::Catalog;
