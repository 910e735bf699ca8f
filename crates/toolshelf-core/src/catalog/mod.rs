//! Tool catalog: definitions, validation and the read-only registry
//!
//! ```text
//! catalog.yaml / catalog.json / built-in
//!            │
//!            ▼
//!   CatalogDefinition ──► validate_definitions ──► ValidationReport
//!            │
//!            ▼
//!   CatalogRegistry (Arc, read-only)
//!            │
//!   ┌────────┼──────────────┬───────────────┐
//!   ▼        ▼              ▼               ▼
//! paths   search         related      breadcrumbs
//! ```

mod definition;
mod registry;
mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use definition::{CatalogDefinition, CatalogFormat};
pub use registry::{CatalogRegistry, LoadOptions};
pub use validation::{validate_definitions, CatalogIssue, Severity, ValidationReport};
