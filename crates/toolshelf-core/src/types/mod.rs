//! Core catalog types
//!
//! Shared record and value types used across the registry, search,
//! routing and breadcrumb modules.

mod tool;
mod category;
mod sort;
mod breadcrumb;

pub use tool::{ToolRecord, Faq, Testimonial, PerformanceMetric, ApiInfo};
pub use category::CategoryRecord;
pub use sort::{SortBy, UnknownSortKey};
pub use breadcrumb::Breadcrumb;
