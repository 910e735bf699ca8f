//! Catalog search: free-text, category and tag filters plus listing order

mod filter;
mod sort;

pub use filter::{filter_tools, ToolFilter, ToolQuery};
pub use sort::{locale_cmp, sort_tools};
