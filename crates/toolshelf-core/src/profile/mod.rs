//! User profiles, credits and tool usage
//!
//! The backing store is an external collaborator; `MemoryProfileService`
//! stands in for it in tests and local runs.

mod traits;
mod memory;

pub use traits::{Caller, ProfileError, ProfileResult, ProfileService, Role, ToolUsage, UserProfile};
pub use memory::MemoryProfileService;
