//! Breadcrumb entry type

use serde::{Deserialize, Serialize};

/// One step of a navigation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Link target; `None` for the current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Breadcrumb {
    /// A linked entry
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    /// An unlinked entry (the current page)
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.path.is_some()
    }
}
