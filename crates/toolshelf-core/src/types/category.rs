//! Category record type

use serde::{Deserialize, Serialize};

/// A named grouping of tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Unique id, also used as a URL segment
    pub id: String,
    pub name: String,
    /// Label used in navigation (breadcrumbs, headings)
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl CategoryRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            icon: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Route of the category listing page
    pub fn path(&self) -> String {
        format!("/category/{}", self.id)
    }
}
