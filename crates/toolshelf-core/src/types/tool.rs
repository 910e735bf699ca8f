//! Tool record types

use serde::{Deserialize, Serialize};

/// A single question/answer pair shown on a tool page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A user quote displayed on a tool page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub quote: String,
    /// Star rating out of 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// A labelled performance figure ("Processing time", "< 50ms")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub label: String,
    pub value: String,
}

/// Programmatic access details for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ApiInfo {
    fn is_blank(&self) -> bool {
        self.endpoint.as_deref().map_or(true, str::is_empty) && self.description.trim().is_empty()
    }
}

/// A catalog entry for one tool
///
/// Records are built once when the catalog loads and never mutated. The
/// descriptive payloads (`faqs`, `about_content`, ...) carry no computational
/// role; an absent key and an empty value both mean "no content", which the
/// accessor methods normalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    /// Unique, stable identifier; also the last URL segment
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Id of the owning category
    pub category: String,
    /// Symbolic glyph name
    #[serde(default)]
    pub icon: String,
    /// Precomputed route, when the definition carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usability_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance_metrics: Vec<PerformanceMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_info: Option<ApiInfo>,
}

impl ToolRecord {
    /// Create a tool record with the required fields; everything else empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            icon: String::new(),
            path: None,
            tags: Vec::new(),
            is_new: false,
            faqs: Vec::new(),
            about_content: None,
            usability_steps: Vec::new(),
            testimonials: Vec::new(),
            performance_metrics: Vec::new(),
            api_info: None,
        }
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the stored path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Mark the tool as new
    pub fn new_badge(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// The stored route, ignoring blank values
    pub fn stored_path(&self) -> Option<&str> {
        self.path.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    /// Whether the tool carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// About text, if any
    pub fn about_content(&self) -> Option<&str> {
        self.about_content.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// API details, if any
    pub fn api_info(&self) -> Option<&ApiInfo> {
        self.api_info.as_ref().filter(|info| !info.is_blank())
    }

    /// Whether the page has an FAQ section
    pub fn has_faqs(&self) -> bool {
        !self.faqs.is_empty()
    }
}
