//! Data-integrity checks over a catalog definition

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use super::definition::CatalogDefinition;
use crate::error::CatalogError;
use crate::icons::is_known_icon;
use crate::paths::derived_path;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The catalog must not be loaded
    Error,
    /// The catalog loads; the affected lookups degrade
    Warning,
}

/// A single finding from [`validate_definitions`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogIssue {
    EmptyToolId { index: usize },
    EmptyCategoryId { index: usize },
    /// Categories of every occurrence, in definition order
    DuplicateToolId { id: String, categories: Vec<String> },
    DuplicateCategoryId { id: String },
    DanglingCategory { tool_id: String, category: String },
    PathMismatch { tool_id: String, stored: String, derived: String },
    UnknownIcon { owner: String, icon: String },
}

impl CatalogIssue {
    pub fn severity(&self) -> Severity {
        match self {
            CatalogIssue::EmptyToolId { .. }
            | CatalogIssue::EmptyCategoryId { .. }
            | CatalogIssue::DuplicateToolId { .. }
            | CatalogIssue::DuplicateCategoryId { .. } => Severity::Error,
            CatalogIssue::DanglingCategory { .. }
            | CatalogIssue::PathMismatch { .. }
            | CatalogIssue::UnknownIcon { .. } => Severity::Warning,
        }
    }

    /// The error this issue maps to when it blocks loading
    ///
    /// Dangling categories only block loading in strict mode, so they map
    /// to an error here too; the caller decides whether to apply it.
    pub fn to_error(&self) -> Option<CatalogError> {
        match self {
            CatalogIssue::EmptyToolId { index } => Some(CatalogError::EmptyId { kind: "tool", index: *index }),
            CatalogIssue::EmptyCategoryId { index } => Some(CatalogError::EmptyId { kind: "category", index: *index }),
            CatalogIssue::DuplicateToolId { id, categories } => Some(CatalogError::DuplicateToolId {
                id: id.clone(),
                categories: categories.clone(),
            }),
            CatalogIssue::DuplicateCategoryId { id } => Some(CatalogError::DuplicateCategoryId(id.clone())),
            CatalogIssue::DanglingCategory { tool_id, category } => Some(CatalogError::DanglingCategory {
                tool_id: tool_id.clone(),
                category: category.clone(),
            }),
            CatalogIssue::PathMismatch { .. } | CatalogIssue::UnknownIcon { .. } => None,
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::EmptyToolId { index } => write!(f, "tool #{} has an empty id", index),
            CatalogIssue::EmptyCategoryId { index } => write!(f, "category #{} has an empty id", index),
            CatalogIssue::DuplicateToolId { id, categories } => {
                write!(f, "tool id '{}' is defined {} times (categories: {})", id, categories.len(), categories.join(", "))
            }
            CatalogIssue::DuplicateCategoryId { id } => write!(f, "category id '{}' is defined more than once", id),
            CatalogIssue::DanglingCategory { tool_id, category } => {
                write!(f, "tool '{}' references unknown category '{}'", tool_id, category)
            }
            CatalogIssue::PathMismatch { tool_id, stored, derived } => {
                write!(f, "tool '{}' stores path '{}' but resolves to '{}'", tool_id, stored, derived)
            }
            CatalogIssue::UnknownIcon { owner, icon } => write!(f, "'{}' uses unknown icon '{}'", owner, icon),
        }
    }
}

/// All issues found in a definition, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<CatalogIssue>,
}

impl ValidationReport {
    /// True when nothing blocks loading
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// True when there are no issues at all
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Warning)
    }
}

/// Check a definition without loading it
///
/// Reports empty ids, duplicate tool and category ids, tools whose category
/// does not exist, stored paths that disagree with the derived route, and
/// unknown icon names.
pub fn validate_definitions(def: &CatalogDefinition) -> ValidationReport {
    let mut issues = Vec::new();

    let mut category_ids = HashSet::new();
    let mut reported_categories = HashSet::new();
    for (index, category) in def.categories.iter().enumerate() {
        if category.id.is_empty() {
            issues.push(CatalogIssue::EmptyCategoryId { index });
            continue;
        }
        if !category_ids.insert(category.id.as_str()) && reported_categories.insert(category.id.as_str()) {
            issues.push(CatalogIssue::DuplicateCategoryId { id: category.id.clone() });
        }
        if !is_known_icon(&category.icon) {
            issues.push(CatalogIssue::UnknownIcon {
                owner: format!("category:{}", category.id),
                icon: category.icon.clone(),
            });
        }
    }

    // id -> categories of every occurrence; order of first appearance kept separately
    let mut occurrences: HashMap<&str, Vec<String>> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for (index, tool) in def.tools.iter().enumerate() {
        if tool.id.is_empty() {
            issues.push(CatalogIssue::EmptyToolId { index });
            continue;
        }

        let entry = occurrences.entry(tool.id.as_str()).or_default();
        if entry.is_empty() {
            first_seen.push(tool.id.as_str());
        }
        entry.push(tool.category.clone());

        if !category_ids.contains(tool.category.as_str()) {
            issues.push(CatalogIssue::DanglingCategory {
                tool_id: tool.id.clone(),
                category: tool.category.clone(),
            });
        } else if let Some(stored) = tool.stored_path() {
            let derived = derived_path(&tool.category, &tool.id);
            if stored != derived {
                issues.push(CatalogIssue::PathMismatch {
                    tool_id: tool.id.clone(),
                    stored: stored.to_string(),
                    derived,
                });
            }
        }

        if !is_known_icon(&tool.icon) {
            issues.push(CatalogIssue::UnknownIcon {
                owner: tool.id.clone(),
                icon: tool.icon.clone(),
            });
        }
    }

    for id in first_seen {
        if let Some(categories) = occurrences.remove(id) {
            if categories.len() > 1 {
                issues.push(CatalogIssue::DuplicateToolId {
                    id: id.to_string(),
                    categories,
                });
            }
        }
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryRecord, ToolRecord};

    fn categories() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new("seo-tools", "SEO Tools", "SEO Tools").with_icon("Search"),
            CategoryRecord::new("text-tools", "Text Tools", "Text Tools").with_icon("Type"),
        ]
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let def = CatalogDefinition::builtin().unwrap();
        let report = validate_definitions(&def);
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn test_duplicate_tool_id_is_reported_with_both_categories() {
        let def = CatalogDefinition::new(
            categories(),
            vec![
                ToolRecord::new("keyword-density", "Keyword Density", "SEO", "seo-tools").with_icon("BarChart"),
                ToolRecord::new("word-counter", "Word Counter", "Count", "text-tools").with_icon("FileText"),
                ToolRecord::new("keyword-density", "Keyword Density", "Text", "text-tools").with_icon("BarChart"),
            ],
        );

        let report = validate_definitions(&def);
        assert!(!report.is_ok());
        let errors: Vec<_> = report.errors().cloned().collect();
        assert_eq!(
            errors,
            vec![CatalogIssue::DuplicateToolId {
                id: "keyword-density".to_string(),
                categories: vec!["seo-tools".to_string(), "text-tools".to_string()],
            }]
        );
    }

    #[test]
    fn test_dangling_category_is_a_warning() {
        let def = CatalogDefinition::new(
            categories(),
            vec![ToolRecord::new("orphan", "Orphan", "No home", "missing").with_icon("Hash")],
        );

        let report = validate_definitions(&def);
        assert!(report.is_ok());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity(), Severity::Warning);
        assert!(matches!(warnings[0].to_error(), Some(CatalogError::DanglingCategory { .. })));
    }

    #[test]
    fn test_path_mismatch_and_unknown_icon() {
        let def = CatalogDefinition::new(
            categories(),
            vec![ToolRecord::new("slug-generator", "Slug Generator", "Slugs", "seo-tools")
                .with_icon("Snail")
                .with_path("/tools/text-tools/slug-generator")],
        );

        let report = validate_definitions(&def);
        assert!(report.is_ok());
        assert!(report.issues.contains(&CatalogIssue::PathMismatch {
            tool_id: "slug-generator".to_string(),
            stored: "/tools/text-tools/slug-generator".to_string(),
            derived: "/tools/seo-tools/slug-generator".to_string(),
        }));
        assert!(report.issues.contains(&CatalogIssue::UnknownIcon {
            owner: "slug-generator".to_string(),
            icon: "Snail".to_string(),
        }));
    }

    #[test]
    fn test_empty_and_duplicate_category_ids() {
        let mut cats = categories();
        cats.push(CategoryRecord::new("", "Nameless", "Nameless").with_icon("Hash"));
        cats.push(CategoryRecord::new("seo-tools", "SEO again", "SEO again").with_icon("Search"));
        cats.push(CategoryRecord::new("seo-tools", "SEO thrice", "SEO thrice").with_icon("Search"));

        let report = validate_definitions(&CatalogDefinition::new(cats, vec![]));
        let errors: Vec<_> = report.errors().cloned().collect();
        assert_eq!(
            errors,
            vec![
                CatalogIssue::EmptyCategoryId { index: 2 },
                CatalogIssue::DuplicateCategoryId { id: "seo-tools".to_string() },
            ]
        );
    }
}
