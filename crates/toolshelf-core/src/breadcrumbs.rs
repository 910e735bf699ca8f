//! Breadcrumb derivation from route shapes
//!
//! | route                         | trail                                         |
//! |-------------------------------|-----------------------------------------------|
//! | `/`                           | (none)                                        |
//! | `/category/<id>`              | category                                      |
//! | `/tools/<category>/<tool>`    | category → `/category/<id>`, tool             |
//! | `/dashboard`                  | Dashboard                                     |
//! | `/admin[/<page>]`             | Admin → `/admin`, page                        |
//! | anything else                 | one entry per segment, linked cumulatively    |
//!
//! Ids that don't resolve drop their entry instead of failing.

use crate::catalog::CatalogRegistry;
use crate::types::Breadcrumb;

/// Navigation trail for a route
pub fn breadcrumbs_for(registry: &CatalogRegistry, path: &str) -> Vec<Breadcrumb> {
    let path = strip_query(path.trim());
    if path.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Vec::new(),
        ["category", category_id] => registry
            .find_category_by_id(category_id)
            .map(|c| Breadcrumb::current(&c.display_name))
            .into_iter()
            .collect(),
        ["tools", category_id, tool_id] => {
            let mut trail = Vec::with_capacity(2);
            if let Some(category) = registry.find_category_by_id(category_id) {
                trail.push(Breadcrumb::link(&category.display_name, category.path()));
            }
            if let Some(tool) = registry.find_tool_by_id(tool_id) {
                trail.push(Breadcrumb::current(&tool.name));
            }
            trail
        }
        ["dashboard"] => vec![Breadcrumb::current("Dashboard")],
        ["admin"] => vec![Breadcrumb::link("Admin", "/admin")],
        ["admin", page] => vec![Breadcrumb::link("Admin", "/admin"), Breadcrumb::current(title_case(page))],
        _ => generic_trail(&segments),
    }
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn generic_trail(segments: &[&str]) -> Vec<Breadcrumb> {
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let label = title_case(segment);
            if i == last {
                Breadcrumb::current(label)
            } else {
                Breadcrumb::link(label, format!("/{}", segments[..=i].join("/")))
            }
        })
        .collect()
}

/// `"usage-reports"` → `"Usage Reports"`
pub fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
