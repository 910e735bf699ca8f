//! Related-tool scoring

use std::collections::HashSet;

use crate::catalog::CatalogRegistry;
use crate::types::ToolRecord;

/// Score for sharing the seed tool's category
pub const CATEGORY_WEIGHT: u32 = 10;
/// Score per tag shared with the seed tool
pub const TAG_WEIGHT: u32 = 2;

/// How closely `candidate` relates to `seed`
pub fn relatedness_score(seed: &ToolRecord, candidate: &ToolRecord) -> u32 {
    let seed_tags: HashSet<&str> = seed.tags.iter().map(String::as_str).collect();
    score_against(seed, &seed_tags, candidate)
}

fn score_against(seed: &ToolRecord, seed_tags: &HashSet<&str>, candidate: &ToolRecord) -> u32 {
    let category = if candidate.category == seed.category { CATEGORY_WEIGHT } else { 0 };
    let shared = candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(seed_tags)
        .count();
    let shared = u32::try_from(shared).unwrap_or(u32::MAX);
    category.saturating_add(TAG_WEIGHT.saturating_mul(shared))
}

/// The `limit` tools most related to `tool`
///
/// The seed itself is never returned. Ties keep definition order, and the
/// result is padded with unrelated (score zero) tools when fewer than
/// `limit` share anything with the seed.
pub fn related_to<'a>(tool: &ToolRecord, registry: &'a CatalogRegistry, limit: usize) -> Vec<&'a ToolRecord> {
    let seed_tags: HashSet<&str> = tool.tags.iter().map(String::as_str).collect();

    let mut scored: Vec<(u32, &ToolRecord)> = registry
        .tools()
        .iter()
        .filter(|candidate| candidate.id != tool.id)
        .map(|candidate| (score_against(tool, &seed_tags, candidate), candidate))
        .collect();

    // sort_by is stable, so equal scores stay in definition order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().take(limit).map(|(_, t)| t).collect()
}
