// Linkfolio - core/filter.rs
//
// Discovery filter for the combined profile feed.
// Search text and category are AND-combined.
// Core layer: pure logic, no I/O or platform dependencies.

use crate::core::model::{Category, ProfileRecord};

/// Complete discovery query state. Both fields are AND-combined when
/// applied.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryQuery {
    /// Substring search against name and domain (case-insensitive).
    /// Empty = no text filter. Not trimmed; whitespace is significant.
    pub search_text: String,

    /// Selected category. `All` = no category filter.
    pub category: Category,
}

impl DiscoveryQuery {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.category == Category::All
    }

    /// Query for a single category with no search text.
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Query for a text search across all categories.
    pub fn for_search(search_text: &str) -> Self {
        Self {
            search_text: search_text.to_string(),
            ..Default::default()
        }
    }
}

/// Apply a query to a slice of profiles, returning indices of matches.
///
/// Returns a Vec of indices into the original slice, in input order, with
/// no deduplication (ids are unique by construction). This avoids copying
/// records and is what a virtualised list consumes.
pub fn apply_filter(profiles: &[ProfileRecord], query: &DiscoveryQuery) -> Vec<usize> {
    if query.is_empty() {
        return (0..profiles.len()).collect();
    }

    let search_lower = query.search_text.to_lowercase();

    profiles
        .iter()
        .enumerate()
        .filter(|(_, profile)| matches(profile, &search_lower, query.category))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single profile matches both halves of the query.
fn matches(profile: &ProfileRecord, search_lower: &str, category: Category) -> bool {
    let domain_lower = profile.domain.to_lowercase();

    // Text search: name or domain, case-insensitive substring
    if !search_lower.is_empty()
        && !profile.name.to_lowercase().contains(search_lower)
        && !domain_lower.contains(search_lower)
    {
        return false;
    }

    category_matches(category, &domain_lower)
}

/// Category heuristic against a lowercased domain.
///
/// A category matches when the domain contains its literal id. `Logic`
/// additionally matches domains containing "edit" and `Visual` domains
/// containing "design"; `Focus` and `Web` have no alias.
fn category_matches(category: Category, domain_lower: &str) -> bool {
    match category {
        Category::All => true,
        Category::Logic => domain_lower.contains("logic") || domain_lower.contains("edit"),
        Category::Visual => domain_lower.contains("visual") || domain_lower.contains("design"),
        Category::Focus => domain_lower.contains("focus"),
        Category::Web => domain_lower.contains("web"),
    }
}
