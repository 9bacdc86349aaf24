//! Gallery filter state
//!
//! Two independent criteria narrow the catalog: a free-text search term and
//! an active category chip. The visible set is a pure function of both and
//! is recomputed synchronously whenever either signal changes; views derive
//! it through a `Memo` so the grid never sees a half-updated state.

use leptos::prelude::*;

use crate::catalog::{StoryRecord, ALL_CATEGORIES};

/// The mutable filter criteria, owned by the gallery view.
#[derive(Clone, Copy)]
pub struct FilterState {
    pub search_term: RwSignal<String>,
    pub active_category: RwSignal<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search_term: RwSignal::new(String::new()),
            active_category: RwSignal::new(ALL_CATEGORIES.to_string()),
        }
    }

    pub fn set_search(&self, term: String) {
        self.search_term.set(term);
    }

    pub fn set_category(&self, category: &str) {
        self.active_category.set(category.to_string());
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the visible subset of `catalog` for the given criteria.
///
/// Category matching is exact; the `all` sentinel bypasses it. Text matching
/// is a case-insensitive substring check over title and description; the
/// empty term matches everything. Both predicates must hold. Catalog order
/// is preserved and the function has no side effects, so repeated calls with
/// identical inputs return identical sequences.
pub fn compute_visible_set(
    catalog: &[StoryRecord],
    search_term: &str,
    active_category: &str,
) -> Vec<StoryRecord> {
    let needle = search_term.to_lowercase();

    catalog
        .iter()
        .filter(|story| {
            let matches_category =
                active_category == ALL_CATEGORIES || story.category == active_category;

            let matches_search = needle.is_empty()
                || story.title.to_lowercase().contains(&needle)
                || story.description.to_lowercase().contains(&needle);

            matches_category && matches_search
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::gallery_stories;

    fn record(id: u32, title: &str, description: &str, category: &str) -> StoryRecord {
        StoryRecord {
            id,
            image: format!("/images/{id}.webp"),
            title: title.to_string(),
            description: description.to_string(),
            date: None,
            category: category.to_string(),
        }
    }

    // ========================================================================
    // compute_visible_set: predicate correctness
    // ========================================================================

    #[test]
    fn test_all_category_and_empty_term_return_everything() {
        let catalog = gallery_stories();
        let visible = compute_visible_set(&catalog, "", ALL_CATEGORIES);
        assert_eq!(visible, catalog);
    }

    #[test]
    fn test_unmatched_category_returns_empty() {
        let catalog = gallery_stories();
        let visible = compute_visible_set(&catalog, "", "workshop");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let catalog = gallery_stories();
        let visible = compute_visible_set(&catalog, "GAMES", ALL_CATEGORIES);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|s| s.title == "Games"));
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = vec![
            record(1, "Alpha", "An evening of lightning talks", "event"),
            record(2, "Beta", "Workshop wrap-up", "event"),
        ];
        let visible = compute_visible_set(&catalog, "lightning", ALL_CATEGORIES);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let catalog = vec![record(1, "Alpha", "", "event")];
        assert!(compute_visible_set(&catalog, "", "Event").is_empty());
        assert_eq!(compute_visible_set(&catalog, "", "event").len(), 1);
    }

    #[test]
    fn test_predicates_are_anded() {
        let catalog = vec![
            record(1, "Games", "", "event"),
            record(2, "Games", "", "workshop"),
        ];
        let visible = compute_visible_set(&catalog, "games", "workshop");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = gallery_stories();
        let visible = compute_visible_set(&catalog, "zzz-no-such-story", ALL_CATEGORIES);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let visible = compute_visible_set(&[], "anything", ALL_CATEGORIES);
        assert!(visible.is_empty());
    }

    // ========================================================================
    // compute_visible_set: ordering, idempotence, narrowing
    // ========================================================================

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = gallery_stories();
        let visible = compute_visible_set(&catalog, "", "event");
        let ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "filtering must not reorder the catalog");
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let catalog = gallery_stories();
        let first = compute_visible_set(&catalog, "games", "event");
        let second = compute_visible_set(&catalog, "games", "event");
        assert_eq!(first, second);
    }

    #[test]
    fn test_longer_term_narrows_to_subsequence() {
        let catalog = gallery_stories();
        let broad = compute_visible_set(&catalog, "o", ALL_CATEGORIES);
        let narrow = compute_visible_set(&catalog, "or", ALL_CATEGORIES);

        // Every narrow hit appears in the broad result, in the same order.
        let broad_ids: Vec<u32> = broad.iter().map(|s| s.id).collect();
        let mut cursor = 0;
        for story in &narrow {
            let pos = broad_ids[cursor..]
                .iter()
                .position(|id| *id == story.id)
                .expect("narrowed result must be a subsequence of the broad one");
            cursor += pos + 1;
        }
    }

    // ========================================================================
    // FilterState defaults
    // ========================================================================

    #[test]
    fn test_filter_state_defaults() {
        let state = FilterState::new();
        assert_eq!(state.search_term.get_untracked(), "");
        assert_eq!(state.active_category.get_untracked(), ALL_CATEGORIES);
    }

    #[test]
    fn test_filter_state_setters() {
        let state = FilterState::new();
        state.set_search("robotics".to_string());
        state.set_category("workshop");
        assert_eq!(state.search_term.get_untracked(), "robotics");
        assert_eq!(state.active_category.get_untracked(), "workshop");
    }
}
