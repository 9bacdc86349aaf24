//! Lightbox state
//!
//! One modal session over a snapshot of the filtered gallery. The snapshot
//! is taken when the modal opens and frozen until it closes, so filter
//! changes underneath never shift the carousel. All index motion clamps to
//! the snapshot bounds; nothing in here can panic from a bad request.

use leptos::prelude::*;

use crate::catalog::StoryRecord;

#[derive(Clone, Copy)]
pub struct LightboxState {
    pub is_open: RwSignal<bool>,
    /// Snapshot of the visible set at open time. Not live-updated.
    pub items: RwSignal<Vec<StoryRecord>>,
    pub current_index: RwSignal<usize>,
}

impl LightboxState {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            items: RwSignal::new(Vec::new()),
            current_index: RwSignal::new(0),
        }
    }

    /// Opens the modal on `clicked_index` into `visible_set`.
    ///
    /// An empty set or an out-of-range index is ignored: the modal stays
    /// closed and the previous snapshot is untouched. Returns whether the
    /// modal actually opened.
    pub fn open(&self, visible_set: Vec<StoryRecord>, clicked_index: usize) -> bool {
        if visible_set.is_empty() || clicked_index >= visible_set.len() {
            return false;
        }
        self.items.set(visible_set);
        self.current_index.set(clicked_index);
        self.is_open.set(true);
        true
    }

    /// Closes the modal and releases the snapshot. The next `open` starts
    /// from a fresh snapshot.
    pub fn close(&self) {
        self.is_open.set(false);
        self.items.set(Vec::new());
        self.current_index.set(0);
    }

    /// Steps forward, clamping at the last item.
    pub fn next(&self) {
        let len = self.items.with_untracked(Vec::len);
        if len == 0 {
            return;
        }
        self.current_index.update(|i| *i = (*i + 1).min(len - 1));
    }

    /// Steps backward, clamping at the first item.
    pub fn previous(&self) {
        self.current_index.update(|i| *i = i.saturating_sub(1));
    }

    /// Jumps to `index`, clamped into the snapshot bounds. Out-of-range
    /// requests (including negative ones) clamp rather than error.
    pub fn go_to(&self, index: isize) {
        let len = self.items.with_untracked(Vec::len);
        if len == 0 {
            return;
        }
        let clamped = index.clamp(0, len as isize - 1) as usize;
        self.current_index.set(clamped);
    }
}

impl Default for LightboxState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::gallery_stories;
    use crate::services::filter_service::compute_visible_set;
    use crate::catalog::ALL_CATEGORIES;

    fn snapshot(n: usize) -> Vec<StoryRecord> {
        gallery_stories().into_iter().take(n).collect()
    }

    // ========================================================================
    // open guards
    // ========================================================================

    #[test]
    fn test_open_with_empty_set_is_a_no_op() {
        let state = LightboxState::new();
        assert!(!state.open(Vec::new(), 0));
        assert!(!state.is_open.get_untracked());
        assert!(state.items.get_untracked().is_empty());
    }

    #[test]
    fn test_open_with_out_of_range_index_is_a_no_op() {
        let state = LightboxState::new();
        assert!(!state.open(snapshot(3), 3));
        assert!(!state.is_open.get_untracked());
    }

    #[test]
    fn test_open_sets_exact_index() {
        let state = LightboxState::new();
        assert!(state.open(snapshot(5), 2));
        assert!(state.is_open.get_untracked());
        assert_eq!(state.current_index.get_untracked(), 2);
        assert_eq!(state.items.get_untracked().len(), 5);
    }

    #[test]
    fn test_open_on_last_valid_index() {
        let state = LightboxState::new();
        assert!(state.open(snapshot(4), 3));
        assert_eq!(state.current_index.get_untracked(), 3);
    }

    // ========================================================================
    // navigation clamping
    // ========================================================================

    #[test]
    fn test_next_clamps_at_end() {
        let state = LightboxState::new();
        state.open(snapshot(3), 2);
        state.next();
        assert_eq!(state.current_index.get_untracked(), 2);
    }

    #[test]
    fn test_previous_clamps_at_start() {
        let state = LightboxState::new();
        state.open(snapshot(3), 0);
        state.previous();
        assert_eq!(state.current_index.get_untracked(), 0);
    }

    #[test]
    fn test_next_then_previous_round_trip() {
        let state = LightboxState::new();
        state.open(snapshot(3), 1);
        state.next();
        assert_eq!(state.current_index.get_untracked(), 2);
        state.previous();
        assert_eq!(state.current_index.get_untracked(), 1);
    }

    #[test]
    fn test_go_to_clamps_above() {
        let state = LightboxState::new();
        state.open(snapshot(3), 0);
        state.go_to(99);
        assert_eq!(state.current_index.get_untracked(), 2);
    }

    #[test]
    fn test_go_to_clamps_negative() {
        let state = LightboxState::new();
        state.open(snapshot(3), 2);
        state.go_to(-5);
        assert_eq!(state.current_index.get_untracked(), 0);
    }

    #[test]
    fn test_go_to_in_range() {
        let state = LightboxState::new();
        state.open(snapshot(5), 0);
        state.go_to(3);
        assert_eq!(state.current_index.get_untracked(), 3);
    }

    #[test]
    fn test_navigation_on_closed_modal_does_not_panic() {
        let state = LightboxState::new();
        state.next();
        state.previous();
        state.go_to(7);
        assert_eq!(state.current_index.get_untracked(), 0);
    }

    // ========================================================================
    // snapshot isolation
    // ========================================================================

    #[test]
    fn test_snapshot_frozen_while_open() {
        let catalog = gallery_stories();
        let state = LightboxState::new();

        let visible = compute_visible_set(&catalog, "", ALL_CATEGORIES);
        state.open(visible, 4);
        assert_eq!(state.items.get_untracked().len(), 9);

        // The filter narrows after the modal opened; the snapshot must not
        // follow it.
        let narrowed = compute_visible_set(&catalog, "games", ALL_CATEGORIES);
        assert_eq!(narrowed.len(), 2);
        assert_eq!(state.items.get_untracked().len(), 9);
        assert_eq!(state.current_index.get_untracked(), 4);
    }

    #[test]
    fn test_reopen_takes_fresh_snapshot() {
        let state = LightboxState::new();
        state.open(snapshot(9), 4);
        state.close();
        assert!(!state.is_open.get_untracked());
        assert!(state.items.get_untracked().is_empty());

        state.open(snapshot(2), 1);
        assert_eq!(state.items.get_untracked().len(), 2);
        assert_eq!(state.current_index.get_untracked(), 1);
    }
}
