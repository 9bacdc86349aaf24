//! Service Browser Tests
//!
//! Tests for the gallery state services in a real DOM: filter recompute
//! through a memo, lightbox session flow, notification queue behavior, and
//! reveal-observer bookkeeping across rebinds.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use techsoc_web::catalog::{gallery_stories, ALL_CATEGORIES};
use techsoc_web::services::filter_service::{compute_visible_set, FilterState};
use techsoc_web::services::lightbox_service::LightboxState;
use techsoc_web::services::notification_service::{NotificationState, ToastType};
use techsoc_web::services::reveal_service::RevealController;
use techsoc_web::services::scroll_service::{ScrollDirection, ScrollState};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Filter recompute through a memo
// ============================================================================

#[wasm_bindgen_test]
fn test_visible_set_recomputes_on_filter_change() {
    let filter = FilterState::new();
    let catalog = gallery_stories();
    let visible = Memo::new(move |_| {
        compute_visible_set(
            &catalog,
            &filter.search_term.get(),
            &filter.active_category.get(),
        )
    });

    assert_eq!(visible.get_untracked().len(), 9);

    filter.set_search("games".to_string());
    assert_eq!(visible.get_untracked().len(), 2);

    filter.set_category("workshop");
    assert!(visible.get_untracked().is_empty());

    filter.set_search(String::new());
    filter.set_category(ALL_CATEGORIES);
    assert_eq!(visible.get_untracked().len(), 9);
}

// ============================================================================
// Lightbox session flow
// ============================================================================

#[wasm_bindgen_test]
fn test_lightbox_session_flow() {
    let lightbox = LightboxState::new();
    let catalog = gallery_stories();

    let visible = compute_visible_set(&catalog, "", ALL_CATEGORIES);
    assert!(lightbox.open(visible, 3));
    assert!(lightbox.is_open.get_untracked());
    assert_eq!(lightbox.current_index.get_untracked(), 3);

    lightbox.next();
    assert_eq!(lightbox.current_index.get_untracked(), 4);

    lightbox.go_to(100);
    assert_eq!(lightbox.current_index.get_untracked(), 8);

    lightbox.close();
    assert!(!lightbox.is_open.get_untracked());
    assert!(lightbox.items.get_untracked().is_empty());
}

#[wasm_bindgen_test]
fn test_lightbox_snapshot_survives_filter_change() {
    let filter = FilterState::new();
    let lightbox = LightboxState::new();
    let catalog = gallery_stories();

    let snapshot = compute_visible_set(
        &catalog,
        &filter.search_term.get_untracked(),
        &filter.active_category.get_untracked(),
    );
    lightbox.open(snapshot, 0);

    filter.set_search("games".to_string());
    assert_eq!(lightbox.items.get_untracked().len(), 9);
}

// ============================================================================
// Notifications
// ============================================================================

#[wasm_bindgen_test]
fn test_notification_add_and_remove() {
    let state = NotificationState::new();
    assert!(state.notifications.get_untracked().is_empty());

    state.add(
        ToastType::Success,
        "Message sent!".to_string(),
        Some("We will get back to you soon.".to_string()),
    );
    let queued = state.notifications.get_untracked();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].toast_type, ToastType::Success);

    state.remove(queued[0].id);
    assert!(state.notifications.get_untracked().is_empty());
}

#[wasm_bindgen_test]
fn test_notification_ids_are_unique() {
    let state = NotificationState::new();
    state.add(ToastType::Info, "First".to_string(), None);
    state.add(ToastType::Info, "Second".to_string(), None);

    let queued = state.notifications.get_untracked();
    assert_eq!(queued.len(), 2);
    assert_ne!(queued[0].id, queued[1].id);
}

// ============================================================================
// Reveal observer bookkeeping
// ============================================================================

fn mount_card_stubs(ids: &[u32]) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    for id in ids {
        let element = document.create_element("div").unwrap();
        element
            .set_attribute("data-story-id", &id.to_string())
            .unwrap();
        body.append_child(&element).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_reveal_controller_tracks_bound_set() {
    mount_card_stubs(&[101, 102, 103]);

    let direction = RwSignal::new(ScrollDirection::Down);
    let controller = RevealController::new(direction).expect("observer should construct");

    controller.bind(&[101, 102, 103]);
    assert_eq!(controller.active_observations(), 3);

    // Rebinding to a narrower set must not leak the old observations.
    controller.bind(&[101]);
    assert_eq!(controller.active_observations(), 1);

    controller.release_all();
    assert_eq!(controller.active_observations(), 0);
}

#[wasm_bindgen_test]
fn test_reveal_controller_skips_missing_nodes() {
    mount_card_stubs(&[201]);

    let direction = RwSignal::new(ScrollDirection::Down);
    let controller = RevealController::new(direction).expect("observer should construct");

    // 999 has no mounted node; binding it is a no-op, not an error.
    controller.bind(&[201, 999]);
    assert_eq!(controller.active_observations(), 1);
}

// ============================================================================
// Scroll state
// ============================================================================

#[wasm_bindgen_test]
fn test_scroll_state_direction_tracking() {
    let state = ScrollState::new();
    state.observe_offset(250.0);
    assert_eq!(state.direction.get_untracked(), ScrollDirection::Down);
    assert!(state.scrolled.get_untracked());

    state.observe_offset(10.0);
    assert_eq!(state.direction.get_untracked(), ScrollDirection::Up);
    assert!(!state.scrolled.get_untracked());
}
