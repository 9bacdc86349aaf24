//! Scroll state and scroll helpers
//!
//! Owns the window scroll listener: tracks the last known scroll direction
//! (the reveal controller's re-hide guard reads it) and whether the page has
//! scrolled past the navbar elevation threshold. Also hosts the animated
//! scroll-to-top used by the footer and the route-change scroll reset.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll offset past which the navbar gains its elevated styling.
pub const NAVBAR_ELEVATION_OFFSET: f64 = 20.0;

/// Duration of the animated scroll-to-top, in milliseconds.
const SCROLL_TOP_DURATION_MS: f64 = 800.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

/// Classifies a scroll movement. A zero delta keeps the previous direction
/// so jitter-free scroll stops don't flip the guard.
pub fn direction_from_delta(previous: ScrollDirection, delta: f64) -> ScrollDirection {
    if delta < 0.0 {
        ScrollDirection::Up
    } else if delta > 0.0 {
        ScrollDirection::Down
    } else {
        previous
    }
}

/// Quadratic ease-in-out over elapsed time `t` of duration `d`, from start
/// value `b` across distance `c`.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[derive(Clone, Copy)]
pub struct ScrollState {
    pub direction: RwSignal<ScrollDirection>,
    /// True once the page has scrolled past the navbar threshold.
    pub scrolled: RwSignal<bool>,
    last_y: RwSignal<f64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            direction: RwSignal::new(ScrollDirection::default()),
            scrolled: RwSignal::new(false),
            last_y: RwSignal::new(0.0),
        }
    }

    /// Feeds a new scroll offset into the tracker.
    pub fn observe_offset(&self, y: f64) {
        let previous = self.last_y.get_untracked();
        let direction = direction_from_delta(self.direction.get_untracked(), y - previous);
        self.direction.set(direction);
        self.scrolled.set(y > NAVBAR_ELEVATION_OFFSET);
        self.last_y.set(y);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the global scroll state and its window listener. Called once
/// from the app shell; the listener lives for the whole session.
pub fn provide_scroll_state() {
    let state = ScrollState::new();
    provide_context(state);

    // The browser restores scroll positions on its own schedule, which
    // fights the route-change reset below.
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }

        let handle_scroll = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                let y = window.scroll_y().unwrap_or(0.0);
                state.observe_offset(y);
            }
        }) as Box<dyn FnMut()>);

        let _ = window
            .add_event_listener_with_callback("scroll", handle_scroll.as_ref().unchecked_ref());

        // Keep the closure alive
        handle_scroll.forget();
    }
}

pub fn use_scroll_state() -> ScrollState {
    expect_context::<ScrollState>()
}

/// Jumps straight to the top of the page, without animation. Used on every
/// route change so a new page never inherits the previous scroll offset.
pub fn reset_scroll() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                root.set_scroll_top(0);
            }
        }
    }
}

/// Animates the window back to the top with quadratic easing, driven by
/// `requestAnimationFrame`.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let start_y = window.scroll_y().unwrap_or(0.0);
    if start_y <= 0.0 {
        return;
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first_frame = Rc::clone(&frame);
    let start_time: Rc<RefCell<Option<f64>>> = Rc::new(RefCell::new(None));

    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let started = *start_time.borrow_mut().get_or_insert(now);
        let elapsed = now - started;
        let position = ease_in_out_quad(elapsed, start_y, -start_y, SCROLL_TOP_DURATION_MS);

        if let Some(window) = web_sys::window() {
            if elapsed < SCROLL_TOP_DURATION_MS {
                window.scroll_to_with_x_and_y(0.0, position.max(0.0));
                if let Some(callback) = frame.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            } else {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                // Last frame: drop the closure by clearing the slot.
                frame.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let borrowed = first_frame.borrow();
    if let Some(callback) = borrowed.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Smooth-scrolls just past the hero fold.
pub fn scroll_past_fold() {
    if let Some(window) = web_sys::window() {
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(viewport - 80.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // direction_from_delta
    // ========================================================================

    #[test]
    fn test_negative_delta_is_up() {
        assert_eq!(
            direction_from_delta(ScrollDirection::Down, -12.0),
            ScrollDirection::Up
        );
    }

    #[test]
    fn test_positive_delta_is_down() {
        assert_eq!(
            direction_from_delta(ScrollDirection::Up, 3.0),
            ScrollDirection::Down
        );
    }

    #[test]
    fn test_zero_delta_keeps_previous_direction() {
        assert_eq!(
            direction_from_delta(ScrollDirection::Up, 0.0),
            ScrollDirection::Up
        );
        assert_eq!(
            direction_from_delta(ScrollDirection::Down, 0.0),
            ScrollDirection::Down
        );
    }

    // ========================================================================
    // ScrollState tracking
    // ========================================================================

    #[test]
    fn test_observe_offset_tracks_direction() {
        let state = ScrollState::new();
        state.observe_offset(100.0);
        assert_eq!(state.direction.get_untracked(), ScrollDirection::Down);
        state.observe_offset(40.0);
        assert_eq!(state.direction.get_untracked(), ScrollDirection::Up);
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let state = ScrollState::new();
        state.observe_offset(NAVBAR_ELEVATION_OFFSET);
        assert!(!state.scrolled.get_untracked());
        state.observe_offset(NAVBAR_ELEVATION_OFFSET + 1.0);
        assert!(state.scrolled.get_untracked());
        state.observe_offset(0.0);
        assert!(!state.scrolled.get_untracked());
    }

    // ========================================================================
    // ease_in_out_quad
    // ========================================================================

    #[test]
    fn test_easing_endpoints() {
        let eased_start = ease_in_out_quad(0.0, 500.0, -500.0, 800.0);
        let eased_end = ease_in_out_quad(800.0, 500.0, -500.0, 800.0);
        assert!((eased_start - 500.0).abs() < 1e-9);
        assert!(eased_end.abs() < 1e-9);
    }

    #[test]
    fn test_easing_midpoint_is_halfway() {
        let eased = ease_in_out_quad(400.0, 500.0, -500.0, 800.0);
        assert!((eased - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_easing_is_monotonic_downwards() {
        let mut previous = f64::MAX;
        for step in 0..=80 {
            let t = f64::from(step) * 10.0;
            let eased = ease_in_out_quad(t, 500.0, -500.0, 800.0);
            assert!(eased <= previous + 1e-9);
            previous = eased;
        }
    }
}
