//! Pull-to-refresh
//!
//! Mobile-only: a downward drag that starts with the page at the very top
//! follows the finger (with resistance) and reloads once it passes the
//! threshold. Desktop viewports never see it. The gesture math is separate
//! from the DOM glue so it can be tested directly.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Drag distance (after resistance) that triggers a reload.
pub const PULL_THRESHOLD_PX: f64 = 80.0;

/// Maximum distance the indicator follows the finger.
pub const MAX_PULL_PX: f64 = 150.0;

/// Finger movement is divided by this before it moves the indicator.
pub const PULL_RESISTANCE: f64 = 2.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PullPhase {
    /// Not pulling, or pulling upward.
    Idle,
    /// Mid-drag, below the trigger threshold.
    Pulling(f64),
    /// Past the threshold; releasing reloads.
    Triggered(f64),
}

/// Gesture state for a touch that started at `start_y` and is now at
/// `current_y`, given the gesture began with the page scrolled to the top.
pub fn pull_phase(start_y: f64, current_y: f64) -> PullPhase {
    let distance = (current_y - start_y) / PULL_RESISTANCE;
    if distance <= 0.0 {
        PullPhase::Idle
    } else if distance < PULL_THRESHOLD_PX {
        PullPhase::Pulling(distance.min(MAX_PULL_PX))
    } else {
        PullPhase::Triggered(distance.min(MAX_PULL_PX))
    }
}

fn is_touch_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(max-width: 768px)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn first_touch_y(evt: &web_sys::TouchEvent) -> Option<f64> {
    evt.touches().item(0).map(|touch| f64::from(touch.client_y()))
}

#[component]
pub fn PullToRefresh() -> impl IntoView {
    // Distance the indicator currently follows the finger; None when idle.
    let pull_distance = RwSignal::new(Option::<f64>::None);
    let refreshing = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Start y of the active gesture; None when no eligible gesture.
        let start_y = RwSignal::new(Option::<f64>::None);

        let handle_touchstart = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            let at_top = web_sys::window()
                .map(|w| w.scroll_y().unwrap_or(0.0) <= 0.0)
                .unwrap_or(false);
            if at_top && is_touch_viewport() {
                start_y.set(first_touch_y(&evt));
            } else {
                start_y.set(None);
            }
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);

        let handle_touchmove = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            let Some(start) = start_y.get_untracked() else {
                return;
            };
            let Some(current) = first_touch_y(&evt) else {
                return;
            };
            match pull_phase(start, current) {
                PullPhase::Idle => pull_distance.set(None),
                PullPhase::Pulling(distance) | PullPhase::Triggered(distance) => {
                    pull_distance.set(Some(distance));
                }
            }
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);

        let handle_touchend = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            let Some(start) = start_y.get_untracked() else {
                return;
            };
            let released = evt
                .changed_touches()
                .item(0)
                .map(|touch| f64::from(touch.client_y()));
            start_y.set(None);

            let Some(current) = released else {
                pull_distance.set(None);
                return;
            };
            if let PullPhase::Triggered(_) = pull_phase(start, current) {
                refreshing.set(true);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            } else {
                pull_distance.set(None);
            }
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);

        let _ = document.add_event_listener_with_callback(
            "touchstart",
            handle_touchstart.as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "touchmove",
            handle_touchmove.as_ref().unchecked_ref(),
        );
        let _ = document.add_event_listener_with_callback(
            "touchend",
            handle_touchend.as_ref().unchecked_ref(),
        );

        // Keep the closures alive
        handle_touchstart.forget();
        handle_touchmove.forget();
        handle_touchend.forget();
    });

    let indicator_style = move || {
        pull_distance
            .get()
            .map(|distance| format!("transform: translateY({}px)", distance - 48.0))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || pull_distance.get().is_some()>
            <div class="pull-indicator" style=indicator_style>
                <div class="flex items-center space-x-2 bg-white/90 rounded-full px-4 py-2 shadow">
                    {move || {
                        if refreshing.get() {
                            view! {
                                <>
                                    <div class="w-5 h-5 border-2 border-sky-500 border-t-transparent rounded-full animate-spin"></div>
                                    <span class="text-sm text-slate-700">"Refreshing..."</span>
                                </>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="text-sm text-slate-700">
                                    "Pull down to refresh"
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward_drag_is_idle() {
        assert_eq!(pull_phase(200.0, 150.0), PullPhase::Idle);
        assert_eq!(pull_phase(200.0, 200.0), PullPhase::Idle);
    }

    #[test]
    fn test_short_drag_is_pulling() {
        // 100px of finger travel becomes 50px after resistance.
        match pull_phase(100.0, 200.0) {
            PullPhase::Pulling(distance) => assert!((distance - 50.0).abs() < 1e-9),
            other => panic!("expected Pulling, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_drag_triggers() {
        // 160px of travel is exactly the 80px threshold after resistance.
        assert!(matches!(
            pull_phase(0.0, PULL_THRESHOLD_PX * PULL_RESISTANCE),
            PullPhase::Triggered(_)
        ));
    }

    #[test]
    fn test_pull_distance_is_capped() {
        match pull_phase(0.0, 10_000.0) {
            PullPhase::Triggered(distance) => assert!((distance - MAX_PULL_PX).abs() < 1e-9),
            other => panic!("expected Triggered, got {:?}", other),
        }
    }
}
