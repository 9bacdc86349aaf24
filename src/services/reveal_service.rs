//! Scroll-triggered reveal controller
//!
//! One `IntersectionObserver` instance watches every card in the mounted
//! list; targets are looked up by their `data-story-id` attribute. Cards
//! reveal once they cross the intersection threshold, with a stagger delay
//! proportional to their position in the visible set. A revealed card is
//! only re-hidden when it leaves the viewport while the user is scrolling
//! up; scrolling down past it never hides it again, which keeps fast
//! downward scrolling flicker-free.
//!
//! Rebinding: whenever the visible set changes, every previous observation
//! is released before the new node set is observed, so no node ever carries
//! two observations and nothing leaks across filter changes.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::scroll_service::ScrollDirection;

/// Fraction of a card that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset of the observation box, so cards reveal slightly before
/// they are fully in frame.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -20% 0px";

/// Per-card delay increment for the cascade.
pub const REVEAL_STAGGER_MS: u32 = 50;

const REVEALED_CLASS: &str = "is-revealed";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealed,
}

/// The reveal state machine. Intersection always reveals; loss of
/// intersection only hides when the last known scroll direction is up.
pub fn next_phase(
    current: RevealPhase,
    is_intersecting: bool,
    direction: ScrollDirection,
) -> RevealPhase {
    if is_intersecting {
        return RevealPhase::Revealed;
    }
    match (current, direction) {
        (RevealPhase::Revealed, ScrollDirection::Up) => RevealPhase::Hidden,
        (phase, _) => phase,
    }
}

/// Transition delay for the card at `position` in the visible set.
pub fn stagger_delay_ms(position: usize) -> u32 {
    position as u32 * REVEAL_STAGGER_MS
}

pub struct RevealController {
    observer: web_sys::IntersectionObserver,
    observed: Rc<RefCell<Vec<web_sys::Element>>>,
    // Keeps the observer callback alive for the controller's lifetime.
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealController {
    /// Builds the controller and its single observer. `direction` is the
    /// globally tracked scroll direction; the callback reads it on every
    /// intersection change.
    pub fn new(direction: RwSignal<ScrollDirection>) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Ok(target) = entry.target().dyn_into::<web_sys::HtmlElement>() else {
                        continue;
                    };
                    apply_phase(
                        &target,
                        entry.is_intersecting(),
                        direction.get_untracked(),
                    );
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(Self {
            observer,
            observed: Rc::new(RefCell::new(Vec::new())),
            _callback: callback,
        })
    }

    /// Observes the cards for `ids`, in visible-set order. Previous
    /// observations are always released first; ids without a mounted node
    /// are skipped.
    pub fn bind(&self, ids: &[u32]) {
        self.release_all();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let mut observed = self.observed.borrow_mut();
        for (position, id) in ids.iter().enumerate() {
            let selector = format!("[data-story-id='{id}']");
            let Ok(Some(element)) = document.query_selector(&selector) else {
                continue;
            };
            let _ = element.set_attribute("data-reveal-index", &position.to_string());
            self.observer.observe(&element);
            observed.push(element);
        }
    }

    /// Releases every active observation.
    pub fn release_all(&self) {
        let mut observed = self.observed.borrow_mut();
        for element in observed.iter() {
            self.observer.unobserve(element);
        }
        observed.clear();
    }

    /// Number of currently bound observations.
    pub fn active_observations(&self) -> usize {
        self.observed.borrow().len()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply_phase(target: &web_sys::HtmlElement, is_intersecting: bool, direction: ScrollDirection) {
    let class_list = target.class_list();
    let current = if class_list.contains(REVEALED_CLASS) {
        RevealPhase::Revealed
    } else {
        RevealPhase::Hidden
    };

    match next_phase(current, is_intersecting, direction) {
        RevealPhase::Revealed => {
            let position = target
                .get_attribute("data-reveal-index")
                .and_then(|raw| raw.parse::<usize>().ok())
                .unwrap_or(0);
            let delay = format!("{}ms", stagger_delay_ms(position));
            let _ = target.style().set_property("transition-delay", &delay);
            let _ = class_list.add_1(REVEALED_CLASS);
        }
        RevealPhase::Hidden => {
            let _ = class_list.remove_1(REVEALED_CLASS);
        }
    }
}

/// One-shot reveals for section headings and panels: each matched element
/// gets `is-viewed` the first time it intersects and is then released. The
/// observer disconnects itself once every target has fired.
pub fn bind_one_shot_reveals(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    let remaining = Rc::new(RefCell::new(nodes.length()));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("is-viewed");
                observer.unobserve(&target);

                let mut left = remaining.borrow_mut();
                *left = left.saturating_sub(1);
                if *left == 0 {
                    observer.disconnect();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    observer.observe(&element);
                }
            }
        }
    }

    // The observer disconnects itself after the last target fires.
    callback.forget();
}
