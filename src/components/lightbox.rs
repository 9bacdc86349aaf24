//! Lightbox carousel modal
//!
//! Renders the snapshot held by `LightboxState`. Navigation clamps at both
//! ends (no wraparound), and the controls disable there so the policy is
//! visible. Arrow keys step, Escape closes.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_LEFT, CARET_RIGHT, X};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::design_system::Modal;
use crate::services::lightbox_service::LightboxState;

#[component]
pub fn Lightbox(state: LightboxState) -> impl IntoView {
    // Keyboard navigation while the modal is open. The listener persists
    // for the session; `try_get_untracked` makes it inert once the owning
    // page has been torn down.
    Effect::new(move |_| {
        let handle_keydown = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let Some(true) = state.is_open.try_get_untracked() else {
                return;
            };
            match evt.key().as_str() {
                "Escape" => state.close(),
                "ArrowRight" => state.next(),
                "ArrowLeft" => state.previous(),
                _ => {}
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "keydown",
                handle_keydown.as_ref().unchecked_ref(),
            );
        }

        // Keep the closure alive
        handle_keydown.forget();
    });

    let at_start = move || state.current_index.get() == 0;
    let at_end = move || {
        let len = state.items.with(Vec::len);
        len == 0 || state.current_index.get() + 1 >= len
    };

    let current = move || {
        let index = state.current_index.get();
        state.items.with(|items| items.get(index).cloned())
    };

    let nav_button_class = "absolute top-1/2 -translate-y-1/2 z-10 rounded-full bg-black/40 \
                            p-2 text-white hover:bg-black/60 transition-colors \
                            disabled:opacity-30 disabled:cursor-default";

    view! {
        <Modal is_open=state.is_open class="w-full max-w-4xl mx-4">
            <button
                class="absolute right-4 top-4 z-20 rounded-full bg-black/40 p-2 text-white hover:bg-black/60 transition-colors"
                aria-label="Close dialog"
                on:click=move |_| state.close()
            >
                <Icon icon=X size="20px" />
            </button>

            {move || {
                match current() {
                    Some(story) => {
                        view! {
                            <div class="relative flex flex-col items-center">
                                <button
                                    class=format!("{nav_button_class} left-2 sm:left-4")
                                    aria-label="Previous story"
                                    disabled=at_start
                                    on:click=move |evt: ev::MouseEvent| {
                                        evt.stop_propagation();
                                        state.previous();
                                    }
                                >
                                    <Icon icon=CARET_LEFT size="24px" />
                                </button>

                                <img
                                    src=story.image.clone()
                                    alt=story.title.clone()
                                    class="max-h-[80vh] w-full object-contain rounded-lg bg-black"
                                />
                                <div class="absolute bottom-0 left-0 right-0 bg-black/70 text-white p-4 rounded-b-lg">
                                    <h3 class="text-xl font-medium">{story.title.clone()}</h3>
                                    <p class="text-sm text-white/70 mt-1">
                                        {story.description.clone()}
                                    </p>
                                    {story
                                        .date
                                        .clone()
                                        .map(|date| {
                                            view! {
                                                <p class="text-xs text-white/50 mt-2">{date}</p>
                                            }
                                        })}
                                </div>

                                <button
                                    class=format!("{nav_button_class} right-2 sm:right-4")
                                    aria-label="Next story"
                                    disabled=at_end
                                    on:click=move |evt: ev::MouseEvent| {
                                        evt.stop_propagation();
                                        state.next();
                                    }
                                >
                                    <Icon icon=CARET_RIGHT size="24px" />
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="p-6 text-center text-white bg-black rounded-lg">
                                "There are no stories to show."
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </Modal>
    }
}
