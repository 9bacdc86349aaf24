//! Photo gallery page
//!
//! Search box and category chips narrow the catalog into the visible set;
//! the card grid renders that set with scroll-triggered reveals, and a card
//! click opens the lightbox on a snapshot of it. Rebinding the reveal
//! observer waits one frame so it always sees the freshly rendered grid.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, FUNNEL, MAGNIFYING_GLASS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::{category_filters, gallery_stories};
use crate::components::design_system::Input;
use crate::components::footer::Footer;
use crate::components::lightbox::Lightbox;
use crate::components::navbar::Navbar;
use crate::components::story_card::StoryCard;
use crate::services::filter_service::{compute_visible_set, FilterState};
use crate::services::lightbox_service::LightboxState;
use crate::services::reveal_service::RevealController;
use crate::services::scroll_service::use_scroll_state;

#[component]
pub fn Gallery() -> impl IntoView {
    let filter = FilterState::new();
    let lightbox = LightboxState::new();
    let scroll = use_scroll_state();

    let catalog = gallery_stories();
    let visible = Memo::new(move |_| {
        compute_visible_set(
            &catalog,
            &filter.search_term.get(),
            &filter.active_category.get(),
        )
    });

    // One reveal controller per mounted grid. Every change of the visible
    // set tears down the previous observations, then binds the new node set
    // on the next frame, once the grid has rendered.
    let controller: Rc<RefCell<Option<RevealController>>> = Rc::new(RefCell::new(None));
    {
        let controller = Rc::clone(&controller);
        let direction = scroll.direction;
        Effect::new(move |_| {
            let ids: Vec<u32> = visible.with(|stories| stories.iter().map(|s| s.id).collect());

            if let Some(active) = controller.borrow().as_ref() {
                active.release_all();
            }

            let controller = Rc::clone(&controller);
            let callback = Closure::once_into_js(move || {
                let mut slot = controller.borrow_mut();
                if slot.is_none() {
                    *slot = RevealController::new(direction);
                }
                if let Some(active) = slot.as_ref() {
                    active.bind(&ids);
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(callback.unchecked_ref());
            }
        });
    }

    let filter_chips = category_filters()
        .into_iter()
        .map(|(id, label)| {
            let chip_class = move || {
                if filter.active_category.get() == id {
                    "px-4 py-2 rounded-full text-sm transition-colors bg-blue-900 text-white"
                } else {
                    "px-4 py-2 rounded-full text-sm transition-colors bg-slate-100 text-slate-700 hover:bg-slate-200"
                }
            };
            view! {
                <button class=chip_class on:click=move |_: ev::MouseEvent| filter.set_category(id)>
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        visible
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, story)| {
                let priority = index < 3;
                let open_at = Callback::new(move |_: ()| {
                    let snapshot = visible.get_untracked();
                    lightbox.open(snapshot, index);
                });
                view! {
                    <div
                        class="story-reveal aspect-[4/3] h-auto"
                        data-story-id=story.id.to_string()
                    >
                        <StoryCard
                            image=story.image.clone()
                            title=story.title.clone()
                            description=story.description.clone()
                            date=story.date.clone()
                            on_click=open_at
                            priority=priority
                        />
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />

            <header class="pt-24 pb-8 px-4 sm:px-6 bg-gradient-to-b from-blue-900/5 to-transparent overflow-hidden">
                <div class="max-w-7xl mx-auto text-center animate-fade-in">
                    <h1 class="text-4xl md:text-5xl font-bold text-blue-900 mb-6">
                        "Photo Gallery"
                    </h1>
                    <p class="text-slate-500 max-w-2xl mx-auto mb-12">
                        "Browse our collection of memories from TechSoc events, \
                         workshops, and community gatherings."
                    </p>

                    <div class="flex flex-col md:flex-row gap-4 justify-center">
                        <div class="relative w-full md:w-96">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">
                                <Icon icon=MAGNIFYING_GLASS size="20px" />
                            </span>
                            <Input
                                value=filter.search_term
                                placeholder="Search stories..."
                                class="pl-10"
                            />
                        </div>

                        <div class="flex items-center justify-center text-blue-900">
                            <Icon icon=FUNNEL size="20px" />
                            <span class="font-medium ml-2">"Filter:"</span>
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-2 justify-center mt-4">{filter_chips}</div>
                </div>
            </header>

            <main class="flex-grow py-5 px-8 sm:px-10">
                <div class="max-w-7xl mx-auto">
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <div class="text-center py-20">
                                    <h3 class="text-xl font-medium text-blue-900 mb-2">
                                        "No stories found"
                                    </h3>
                                    <p class="text-slate-500">
                                        "Try adjusting your search or filter to find what \
                                         you're looking for."
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {cards.clone()}
                        </div>
                    </Show>
                </div>
            </main>

            <Lightbox state=lightbox />

            <Footer />
        </div>
    }
}
