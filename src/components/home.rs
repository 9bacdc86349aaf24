//! Home page: hero, featured events, campus map
//!
//! Featured cards use the same directional reveal as the gallery grid; the
//! map section and its heading fade in once, the first time they scroll
//! into view.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::featured_events;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::map_section::MapSection;
use crate::components::navbar::Navbar;
use crate::components::story_card::StoryCard;
use crate::services::reveal_service::{bind_one_shot_reveals, RevealController};
use crate::services::scroll_service::use_scroll_state;

#[component]
pub fn Home() -> impl IntoView {
    let scroll = use_scroll_state();
    let featured = featured_events();

    // The featured list is static, so this binds exactly once per mount.
    let controller: Rc<RefCell<Option<RevealController>>> = Rc::new(RefCell::new(None));
    {
        let controller = Rc::clone(&controller);
        let direction = scroll.direction;
        let ids: Vec<u32> = featured.iter().map(|event| event.id).collect();
        Effect::new(move |_| {
            let controller = Rc::clone(&controller);
            let ids = ids.clone();
            let callback = Closure::once_into_js(move || {
                let mut slot = controller.borrow_mut();
                if slot.is_none() {
                    *slot = RevealController::new(direction);
                }
                if let Some(active) = slot.as_ref() {
                    active.bind(&ids);
                }
                bind_one_shot_reveals(".reveal-on-view");
            });
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(callback.unchecked_ref());
            }
        });
    }

    let featured_cards = featured
        .iter()
        .map(|event| {
            view! {
                <div
                    class="story-reveal aspect-[4/5] h-auto"
                    data-story-id=event.id.to_string()
                >
                    <StoryCard
                        image=event.image.clone()
                        title=event.title.clone()
                        description=event.description.clone()
                        date=Some(event.date.clone())
                        link=event.link.clone()
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />
            <Hero subtitle="Capturing moments of innovation, learning, and connection from our technology community." />

            <main class="flex-grow">
                // Featured events
                <section class="py-20 px-6">
                    <div class="max-w-7xl mx-auto">
                        <div class="flex flex-col md:flex-row md:items-end justify-between mb-12">
                            <div>
                                <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">
                                    "Upcoming Events"
                                </h2>
                                <p class="text-slate-500 max-w-2xl">
                                    "Explore current technology events and opportunities to \
                                     grow your skills."
                                </p>
                            </div>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {featured_cards}
                        </div>
                    </div>
                </section>

                // Campus map
                <section class="py-20 px-6 bg-slate-50 overflow-hidden">
                    <div class="max-w-7xl mx-auto">
                        <div class="reveal-on-view text-center mb-12">
                            <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">
                                "Find Us"
                            </h2>
                            <p class="text-slate-500 max-w-2xl mx-auto">
                                "Visit us at Northfield Polytechnic to learn more about \
                                 TechSoc."
                            </p>
                        </div>

                        <div class="reveal-on-view h-[500px] rounded-t-xl overflow-hidden shadow-lg" style="transition-delay: 150ms">
                            <MapSection />
                        </div>

                        // Location details
                        <div class="reveal-on-view border border-slate-200 rounded-b-xl p-4 bg-white shadow-lg" style="transition-delay: 300ms">
                            <h3 class="font-bold text-lg text-blue-900">
                                "Northfield Polytechnic"
                            </h3>
                            <p class="text-sm text-slate-600 mt-1">
                                "1 Innovation Way, Northfield, NG7 2RD"
                            </p>
                            <div class="mt-3 flex space-x-3">
                                <a
                                    href="https://www.openstreetmap.org/directions?to=52.95340%2C-1.18790"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center text-sm text-white bg-blue-900 hover:bg-blue-800 px-4 py-2 rounded-lg transition-all duration-300 hover:scale-105"
                                >
                                    "Directions"
                                </a>
                                <a
                                    href="https://www.openstreetmap.org/?mlat=52.95340&mlon=-1.18790#map=15"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center text-sm text-blue-900 hover:text-blue-700 px-4 py-2 border border-blue-900 rounded-lg transition-all duration-300 hover:scale-105 hover:bg-blue-50"
                                >
                                    "View larger map"
                                </a>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
