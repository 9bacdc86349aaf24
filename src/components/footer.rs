//! Site footer
//!
//! Quick links scroll back to the top: a same-page click animates the
//! scroll, a cross-page click navigates first and resets the offset.

use chrono::Datelike;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use phosphor_leptos::{Icon, CARET_RIGHT, DISCORD_LOGO, ENVELOPE, INSTAGRAM_LOGO};

use crate::services::scroll_service::{reset_scroll, scroll_to_top};

const QUICK_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/gallery", "Photo Gallery"),
    ("/about", "About Us"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let current_year = chrono::Utc::now().year();

    let handle_nav = {
        let navigate = navigate.clone();
        let pathname = location.pathname;
        move |path: &str| {
            if pathname.get_untracked() == path {
                scroll_to_top();
            } else {
                navigate(path, Default::default());
                reset_scroll();
            }
        }
    };

    let quick_links = {
        let handle_nav = handle_nav.clone();
        QUICK_LINKS
            .iter()
            .map(|(path, label)| {
                let handle_nav = handle_nav.clone();
                let path = *path;
                view! {
                    <li>
                        <a
                            href=path
                            class="text-slate-300 hover:text-sky-300 flex items-center transition-colors"
                            on:click=move |evt: ev::MouseEvent| {
                                evt.prevent_default();
                                handle_nav(path);
                            }
                        >
                            <Icon icon=CARET_RIGHT size="16px" />
                            <span class="ml-1">{*label}</span>
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <footer class="bg-blue-950 text-white pt-16 pb-8">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-4 gap-10">
                <div class="col-span-1 md:col-span-2">
                    <div class="flex items-center mb-6 space-x-2">
                        <img src="/images/logo.svg" alt="TechSoc logo" class="h-12 w-auto" />
                        <span class="font-bold text-xl tracking-tight">
                            <span class="text-white">"TECH"</span>
                            <span class="text-red-500">"SOC"</span>
                        </span>
                    </div>
                    <p class="text-slate-300 mb-6 max-w-md">
                        "Capturing moments and memories from our technology events, \
                         workshops, and gatherings. TechSoc celebrates innovation and \
                         connection through our stories."
                    </p>
                    <div class="flex space-x-4">
                        <a
                            href="https://instagram.com/techsoc.northfield"
                            class="text-slate-300 hover:text-sky-300 transition-colors duration-300"
                            aria-label="Instagram"
                        >
                            <Icon icon=INSTAGRAM_LOGO size="20px" />
                        </a>
                        <a
                            href="https://discord.gg/techsoc"
                            class="text-slate-300 hover:text-sky-300 transition-colors duration-300"
                            aria-label="Discord"
                        >
                            <Icon icon=DISCORD_LOGO size="20px" />
                        </a>
                        <a
                            href="mailto:hello@techsoc.northfield.ac.uk"
                            class="text-slate-300 hover:text-sky-300 transition-colors duration-300"
                            aria-label="Email"
                        >
                            <Icon icon=ENVELOPE size="20px" />
                        </a>
                    </div>
                </div>

                <div>
                    <h3 class="font-medium text-lg mb-4">"Quick Links"</h3>
                    <ul class="space-y-3">{quick_links}</ul>
                </div>

                <div>
                    <h3 class="font-medium text-lg mb-4">"Contact"</h3>
                    <address class="not-italic text-slate-300 space-y-3">
                        <p>"TechSoc Student Society"</p>
                        <p>"Northfield Polytechnic"</p>
                        <p>"Building 1, Floors 1-3"</p>
                        <p class="text-sky-300 mt-4">"hello@techsoc.northfield.ac.uk"</p>
                    </address>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-6 mt-16 pt-8 border-t border-slate-700/50">
                <p class="text-slate-400 text-sm">
                    {format!("© {current_year} TechSoc. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
