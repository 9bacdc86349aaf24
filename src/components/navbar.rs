//! Fixed top navigation bar
//!
//! Translucent over the page; gains a shadow once the page scrolls past the
//! elevation threshold. On small screens the links collapse into a
//! hamburger menu that closes on navigation.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use phosphor_leptos::{Icon, CARET_RIGHT, LIST, X};

use crate::services::scroll_service::use_scroll_state;

const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/gallery", "Gallery"), ("/about", "About")];

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = use_scroll_state();
    let location = use_location();
    let navigate = use_navigate();
    let mobile_menu_open = RwSignal::new(false);
    let pathname = location.pathname;

    let nav_class = move || {
        let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300 px-6 py-4";
        if scroll.scrolled.get() {
            format!("{base} bg-white/80 backdrop-blur-lg shadow-lg border-b border-slate-200/60")
        } else {
            format!("{base} bg-white/60 backdrop-blur-md border-b border-transparent")
        }
    };

    let go = {
        let navigate = navigate.clone();
        move |path: &str| {
            mobile_menu_open.set(false);
            navigate(path, Default::default());
        }
    };

    let desktop_links = {
        let go = go.clone();
        NAV_LINKS
            .iter()
            .map(|(path, label)| {
                let go = go.clone();
                let path = *path;
                let link_class = move || {
                    if pathname.get() == path {
                        "text-sm font-medium text-sky-600 transition-colors"
                    } else {
                        "text-sm font-medium text-blue-900 hover:text-sky-600 transition-colors"
                    }
                };
                view! {
                    <a
                        href=path
                        class=link_class
                        on:click=move |evt: ev::MouseEvent| {
                            evt.prevent_default();
                            go(path);
                        }
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    // Rebuilt on every open because the Show body can render repeatedly.
    let mobile_links = {
        let go = go.clone();
        move || {
            let go = go.clone();
            NAV_LINKS
                .iter()
                .map(|(path, label)| {
                    let go = go.clone();
                    let path = *path;
                    let link_class = move || {
                        if pathname.get() == path {
                            "flex items-center justify-between py-2 text-base font-medium text-sky-600"
                        } else {
                            "flex items-center justify-between py-2 text-base font-medium text-blue-900"
                        }
                    };
                    view! {
                        <a
                            href=path
                            class=link_class
                            on:click=move |evt: ev::MouseEvent| {
                                evt.prevent_default();
                                go(path);
                            }
                        >
                            <span>{*label}</span>
                            <Icon icon=CARET_RIGHT size="16px" />
                        </a>
                    }
                })
                .collect_view()
        }
    };

    let go_home = {
        let go = go.clone();
        move |evt: ev::MouseEvent| {
            evt.prevent_default();
            go("/");
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                // Logo
                <a href="/" class="flex items-center space-x-2" on:click=go_home>
                    <img src="/images/logo.svg" alt="TechSoc logo" class="h-10 w-10" />
                    <span class="font-bold text-xl tracking-tight">
                        <span class="text-blue-900">"TECH"</span>
                        <span class="text-red-600">"SOC"</span>
                    </span>
                </a>

                // Desktop navigation
                <div class="hidden md:flex space-x-8">{desktop_links}</div>

                // Mobile menu toggle
                <button
                    class="md:hidden focus:outline-none text-blue-900"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon icon=X size="24px" /> }.into_any()
                        } else {
                            view! { <Icon icon=LIST size="24px" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || mobile_menu_open.get()>
                <div class="md:hidden absolute top-full left-0 right-0 bg-white shadow-lg animate-fade-in">
                    <div class="px-6 py-4 space-y-2">{mobile_links.clone()}</div>
                </div>
            </Show>
        </nav>
    }
}
