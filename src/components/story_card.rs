//! Gallery/featured story card with a hover overlay. Cards either open the
//! lightbox (gallery) or link out to an event page (featured).

use leptos::prelude::*;

use crate::components::design_system::{Badge, BadgeVariant};

#[component]
pub fn StoryCard(
    #[prop(into)] image: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Free-form display date, shown as a frosted badge when present
    #[prop(into, optional_no_strip)]
    date: Option<String>,
    /// External link; a linked card renders an anchor instead of a button
    #[prop(into, optional)]
    link: Option<String>,
    /// Click handler for lightbox cards
    #[prop(into, optional)]
    on_click: Option<Callback<()>>,
    /// Eagerly load above-the-fold images
    #[prop(default = false)]
    priority: bool,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };

    let handle_click = move |_| {
        if let Some(ref callback) = on_click {
            callback.run(());
        }
    };

    let overlay = view! {
        <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex flex-col justify-end p-6">
            <h3 class="text-white font-medium text-xl mb-2 transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                {title.clone()}
            </h3>
            {date.map(|date| {
                view! {
                    <div class="mb-2 transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300 delay-75">
                        <Badge variant=BadgeVariant::Frosted>{date}</Badge>
                    </div>
                }
            })}
            <p class="text-white/80 text-sm transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300 delay-100">
                {description}
            </p>
            {link.as_ref().map(|_| {
                view! {
                    <span class="self-start transform translate-y-4 group-hover:translate-y-0 transition-all duration-300 delay-150 bg-white text-blue-900 px-4 py-2 rounded-full text-sm font-medium mt-4">
                        "View details"
                    </span>
                }
            })}
        </div>
    };

    let body = view! {
        <div class="relative h-full w-full overflow-hidden rounded-xl">
            <img
                src=image
                alt=title.clone()
                class="h-full w-full object-cover transition-all duration-500 group-hover:scale-110"
                loading=loading
                decoding="async"
                width="400"
                height="300"
            />
            {overlay}
        </div>
    };

    view! {
        <div
            class="group cursor-pointer h-full w-full transform transition-all duration-500 hover:scale-[1.02] hover:shadow-xl"
            on:click=handle_click
        >
            {match link {
                Some(href) => view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block h-full w-full"
                    >
                        {body}
                    </a>
                }
                .into_any(),
                None => body.into_any(),
            }}
        </div>
    }
}
