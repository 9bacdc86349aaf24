//! Animated 404 page, shown by the router fallback.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::design_system::{Button, ButtonVariant};

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        log::error!(
            "404: no route matches {}",
            location.pathname.get_untracked()
        );
    });

    let go_home = move |_| {
        navigate("/", Default::default());
    };

    let dots = (0..6)
        .map(|index| {
            let style = format!(
                "top: {}%; left: {}%; animation-delay: {}ms; animation-duration: 2s",
                20 + index * 15,
                10 + index * 15,
                index * 500,
            );
            view! { <div class="absolute w-2 h-2 bg-blue-800 rounded-full animate-ping" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-white via-white to-slate-100 relative overflow-hidden animate-fade-in">
            // Background blobs
            <div class="absolute inset-0 z-0">
                <div class="absolute top-1/4 left-1/4 w-32 h-32 bg-blue-800/10 rounded-full animate-pulse blur-xl"></div>
                <div class="absolute top-3/4 right-1/4 w-24 h-24 bg-sky-400/20 rounded-full animate-bounce blur-lg"></div>
                <div class="absolute bottom-1/4 left-1/3 w-20 h-20 bg-red-500/10 rounded-full animate-ping blur-md"></div>
            </div>

            <div class="relative z-10 text-center space-y-8 p-8">
                <div class="space-y-6">
                    <h1 class="text-9xl md:text-[12rem] font-black text-transparent bg-gradient-to-r from-blue-800 via-sky-500 to-blue-800 bg-clip-text animate-pulse">
                        "404"
                    </h1>

                    <div class="space-y-4">
                        <h2 class="text-3xl md:text-4xl font-bold text-slate-800">
                            "Page Not Found"
                        </h2>
                        <p class="text-lg md:text-xl text-slate-500 max-w-lg mx-auto">
                            "Oops! The page you're looking for seems to have wandered off \
                             into an unknown corner of the site."
                        </p>
                    </div>
                </div>

                <div class="flex justify-center">
                    <Button variant=ButtonVariant::Primary on_click=go_home class="min-w-[180px]">
                        "Back to Home"
                    </Button>
                </div>
            </div>

            <div class="absolute inset-0 z-0 pointer-events-none">{dots}</div>
        </div>
    }
}
