//! Full-height landing hero with animated circuit accents and a scroll
//! indicator that eases the viewport past the fold.

use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_DOWN};

use crate::services::scroll_service::scroll_past_fold;

#[component]
pub fn Hero(
    /// Secondary line under the headline
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-blue-900/10 via-blue-900/5 to-transparent"></div>

            // Circuit accents
            <div class="absolute inset-0 pointer-events-none">
                <div class="circuit-line top-1/4 left-1/4 w-px h-20"></div>
                <div class="circuit-line top-1/3 right-1/4 w-px h-32" style="animation-delay: 0.5s"></div>
                <div class="circuit-line bottom-1/4 left-1/3 w-px h-24" style="animation-delay: 1s"></div>
                <div class="circuit-line top-2/3 right-1/3 w-px h-16" style="animation-delay: 1.5s"></div>
                <div class="circuit-line top-1/4 left-1/4 w-20 h-px" style="animation-delay: 0.2s"></div>
                <div class="circuit-line top-1/3 right-1/4 w-32 h-px" style="animation-delay: 0.7s"></div>
                <div class="circuit-line bottom-1/4 left-1/3 w-24 h-px" style="animation-delay: 1.2s"></div>
                <div class="circuit-line top-2/3 right-1/3 w-16 h-px" style="animation-delay: 1.7s"></div>
            </div>

            // Logo and title
            <div class="text-center z-10 px-6 max-w-3xl mx-auto animate-fade-in">
                <div class="flex justify-center mb-6">
                    <img
                        src="/images/logo.svg"
                        alt="TechSoc logo"
                        class="h-24 md:h-32 w-auto"
                    />
                </div>
                <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight mb-4">
                    <span class="text-blue-900">"TECH"</span>
                    <span class="text-red-600">"SOC"</span>
                </h1>
                <p class="text-lg md:text-xl text-slate-500 mt-4 max-w-2xl mx-auto">
                    {subtitle}
                </p>
            </div>

            // Scroll indicator
            <div
                class="absolute bottom-10 left-1/2 -translate-x-1/2 cursor-pointer animate-bounce text-blue-900/70"
                on:click=move |_| scroll_past_fold()
            >
                <Icon icon=CARET_DOWN size="24px" />
            </div>
        </div>
    }
}
