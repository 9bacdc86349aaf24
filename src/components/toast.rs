//! Toast notifications
//!
//! Renders the notification service's queue in the bottom-right corner.
//! Each toast dismisses itself after a few seconds, or immediately on
//! click.

use leptos::prelude::*;
use phosphor_leptos::{Icon, CHECK_CIRCLE, INFO, WARNING_CIRCLE, X};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::services::notification_service::{use_notification_state, Notification, ToastType};

const TOAST_DURATION_MS: u32 = 5000;

#[component]
fn Toast(notification: Notification, on_dismiss: Callback<Uuid>) -> impl IntoView {
    let id = notification.id;

    // Auto-dismiss
    Effect::new(move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            on_dismiss.run(id);
        });
    });

    let (icon_view, accent_class) = match notification.toast_type {
        ToastType::Success => (
            view! { <Icon icon=CHECK_CIRCLE size="20px" /> }.into_any(),
            "border-l-4 border-green-500 text-green-600",
        ),
        ToastType::Error => (
            view! { <Icon icon=WARNING_CIRCLE size="20px" /> }.into_any(),
            "border-l-4 border-red-500 text-red-600",
        ),
        ToastType::Info => (
            view! { <Icon icon=INFO size="20px" /> }.into_any(),
            "border-l-4 border-sky-500 text-sky-600",
        ),
    };

    view! {
        <div class=format!(
            "toast-enter bg-white rounded-lg shadow-lg p-4 flex items-start gap-3 w-80 {accent_class}"
        )>
            <div class="shrink-0 mt-0.5">{icon_view}</div>
            <div class="flex-1 min-w-0">
                <p class="font-medium text-slate-800">{notification.title.clone()}</p>
                {notification
                    .message
                    .clone()
                    .map(|message| {
                        view! { <p class="text-sm text-slate-500 mt-1">{message}</p> }
                    })}
            </div>
            <button
                class="shrink-0 text-slate-400 hover:text-slate-600 transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| on_dismiss.run(id)
            >
                <Icon icon=X size="16px" />
            </button>
        </div>
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    let on_dismiss = Callback::new(move |id: Uuid| {
        state.remove(id);
    });

    view! {
        <div class="fixed bottom-6 right-6 z-[90] flex flex-col gap-3">
            <For
                each=move || state.notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    view! { <Toast notification=notification on_dismiss=on_dismiss /> }
                }
            />
        </div>
    }
}
