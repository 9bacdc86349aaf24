//! Scroll reset on navigation
//!
//! Renders nothing; resets the window scroll offset whenever the route
//! changes so a new page always starts at the top. A short follow-up tick
//! catches layouts that settle after the first paint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::services::scroll_service::reset_scroll;

#[component]
pub fn ScrollReset() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        // Track the path so the effect re-runs on every navigation.
        let _path = location.pathname.get();
        reset_scroll();

        spawn_local(async {
            gloo_timers::future::TimeoutFuture::new(10).await;
            reset_scroll();
        });
    });

    ()
}
