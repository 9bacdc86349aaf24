use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::about::About;
use crate::components::gallery::Gallery;
use crate::components::home::Home;
use crate::components::not_found::NotFound;
use crate::components::pull_to_refresh::PullToRefresh;
use crate::components::scroll_reset::ScrollReset;
use crate::components::toast::ToastContainer;
use crate::services::notification_service::provide_notification_state;
use crate::services::scroll_service::provide_scroll_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_scroll_state();
    provide_notification_state();

    view! {
        <Router>
            <ScrollReset />
            <PullToRefresh />
            <ToastContainer />

            <div class="min-h-screen bg-white">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/gallery") view=Gallery />
                    <Route path=path!("/about") view=About />
                </Routes>
            </div>
        </Router>
    }
}
