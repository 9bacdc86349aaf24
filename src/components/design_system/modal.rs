use leptos::ev;
use leptos::prelude::*;

/// A modal dialog component
/// Note: Due to Leptos Children semantics, the modal content is always rendered
/// and the modal container is conditionally shown/hidden via CSS.
#[component]
pub fn Modal(
    /// Whether the modal is visible
    is_open: RwSignal<bool>,
    /// Additional CSS classes for the modal content
    #[prop(into, optional)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_backdrop_click = move |_| {
        is_open.set(false);
    };

    let handle_content_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
    };

    view! {
        <div
            class="fixed inset-0 bg-black/80 backdrop-blur-sm flex items-center justify-center z-50 transition-opacity duration-200"
            style:display=move || if is_open.get() { "flex" } else { "none" }
            on:click=handle_backdrop_click
        >
            <div
                class=format!("relative overflow-hidden {class}")
                on:click=handle_content_click
            >
                {children()}
            </div>
        </div>
    }
}
