use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-800 hover:bg-blue-700 text-white shadow-md border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-slate-100 hover:bg-slate-200 text-slate-700 border border-slate-200"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-slate-100 text-slate-500 hover:text-slate-800 border border-transparent"
            }
            ButtonVariant::Outline => {
                "bg-transparent border border-blue-800 text-blue-800 hover:bg-blue-50"
            }
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler - accepts any closure taking MouseEvent
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded-lg transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-blue-500/50";
    let variant_class = variant.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=move || disabled.get()
            title=title
        >
            {children()}
        </button>
    }
}
