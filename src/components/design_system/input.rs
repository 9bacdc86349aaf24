use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Input type (text, email, etc.); defaults to text
    #[prop(into, optional)]
    input_type: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    let base_class = "w-full px-4 py-3 rounded-lg border border-slate-200 bg-white text-slate-800 placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-sky-400/50 focus:border-sky-400 transition-colors";

    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(ref callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            class=full_class
            type=input_type
            prop:value=move || value.get()
            placeholder=placeholder
            on:input=handle_input
        />
    }
}

/// A styled multi-line text area
#[component]
pub fn TextArea(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Number of visible rows
    #[prop(default = 5)]
    rows: u32,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full px-4 py-3 rounded-lg border border-slate-200 bg-white text-slate-800 placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-sky-400/50 focus:border-sky-400 transition-colors resize-none";

    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <textarea
            class=full_class
            rows=rows
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=handle_input
        ></textarea>
    }
}
