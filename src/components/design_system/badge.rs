use leptos::prelude::*;

/// Badge variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeVariant {
    #[default]
    Default,
    Accent,
    Frosted,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-slate-100 text-slate-600 border-slate-200",
            BadgeVariant::Accent => "bg-blue-100 text-blue-800 border-blue-200",
            BadgeVariant::Frosted => "bg-sky-300/20 text-white border-transparent backdrop-blur-sm",
        }
    }
}

/// A styled badge/tag component
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "inline-block px-3 py-1 text-xs font-medium rounded-full border";
    let variant_class = variant.class();
    let full_class = format!("{base_class} {variant_class} {class}");

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
