//! Section headings and icon badges

use leptos::*;

use early_warning::content::{Heading, Icon};

/// Two-tone section heading with subtitle
#[component]
pub fn SectionHeading(heading: Heading) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                {heading.lead}
                " "
                <span class="gradient-text">{heading.accent}</span>
            </h2>
            <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                {heading.subtitle}
            </p>
        </div>
    }
}

/// Rounded square holding an icon glyph
#[component]
pub fn IconBadge(
    icon: Icon,
    /// Extra classes for the badge background
    #[prop(default = "bg-gradient-to-br from-orange-400 to-orange-600")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("w-12 h-12 rounded-xl flex items-center justify-center text-2xl shadow-md {}", class)
            aria-hidden="true"
        >
            {icon.glyph()}
        </div>
    }
}
