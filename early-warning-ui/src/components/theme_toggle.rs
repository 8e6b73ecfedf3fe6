//! Theme Toggle
//!
//! Button that flips the page between light and dark.

use leptos::*;

use early_warning::content::Icon;

use crate::state::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    view! {
        <button
            on:click=move |_| theme.toggle()
            class="w-10 h-10 rounded-full flex items-center justify-center bg-gray-100 hover:bg-gray-200 dark:bg-gray-800 dark:hover:bg-gray-700 transition-colors"
            aria-label=move || theme.theme.get().toggle_label()
            title=move || theme.theme.get().toggle_label()
        >
            {move || if theme.is_dark() { Icon::Sun.glyph() } else { Icon::Moon.glyph() }}
        </button>
    }
}
