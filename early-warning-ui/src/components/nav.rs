//! Navigation Component
//!
//! Fixed header with the brand, in-page section links and the theme toggle.

use leptos::*;

use early_warning::content::{BRAND, BRAND_MARK};
use early_warning::page::{SectionId, NAV_LINKS};

use super::ThemeToggle;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 backdrop-blur bg-white/80 dark:bg-gray-950/80 border-b border-gray-200 dark:border-gray-800">
            <nav class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href=SectionId::Hero.href() class="flex items-center space-x-3">
                        <span class="w-9 h-9 rounded-lg bg-gradient-to-br from-orange-400 to-orange-600 text-white text-sm font-bold flex items-center justify-center">
                            {BRAND_MARK}
                        </span>
                        <span class="text-lg font-bold">{BRAND}</span>
                    </a>

                    // Section links
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <NavLink href=link.href label=link.label /> })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            class="md:hidden w-10 h-10 rounded-lg flex items-center justify-center hover:bg-gray-100 dark:hover:bg-gray-800"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=move || menu_open.get()>
                    <div class="md:hidden pb-4 flex flex-col space-y-1">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="px-4 py-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-orange-500 dark:text-gray-300 dark:hover:text-orange-400 transition-colors"
        >
            {label}
        </a>
    }
}
