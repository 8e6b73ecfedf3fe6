//! App Root Component
//!
//! Provides the theme and site contexts and lays the sections out in page
//! order.

use leptos::*;

use early_warning::page::SectionId;
use early_warning::Config;

use crate::components::Header;
use crate::sections::{About, Features, Footer, Hero, Workflow};
use crate::state::site::provide_site_state;
use crate::state::theme::provide_theme_state;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_theme_state(config.theme.initial);
    provide_site_state(config);

    view! {
        <div class="min-h-screen overflow-x-hidden">
            <Header />

            <main>
                {SectionId::ORDER.iter().map(|id| section(*id)).collect_view()}
            </main>
        </div>
    }
}

fn section(id: SectionId) -> View {
    match id {
        SectionId::Hero => view! { <Hero /> }.into_view(),
        SectionId::About => view! { <About /> }.into_view(),
        SectionId::Features => view! { <Features /> }.into_view(),
        SectionId::Workflow => view! { <Workflow /> }.into_view(),
        SectionId::Footer => view! { <Footer /> }.into_view(),
    }
}
