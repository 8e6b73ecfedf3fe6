//! About Section
//!
//! Mission copy with highlight cards, the early-counselling alert card and
//! the chart carousel.

use leptos::*;

use early_warning::content::{about, Card};
use early_warning::page::SectionId;
use early_warning::reveal::{Entrance, RevealTrigger};

use crate::components::{use_reveal, AlertCard, DataCharts, IconBadge, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    let cards = create_node_ref::<html::Div>();
    let reveal = use_reveal(cards, Entrance::about());

    view! {
        <section id=SectionId::About.anchor() class="py-24 bg-gray-50 dark:bg-gray-900/40">
            <div class="container mx-auto px-4">
                <SectionHeading heading=about::HEADING />

                <div node_ref=cards class="grid lg:grid-cols-2 gap-12 items-start mb-20">
                    <div data-reveal="" style=move || reveal.with(|t| t.style(0))>
                        <h3 class="text-3xl font-bold mb-6">{about::TITLE}</h3>
                        {about::PARAGRAPHS
                            .iter()
                            .map(|p| view! { <p class="text-gray-600 dark:text-gray-400 mb-4 leading-relaxed">{*p}</p> })
                            .collect_view()}
                        <div class="mt-8">
                            <AboutCard card=about::MISSION index=1 reveal=reveal />
                        </div>
                    </div>

                    <div class="space-y-6">
                        {about::HIGHLIGHTS
                            .iter()
                            .enumerate()
                            .map(|(i, card)| view! { <AboutCard card=*card index={i + 2} reveal=reveal /> })
                            .collect_view()}
                    </div>
                </div>

                <AlertCard />
            </div>

            <DataCharts />
        </section>
    }
}

/// Icon card taking part in the section entrance
#[component]
fn AboutCard(card: Card, index: usize, reveal: RwSignal<RevealTrigger>) -> impl IntoView {
    view! {
        <div
            data-reveal=""
            class="flex gap-4 p-6 rounded-2xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-sm hover:shadow-md transition-shadow"
            style=move || reveal.with(|t| t.style(index))
        >
            <IconBadge icon=card.icon />
            <div>
                <h4 class="font-bold text-lg mb-1">{card.title}</h4>
                <p class="text-sm text-gray-600 dark:text-gray-400">{card.description}</p>
            </div>
        </div>
    }
}
