//! Features Section
//!
//! Tab switcher between the teacher and counsellor dashboards. Scrolling
//! plays the card entrance once; each tab switch after that replays it for
//! the new cards.

use leptos::*;

use early_warning::content::{features, FeatureTab};
use early_warning::page::SectionId;
use early_warning::reveal::Entrance;

use crate::components::{replay_reveal, use_reveal, IconBadge, SectionHeading};

#[component]
pub fn Features() -> impl IntoView {
    let tab = create_rw_signal(FeatureTab::default());
    let grid = create_node_ref::<html::Div>();
    let reveal = use_reveal(grid, Entrance::features());

    create_effect(move |previous: Option<FeatureTab>| {
        let current = tab.get();
        if previous.is_some_and(|p| p != current) {
            replay_reveal(reveal, grid);
        }
        current
    });

    view! {
        <section id=SectionId::Features.anchor() class="py-24">
            <div class="container mx-auto px-4">
                <SectionHeading heading=features::HEADING />

                <div class="flex justify-center mb-12">
                    <div class="inline-flex p-1 rounded-xl bg-gray-100 dark:bg-gray-800" role="tablist">
                        {FeatureTab::ALL
                            .iter()
                            .map(|&option| view! { <TabButton option=option tab=tab /> })
                            .collect_view()}
                    </div>
                </div>

                <div node_ref=grid class="grid md:grid-cols-2 lg:grid-cols-3 gap-6" role="tabpanel">
                    <For
                        each=move || tab.get().features().iter().copied().enumerate().collect::<Vec<_>>()
                        key=|(_, card)| card.title
                        children=move |(i, card)| {
                            view! {
                                <div
                                    data-reveal=""
                                    class="p-6 rounded-2xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all"
                                    style=move || reveal.with(|t| t.style(i))
                                >
                                    <IconBadge icon=card.icon />
                                    <h3 class="font-bold text-xl mt-4 mb-2">{card.title}</h3>
                                    <p class="text-gray-600 dark:text-gray-400">{card.description}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TabButton(option: FeatureTab, tab: RwSignal<FeatureTab>) -> impl IntoView {
    let selected = move || tab.get() == option;

    view! {
        <button
            role="tab"
            aria-selected=move || selected().to_string()
            on:click=move |_| tab.set(option)
            class=move || {
                let base = "px-6 py-2 rounded-lg text-sm font-medium transition-colors";
                if selected() {
                    format!("{} bg-gradient-to-r from-orange-500 to-orange-600 text-white shadow", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white", base)
                }
            }
        >
            {option.label()}
        </button>
    }
}
