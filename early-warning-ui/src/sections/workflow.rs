//! Workflow Section

use leptos::*;

use early_warning::content::workflow::{self, has_next, step_number, Step};
use early_warning::page::SectionId;
use early_warning::reveal::{Entrance, RevealTrigger};

use crate::components::{use_reveal, SectionHeading};

#[component]
pub fn Workflow() -> impl IntoView {
    let steps = create_node_ref::<html::Div>();
    let reveal = use_reveal(steps, Entrance::workflow());

    view! {
        <section id=SectionId::Workflow.anchor() class="py-24 bg-gray-50 dark:bg-gray-900/40">
            <div class="container mx-auto px-4">
                <SectionHeading heading=workflow::HEADING />

                <div node_ref=steps class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                    {workflow::STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! { <StepCard step=*step index=i reveal=reveal /> })
                        .collect_view()}
                </div>

                <div class="text-center">
                    <h3 class="text-2xl font-bold mb-8">{workflow::TECHNOLOGIES_TITLE}</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {workflow::TECHNOLOGIES
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-5 py-2 rounded-full bg-white dark:bg-gray-900 border border-orange-200 dark:border-orange-900/50 font-medium">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: Step, index: usize, reveal: RwSignal<RevealTrigger>) -> impl IntoView {
    view! {
        <div
            data-reveal=""
            class="relative p-6 rounded-2xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-sm"
            style=move || reveal.with(|t| t.style(index))
        >
            <span class="absolute top-4 right-5 text-4xl font-extrabold text-gray-100 dark:text-gray-800 select-none">
                {step_number(index)}
            </span>
            <div class=format!(
                "w-14 h-14 rounded-xl flex items-center justify-center text-2xl text-white bg-gradient-to-br {} mb-4",
                step.gradient,
            )>
                {step.icon.glyph()}
            </div>
            <h3 class="font-bold text-xl mb-2">{step.title}</h3>
            <p class="text-gray-600 dark:text-gray-400">{step.description}</p>
            {has_next(index)
                .then(|| view! { <span class="hidden lg:block absolute -right-6 top-1/2 text-2xl text-orange-400">"→"</span> })}
        </div>
    }
}
