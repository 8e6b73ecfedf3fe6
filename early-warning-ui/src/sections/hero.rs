//! Hero Section

use leptos::*;

use early_warning::content::hero;
use early_warning::page::SectionId;

use crate::components::DataSphere;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Hero.anchor() class="relative pt-28 pb-16 md:pt-36 md:pb-24">
            <div class="absolute inset-0 -z-10 bg-gradient-to-br from-orange-50 via-white to-white dark:from-orange-950/30 dark:via-gray-950 dark:to-gray-950" />

            <div class="container mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-block px-4 py-1 mb-6 rounded-full text-sm font-medium bg-orange-100 text-orange-700 dark:bg-orange-900/40 dark:text-orange-300">
                        {hero::BADGE}
                    </span>
                    <h1 class="text-5xl md:text-6xl font-extrabold leading-tight mb-6">
                        {hero::TITLE_LEAD}
                        <br />
                        <span class="gradient-text">{hero::TITLE_ACCENT}</span>
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 max-w-xl">{hero::TAGLINE}</p>

                    <div class="flex flex-wrap gap-4 mb-12">
                        {hero::CALLS_TO_ACTION
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                let class = if i == 0 {
                                    "px-6 py-3 rounded-lg font-medium text-white bg-gradient-to-r from-orange-500 to-orange-600 hover:shadow-lg transition-shadow"
                                } else {
                                    "px-6 py-3 rounded-lg font-medium border border-orange-500 text-orange-600 dark:text-orange-400 hover:bg-orange-50 dark:hover:bg-orange-950/40 transition-colors"
                                };
                                view! { <a href=link.href class=class>{link.label}</a> }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-10">
                        {hero::QUICK_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div>
                                        <div class="text-3xl font-bold gradient-text">{*value}</div>
                                        <div class="text-sm text-gray-500 dark:text-gray-400">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <DataSphere />
            </div>
        </section>
    }
}
