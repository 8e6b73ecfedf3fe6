//! Early-counselling alert card shown in the About section.

use leptos::*;

use early_warning::content::alert;

use super::{TiltContainer, TiltItem};

#[component]
pub fn AlertCard() -> impl IntoView {
    let (title, title_depth) = alert::TITLE;
    let (subtitle, subtitle_depth) = alert::SUBTITLE;

    view! {
        <TiltContainer class="w-full max-w-5xl rounded-3xl p-6 md:p-10 bg-white dark:bg-gray-900 border border-orange-200 dark:border-orange-900/50 shadow-xl">
            <TiltItem depth=title_depth class="text-3xl md:text-4xl font-bold mb-2">
                {title}
            </TiltItem>
            <TiltItem depth=subtitle_depth class="text-lg text-gray-600 dark:text-gray-400 mb-8">
                {subtitle}
            </TiltItem>

            <div class="grid lg:grid-cols-2 gap-8">
                <div class="space-y-6">
                    <TiltItem depth=alert::IMAGE_DEPTH class="relative">
                        <img
                            src=alert::IMAGE_URL
                            alt=alert::IMAGE_ALT
                            class="w-full h-64 object-cover rounded-2xl"
                            loading="lazy"
                        />
                        <div class="absolute top-4 left-4 flex flex-col gap-2">
                            {alert::BADGES
                                .iter()
                                .map(|(icon, label)| {
                                    view! {
                                        <span class="px-3 py-1 rounded-full bg-white/90 dark:bg-gray-900/90 text-sm font-semibold shadow">
                                            {icon.glyph()} " " {*label}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </TiltItem>

                    <TiltItem depth=alert::FINDING_DEPTH class="rounded-2xl p-5 bg-red-50 dark:bg-red-950/40 border-l-4 border-red-500">
                        <h4 class="font-bold text-red-600 dark:text-red-400 mb-2">{alert::FINDING_TITLE}</h4>
                        <p class="text-sm text-gray-700 dark:text-gray-300">{alert::FINDING}</p>
                    </TiltItem>
                </div>

                <div class="space-y-6">
                    <TiltItem depth=alert::STATS_DEPTH class="grid sm:grid-cols-2 gap-4">
                        {alert::STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="rounded-xl p-4 bg-gray-50 dark:bg-gray-800">
                                        <div class=format!("text-2xl mb-2 text-{}-500", stat.tone)>
                                            {stat.icon.glyph()}
                                        </div>
                                        <h5 class="font-semibold mb-1">{stat.title}</h5>
                                        <p class="text-xs text-gray-600 dark:text-gray-400">{stat.detail}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </TiltItem>

                    <TiltItem depth=alert::BULLETS_DEPTH class="rounded-2xl p-5 bg-orange-50 dark:bg-orange-950/30">
                        <h4 class="font-bold mb-3">{alert::BULLETS_TITLE}</h4>
                        <ul class="space-y-2 text-sm text-gray-700 dark:text-gray-300">
                            {alert::BULLETS
                                .iter()
                                .map(|bullet| {
                                    view! {
                                        <li>
                                            <strong class="text-orange-600 dark:text-orange-400">{bullet.lead}</strong>
                                            " "
                                            {bullet.text}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </TiltItem>
                </div>
            </div>

            <TiltItem depth=alert::FIGURES_DEPTH class="grid grid-cols-3 gap-4 mt-8 text-center">
                {alert::FIGURES
                    .iter()
                    .map(|figure| {
                        view! {
                            <div>
                                <div class="text-2xl md:text-3xl font-bold gradient-text">{figure.value}</div>
                                <div class="text-xs text-gray-600 dark:text-gray-400">{figure.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </TiltItem>
        </TiltContainer>
    }
}
