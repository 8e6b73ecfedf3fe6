//! Chart Carousel
//!
//! The three data cards on canvases, scrolling in an endless strip under a
//! heading that reveals on scroll.

mod paint;

use leptos::*;

use early_warning::charts::area::{EARLY_COUNSELLING, NO_INTERVENTION};
use early_warning::charts::carousel::STRIP_COPIES;
use early_warning::charts::{Carousel, ChartKind, Tone, Tooltip, CHART_HEIGHT, CHART_WIDTH, DROPOUT_REASONS};
use early_warning::content::about;
use early_warning::reveal::Entrance;
use early_warning::Point;

use super::{use_reveal, SectionHeading};
use crate::state::{SiteState, ThemeState};

/// Heading plus the scrolling chart strip
#[component]
pub fn DataCharts() -> impl IntoView {
    let site = use_context::<SiteState>().expect("SiteState not found");
    let carousel = Carousel::new(
        site.config.charts.carousel_direction,
        site.config.charts.carousel_speed,
    );

    let header = create_node_ref::<html::Div>();
    let reveal = use_reveal(header, Entrance::chart_header());

    // Attach the animation after the first paint; stays still with animations off
    let (started, set_started) = create_signal(false);
    if site.animations_enabled() {
        request_animation_frame(move || set_started.set(true));
    }

    view! {
        <div class="mt-24">
            <div node_ref=header data-reveal="" style=move || reveal.with(|t| t.style(0))>
                <SectionHeading heading=about::CHARTS_HEADING />
            </div>

            <div class="carousel py-4">
                <div
                    class="carousel-strip"
                    style=move || carousel.strip_style(started.get())
                >
                    {(0..STRIP_COPIES)
                        .flat_map(|copy| ChartKind::ALL.iter().map(move |kind| (copy, *kind)))
                        .map(|(copy, kind)| view! { <ChartPanel kind=kind duplicate={copy > 0} /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Hover {
    index: usize,
    at: Point,
    tooltip: Tooltip,
}

/// One chart card
#[component]
fn ChartPanel(
    kind: ChartKind,
    /// Second copy in the strip, hidden from assistive tech
    duplicate: bool,
) -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");
    let card = kind.card();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<Hover>);

    // Redraw on hover and theme changes
    create_effect(move |_| {
        let active = hover.with(|h| h.as_ref().map(|h| h.index));
        let dark = theme.is_dark();
        if let Some(canvas) = canvas_ref.get() {
            paint::draw(kind, &canvas, active, dark);
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let at = Point::new(ev.offset_x() as f64, ev.offset_y() as f64);
        set_hover.set(paint::hit(kind, at).map(|(index, tooltip)| Hover { index, at, tooltip }));
    };

    view! {
        <div
            class="w-[344px] shrink-0 rounded-2xl p-4 bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-lg"
            aria-hidden={duplicate.then_some("true")}
        >
            <div class="flex items-center gap-3 mb-3">
                <div class=format!(
                    "w-10 h-10 rounded-lg flex items-center justify-center text-xl bg-{0}-100 dark:bg-{0}-900/40",
                    card.accent,
                )>
                    {card.glyph}
                </div>
                <div>
                    <h3 class="font-bold leading-tight">{card.title}</h3>
                    <p class="text-xs text-gray-500 dark:text-gray-400">{card.subtitle}</p>
                </div>
            </div>

            <div class="relative">
                <canvas
                    node_ref=canvas_ref
                    class="block"
                    style=format!("width: {}px; height: {}px;", CHART_WIDTH, CHART_HEIGHT)
                    on:mousemove=on_move
                    on:mouseleave=move |_| set_hover.set(None)
                />
                {move || hover.get().map(|hover| view! { <ChartTooltip hover=hover /> })}
            </div>

            <div class="flex flex-wrap justify-center gap-x-3 gap-y-1 mt-2">
                {legend_entries(kind)
                    .into_iter()
                    .map(|(label, color)| {
                        view! {
                            <div class="flex items-center space-x-1 text-xs text-gray-600 dark:text-gray-300">
                                <span class="w-2.5 h-2.5 rounded-full" style=format!("background-color: {}", color) />
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="text-[10px] text-gray-400 mt-2">{card.source}</p>
        </div>
    }
}

#[component]
fn ChartTooltip(hover: Hover) -> impl IntoView {
    view! {
        <div
            class="chart-tooltip rounded-lg px-3 py-2 text-xs whitespace-nowrap bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 shadow-lg"
            style=format!("left: {}px; top: {}px;", hover.at.x, hover.at.y)
        >
            <p class="font-semibold mb-1">{hover.tooltip.title}</p>
            {hover
                .tooltip
                .lines
                .into_iter()
                .map(|line| view! { <p class=tone_class(line.tone)>{line.text}</p> })
                .collect_view()}
        </div>
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Strong => "font-semibold text-gray-900 dark:text-white",
        Tone::Accent => "font-semibold text-orange-500",
        Tone::Danger => "text-red-500",
        Tone::Success => "text-green-500",
    }
}

/// Legend labels and colors under a chart
fn legend_entries(kind: ChartKind) -> Vec<(&'static str, &'static str)> {
    match kind {
        ChartKind::Pie => DROPOUT_REASONS.iter().map(|s| (s.name, s.color)).collect(),
        ChartKind::Bar => Vec::new(),
        ChartKind::Area => [NO_INTERVENTION, EARLY_COUNSELLING]
            .iter()
            .map(|s| (s.label, s.color))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_uses_display_names() {
        let area = legend_entries(ChartKind::Area);
        assert_eq!(area[0].0, "No Intervention");
        assert_eq!(area[1].0, "Early Counselling");
        assert_eq!(legend_entries(ChartKind::Pie).len(), 5);
        assert!(legend_entries(ChartKind::Bar).is_empty());
    }

    #[test]
    fn test_tone_classes_distinct() {
        let classes = [Tone::Strong, Tone::Accent, Tone::Danger, Tone::Success].map(tone_class);
        for (i, a) in classes.iter().enumerate() {
            assert!(classes[i + 1..].iter().all(|b| a != b));
        }
    }
}
