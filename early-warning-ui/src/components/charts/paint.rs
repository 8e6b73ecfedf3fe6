//! Chart painting
//!
//! Layouts come from `early_warning::charts`; this module only turns them
//! into canvas calls and maps pointer hits to tooltips.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use early_warning::charts::tooltip::{area_tooltip, bar_tooltip, pie_tooltip};
use early_warning::charts::{
    bar::BAR_RADIUS, cartesian_plot, pie_center, AreaLayout, AreaSeries, AxisTick, BarLayout, ChartKind,
    PieLayout, Tooltip, CHART_HEIGHT, CHART_WIDTH, COUNSELOR_RATIOS, DROPOUT_REASONS,
    INTERVENTION_DOMAIN, INTERVENTION_TREND, PIE_RADIUS, RATIO_DOMAIN,
};
use early_warning::{Point, Rect};

use crate::browser::canvas::{context_2d, fit_canvas};

/// Extra radius of the hovered pie slice
const ACTIVE_SLICE_OFFSET: f64 = 6.0;

struct Palette {
    text: &'static str,
    grid: &'static str,
    surface: &'static str,
}

impl Palette {
    fn new(dark: bool) -> Self {
        if dark {
            Self {
                text: "#9ca3af",
                grid: "#374151",
                surface: "#111827",
            }
        } else {
            Self {
                text: "#6b7280",
                grid: "#e5e7eb",
                surface: "#ffffff",
            }
        }
    }
}

pub fn pie_layout() -> PieLayout {
    PieLayout::compute(
        &DROPOUT_REASONS,
        pie_center(CHART_WIDTH, CHART_HEIGHT),
        0.0,
        PIE_RADIUS,
    )
}

pub fn bar_layout() -> BarLayout {
    BarLayout::compute(
        &COUNSELOR_RATIOS,
        cartesian_plot(CHART_WIDTH, CHART_HEIGHT),
        RATIO_DOMAIN,
    )
}

pub fn area_layout() -> AreaLayout {
    AreaLayout::compute(
        &INTERVENTION_TREND,
        cartesian_plot(CHART_WIDTH, CHART_HEIGHT),
        INTERVENTION_DOMAIN,
    )
}

/// Datum under the pointer and its tooltip
pub fn hit(kind: ChartKind, pointer: Point) -> Option<(usize, Tooltip)> {
    match kind {
        ChartKind::Pie => pie_layout()
            .hit(pointer)
            .map(|slice| (slice.index, pie_tooltip(slice))),
        ChartKind::Bar => bar_layout().hit(pointer).and_then(|bar| {
            COUNSELOR_RATIOS
                .get(bar.index)
                .map(|datum| (bar.index, bar_tooltip(datum)))
        }),
        ChartKind::Area => area_layout().hit(pointer).and_then(|index| {
            INTERVENTION_TREND
                .get(index)
                .map(|datum| (index, area_tooltip(datum)))
        }),
    }
}

/// Redraw a chart card's canvas, highlighting datum `active`
pub fn draw(kind: ChartKind, canvas: &HtmlCanvasElement, active: Option<usize>, dark: bool) {
    let Some(ctx) = context_2d(canvas) else {
        tracing::warn!("Canvas 2D context unavailable for {} chart", kind);
        return;
    };
    fit_canvas(canvas, &ctx, CHART_WIDTH, CHART_HEIGHT);
    ctx.clear_rect(0.0, 0.0, CHART_WIDTH, CHART_HEIGHT);

    let palette = Palette::new(dark);
    let result = match kind {
        ChartKind::Pie => draw_pie(&ctx, &pie_layout(), active, &palette),
        ChartKind::Bar => draw_bars(&ctx, &bar_layout(), active, &palette),
        ChartKind::Area => draw_area(&ctx, &area_layout(), active, &palette),
    };
    if let Err(err) = result {
        tracing::warn!("Failed to draw {} chart: {:?}", kind, err);
    }
}

fn draw_pie(
    ctx: &CanvasRenderingContext2d,
    layout: &PieLayout,
    active: Option<usize>,
    palette: &Palette,
) -> Result<(), JsValue> {
    let c = layout.center;
    for slice in &layout.slices {
        if slice.sweep() <= 0.0 {
            continue;
        }
        let radius = if active == Some(slice.index) {
            layout.outer_radius + ACTIVE_SLICE_OFFSET
        } else {
            layout.outer_radius
        };
        ctx.begin_path();
        ctx.move_to(c.x, c.y);
        // y-down canvas: negate the counter-clockwise angles
        ctx.arc_with_anticlockwise(
            c.x,
            c.y,
            radius,
            -slice.start_angle.to_radians(),
            -slice.end_angle.to_radians(),
            true,
        )?;
        ctx.close_path();
        ctx.set_fill_style(&JsValue::from_str(slice.color));
        ctx.fill();
        ctx.set_stroke_style(&JsValue::from_str(palette.surface));
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    ctx.set_fill_style(&JsValue::from_str("#ffffff"));
    ctx.set_font("bold 12px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for label in layout.labels() {
        ctx.fill_text(&label.text, label.position.x, label.position.y)?;
    }
    Ok(())
}

fn draw_value_axis(
    ctx: &CanvasRenderingContext2d,
    plot: Rect,
    ticks: &[AxisTick],
    palette: &Palette,
) -> Result<(), JsValue> {
    ctx.set_stroke_style(&JsValue::from_str(palette.grid));
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&JsValue::from_str(palette.text));
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in ticks {
        ctx.begin_path();
        ctx.move_to(plot.x, tick.position);
        ctx.line_to(plot.right(), tick.position);
        ctx.stroke();
        ctx.fill_text(&tick.label, plot.x - 8.0, tick.position)?;
    }
    Ok(())
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    layout: &BarLayout,
    active: Option<usize>,
    palette: &Palette,
) -> Result<(), JsValue> {
    draw_value_axis(ctx, layout.plot, &layout.ticks, palette)?;

    for bar in &layout.bars {
        let dimmed = active.is_some_and(|index| index != bar.index);
        ctx.set_global_alpha(if dimmed { 0.5 } else { 1.0 });
        rounded_top_rect(ctx, bar.rect, BAR_RADIUS);
        ctx.set_fill_style(&JsValue::from_str(bar.fill));
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);

    ctx.set_fill_style(&JsValue::from_str(palette.text));
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    for bar in &layout.bars {
        ctx.fill_text(bar.label, bar.label_anchor.x, bar.label_anchor.y)?;
    }
    Ok(())
}

fn rounded_top_rect(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) {
    let r = radius.min(rect.width / 2.0).min(rect.height).max(0.0);
    ctx.begin_path();
    ctx.move_to(rect.x, rect.bottom());
    ctx.line_to(rect.x, rect.y + r);
    ctx.quadratic_curve_to(rect.x, rect.y, rect.x + r, rect.y);
    ctx.line_to(rect.right() - r, rect.y);
    ctx.quadratic_curve_to(rect.right(), rect.y, rect.right(), rect.y + r);
    ctx.line_to(rect.right(), rect.bottom());
    ctx.close_path();
}

fn draw_area(
    ctx: &CanvasRenderingContext2d,
    layout: &AreaLayout,
    active: Option<usize>,
    palette: &Palette,
) -> Result<(), JsValue> {
    draw_value_axis(ctx, layout.plot, &layout.ticks, palette)?;

    if let Some(category) = active.and_then(|index| layout.categories.get(index)) {
        ctx.set_stroke_style(&JsValue::from_str(palette.text));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(category.x, layout.plot.y);
        ctx.line_to(category.x, layout.baseline);
        ctx.stroke();
    }

    for series in &layout.series {
        let (Some(first), Some(last)) = (series.points.first(), series.points.last()) else {
            continue;
        };
        let color = JsValue::from_str(series.spec.color);

        // Area down to the baseline
        trace_curve(ctx, *first, series);
        ctx.line_to(last.x, layout.baseline);
        ctx.line_to(first.x, layout.baseline);
        ctx.close_path();
        ctx.set_global_alpha(0.2);
        ctx.set_fill_style(&color);
        ctx.fill();
        ctx.set_global_alpha(1.0);

        trace_curve(ctx, *first, series);
        ctx.set_stroke_style(&color);
        ctx.set_line_width(2.0);
        ctx.stroke();

        for (index, point) in series.points.iter().enumerate() {
            let radius = if active == Some(index) { 5.0 } else { 3.0 };
            ctx.begin_path();
            ctx.arc(point.x, point.y, radius, 0.0, TAU)?;
            ctx.fill();
        }
    }

    ctx.set_fill_style(&JsValue::from_str(palette.text));
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for category in &layout.categories {
        ctx.fill_text(category.label, category.x, layout.plot.bottom() + 8.0)?;
    }
    Ok(())
}

fn trace_curve(ctx: &CanvasRenderingContext2d, start: Point, series: &AreaSeries) {
    ctx.begin_path();
    ctx.move_to(start.x, start.y);
    for segment in &series.segments {
        ctx.bezier_curve_to(
            segment.c1.x,
            segment.c1.y,
            segment.c2.x,
            segment.c2.y,
            segment.to.x,
            segment.to.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_pie_center_ring() {
        let layout = pie_layout();
        let inside = Point::new(layout.center.x + 20.0, layout.center.y - 5.0);
        let (index, tooltip) = hit(ChartKind::Pie, inside).unwrap();
        assert_eq!(tooltip.title, DROPOUT_REASONS[index].name);
        assert!(hit(ChartKind::Pie, Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_hit_bar_gives_student_count() {
        let layout = bar_layout();
        let bar = &layout.bars[1];
        let (index, tooltip) = hit(ChartKind::Bar, bar.rect.center()).unwrap();
        assert_eq!(index, 1);
        assert_eq!(tooltip.lines[0].text, "385 students");
    }

    #[test]
    fn test_hit_area_nearest_semester() {
        let layout = area_layout();
        let x = layout.categories[0].x + 1.0;
        let (index, tooltip) = hit(ChartKind::Area, Point::new(x, layout.plot.center().y)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(tooltip.title, "S1");
        assert_eq!(tooltip.lines[1].text, "Early Counselling: 4%");
    }
}
