//! Area Layout
//!
//! Two cumulative dropout series drawn as monotone cubic curves over a
//! filled area. Monotone interpolation (Fritsch-Carlson) keeps the curve
//! from overshooting between semesters, so a rising series never dips.

use crate::geometry::{Point, Rect};

use super::bar::AxisTick;
use super::data::InterventionPoint;
use super::scale::LinearScale;

/// Display metadata for one area series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const NO_INTERVENTION: SeriesSpec = SeriesSpec {
    key: "noIntervention",
    label: "No Intervention",
    color: "#ea580c",
};

pub const EARLY_COUNSELLING: SeriesSpec = SeriesSpec {
    key: "earlyCounselling",
    label: "Early Counselling",
    color: "#16a34a",
};

/// One cubic Bezier piece, starting where the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// A laid-out series
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSeries {
    pub spec: SeriesSpec,
    pub values: Vec<f64>,
    pub points: Vec<Point>,
    pub segments: Vec<CubicSegment>,
}

/// A category position along the x axis
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: &'static str,
    pub x: f64,
}

/// Full area chart geometry
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLayout {
    pub plot: Rect,
    /// Pixel y of the value-axis minimum, where areas close
    pub baseline: f64,
    pub categories: Vec<Category>,
    pub series: Vec<AreaSeries>,
    pub ticks: Vec<AxisTick>,
}

impl AreaLayout {
    pub fn compute(data: &[InterventionPoint], plot: Rect, domain: (f64, f64)) -> Self {
        let values = LinearScale::new(domain, (plot.bottom(), plot.y));
        let step = if data.len() > 1 {
            plot.width / (data.len() - 1) as f64
        } else {
            0.0
        };

        let categories: Vec<Category> = data
            .iter()
            .enumerate()
            .map(|(i, p)| Category {
                label: p.semester,
                x: if data.len() > 1 {
                    plot.x + step * i as f64
                } else {
                    plot.center().x
                },
            })
            .collect();

        let build = |spec: SeriesSpec, pick: fn(&InterventionPoint) -> f64| {
            let series_values: Vec<f64> = data.iter().map(pick).collect();
            let points: Vec<Point> = categories
                .iter()
                .zip(&series_values)
                .map(|(c, v)| Point::new(c.x, values.map(*v)))
                .collect();
            let segments = monotone_segments(&points);
            AreaSeries {
                spec,
                values: series_values,
                points,
                segments,
            }
        };

        let series = vec![
            build(NO_INTERVENTION, |p| p.no_intervention),
            build(EARLY_COUNSELLING, |p| p.early_counselling),
        ];

        let ticks = values
            .ticks(4)
            .into_iter()
            .map(|value| AxisTick {
                value,
                position: values.map(value),
                label: format!("{}%", value),
            })
            .collect();

        Self {
            plot,
            baseline: values.map(domain.0),
            categories,
            series,
            ticks,
        }
    }

    /// Nearest category to the pointer while it is inside the plot
    pub fn hit(&self, p: Point) -> Option<usize> {
        if !self.plot.contains(p) {
            return None;
        }
        self.categories
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.x - p.x).abs().total_cmp(&(b.x - p.x).abs()))
            .map(|(i, _)| i)
    }
}

/// Cubic segments through `points` with monotone tangents
///
/// Points must be ordered by x. Returns one segment per gap.
pub fn monotone_segments(points: &[Point]) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let widths: Vec<f64> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
    let secants: Vec<f64> = points
        .windows(2)
        .zip(&widths)
        .map(|(w, h)| if *h == 0.0 { 0.0 } else { (w[1].y - w[0].y) / h })
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (a, b) = (secants[i - 1], secants[i]);
        tangents[i] = if a * b <= 0.0 { 0.0 } else { (a + b) / 2.0 };
    }

    // Limit tangents so each piece stays within its endpoints
    for k in 0..n - 1 {
        let s = secants[k];
        if s == 0.0 {
            tangents[k] = 0.0;
            tangents[k + 1] = 0.0;
            continue;
        }
        let alpha = tangents[k] / s;
        let beta = tangents[k + 1] / s;
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            tangents[k] = tau * alpha * s;
            tangents[k + 1] = tau * beta * s;
        }
    }

    (0..n - 1)
        .map(|k| {
            let (p0, p1) = (points[k], points[k + 1]);
            let third = widths[k] / 3.0;
            CubicSegment {
                c1: Point::new(p0.x + third, p0.y + tangents[k] * third),
                c2: Point::new(p1.x - third, p1.y - tangents[k + 1] * third),
                to: p1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::{INTERVENTION_DOMAIN, INTERVENTION_TREND};

    fn layout() -> AreaLayout {
        AreaLayout::compute(&INTERVENTION_TREND, Rect::new(50.0, 10.0, 250.0, 180.0), INTERVENTION_DOMAIN)
    }

    #[test]
    fn test_points_span_plot_width() {
        let chart = layout();
        assert_eq!(chart.categories.len(), 6);
        assert!((chart.categories[0].x - 50.0).abs() < 1e-9);
        assert!((chart.categories[5].x - 300.0).abs() < 1e-9);
        assert!((chart.baseline - 190.0).abs() < 1e-9);

        let no = &chart.series[0];
        assert_eq!(no.spec.label, "No Intervention");
        // 45% maps to the top of the plot, 0% to the baseline
        assert!((no.points[0].y - (190.0 - 12.0 / 45.0 * 180.0)).abs() < 1e-9);
        assert_eq!(no.segments.len(), 5);
    }

    #[test]
    fn test_no_overshoot() {
        let chart = layout();
        for series in &chart.series {
            for (k, seg) in series.segments.iter().enumerate() {
                let (lo, hi) = {
                    let (a, b) = (series.points[k].y, series.points[k + 1].y);
                    (a.min(b), a.max(b))
                };
                for c in [seg.c1.y, seg.c2.y] {
                    assert!(c >= lo - 1e-9 && c <= hi + 1e-9, "control {} outside {}..{}", c, lo, hi);
                }
            }
        }
    }

    #[test]
    fn test_flat_run_stays_flat() {
        let points = [
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ];
        let segments = monotone_segments(&points);
        assert!((segments[0].c1.y - 10.0).abs() < 1e-9);
        assert!((segments[0].c2.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_are_percentages() {
        let chart = layout();
        let labels: Vec<_> = chart.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "10%", "20%", "30%", "40%"]);
    }

    #[test]
    fn test_hit_nearest_category() {
        let chart = layout();
        assert_eq!(chart.hit(Point::new(60.0, 100.0)), Some(0));
        assert_eq!(chart.hit(Point::new(150.0, 100.0)), Some(2));
        assert_eq!(chart.hit(Point::new(299.0, 20.0)), Some(5));
        assert_eq!(chart.hit(Point::new(10.0, 100.0)), None);
    }

    #[test]
    fn test_single_point() {
        assert!(monotone_segments(&[Point::new(1.0, 1.0)]).is_empty());
    }
}
