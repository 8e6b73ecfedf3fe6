//! Pie Layout
//!
//! Turns the dropout-reasons dataset into slice angles, label positions and
//! hit regions. Angles are in degrees, counter-clockwise from 3 o'clock with
//! the y axis pointing up, matching how pie charts are usually specified.
//! Renderers on a y-down canvas negate them.

use crate::geometry::Point;

use super::data::Slice;

/// Slices whose share falls below this fraction get no label text
pub const LABEL_MIN_SHARE: f64 = 0.1;

/// Label radius as a fraction between inner and outer radius
const LABEL_RADIUS_RATIO: f64 = 0.5;

/// A laid-out slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
    /// Share of the total in 0..=1
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Text drawn on top of a slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieLabel {
    pub position: Point,
    pub text: String,
}

/// Full pie geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub slices: Vec<PieSlice>,
}

/// Label text for a share, or nothing below [`LABEL_MIN_SHARE`]
pub fn label_text(percent: f64) -> Option<String> {
    if !percent.is_finite() || percent < LABEL_MIN_SHARE {
        return None;
    }
    Some(format!("{:.0}%", percent * 100.0))
}

impl PieLayout {
    /// Lay out `data` as a full circle around `center`
    ///
    /// Non-positive values get a zero-width slice so indices stay aligned
    /// with the dataset.
    pub fn compute(data: &[Slice], center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        let total: f64 = data.iter().map(|s| s.value.max(0.0)).sum();

        let mut angle = 0.0;
        let slices = data
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let percent = if total > 0.0 {
                    slice.value.max(0.0) / total
                } else {
                    0.0
                };
                let start_angle = angle;
                angle += percent * 360.0;
                PieSlice {
                    index,
                    name: slice.name,
                    value: slice.value,
                    color: slice.color,
                    percent,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect();

        Self {
            center,
            inner_radius,
            outer_radius,
            slices,
        }
    }

    /// Label for one slice, positioned halfway through the ring
    pub fn label(&self, slice: &PieSlice) -> Option<PieLabel> {
        let text = label_text(slice.percent)?;
        let radius =
            self.inner_radius + (self.outer_radius - self.inner_radius) * LABEL_RADIUS_RATIO;
        let rad = (-slice.mid_angle()).to_radians();
        Some(PieLabel {
            position: Point::new(
                self.center.x + radius * rad.cos(),
                self.center.y + radius * rad.sin(),
            ),
            text,
        })
    }

    /// All visible labels
    pub fn labels(&self) -> Vec<PieLabel> {
        self.slices.iter().filter_map(|s| self.label(s)).collect()
    }

    /// Slice under a pointer position, if any
    pub fn hit(&self, p: Point) -> Option<&PieSlice> {
        let dist = p.distance(&self.center);
        if dist > self.outer_radius || dist < self.inner_radius {
            return None;
        }

        // Flip y back to the y-up convention the angles use
        let mut angle = (-(p.y - self.center.y)).atan2(p.x - self.center.x).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }

        self.slices
            .iter()
            .find(|s| s.sweep() > 0.0 && angle >= s.start_angle && angle < s.end_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::DROPOUT_REASONS;

    fn layout() -> PieLayout {
        PieLayout::compute(&DROPOUT_REASONS, Point::new(150.0, 110.0), 0.0, 85.0)
    }

    #[test]
    fn test_slices_cover_full_circle() {
        let pie = layout();
        assert_eq!(pie.slices.len(), 5);
        assert!(pie.slices[0].start_angle.abs() < 1e-9);
        assert!((pie.slices[4].end_angle - 360.0).abs() < 1e-9);
        let total: f64 = pie.slices.iter().map(|s| s.percent).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_text_threshold() {
        assert_eq!(label_text(0.0999), None);
        assert_eq!(label_text(0.1), Some("10%".to_string()));
        assert_eq!(label_text(0.2826), Some("28%".to_string()));
        assert_eq!(label_text(f64::NAN), None);
    }

    #[test]
    fn test_small_slices_have_no_label() {
        let data = [
            Slice { name: "Big", value: 95.0, color: "#000" },
            Slice { name: "Tiny", value: 5.0, color: "#fff" },
        ];
        let pie = PieLayout::compute(&data, Point::new(0.0, 0.0), 0.0, 80.0);

        assert!(pie.label(&pie.slices[0]).is_some());
        assert!(pie.label(&pie.slices[1]).is_none());
        assert_eq!(pie.labels().len(), 1);
    }

    #[test]
    fn test_every_dropout_reason_is_labelled() {
        // The smallest reason is 22 of 184, about 12%
        let pie = layout();
        let labels = pie.labels();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].text, "28%");
        assert_eq!(labels[4].text, "12%");
    }

    #[test]
    fn test_label_sits_on_ring_midpoint() {
        let data = [
            Slice { name: "A", value: 1.0, color: "#000" },
            Slice { name: "B", value: 1.0, color: "#fff" },
        ];
        let pie = PieLayout::compute(&data, Point::new(100.0, 100.0), 20.0, 80.0);
        // First slice spans 0..180, so its label is straight up (canvas y smaller)
        let label = pie.label(&pie.slices[0]).unwrap();
        assert!((label.position.x - 100.0).abs() < 1e-9);
        assert!((label.position.y - 50.0).abs() < 1e-9);
        assert_eq!(label.text, "50%");
    }

    #[test]
    fn test_hit_testing() {
        let pie = layout();
        // Just right of center and slightly above: the first slice starts at 0 degrees
        let hit = pie.hit(Point::new(200.0, 105.0)).unwrap();
        assert_eq!(hit.name, "Emotional Stress");
        // Just below 3 o'clock is the end of the circle: the last slice
        let hit = pie.hit(Point::new(200.0, 115.0)).unwrap();
        assert_eq!(hit.name, "Family Issues");
        // Outside the radius
        assert!(pie.hit(Point::new(300.0, 110.0)).is_none());
    }

    #[test]
    fn test_empty_total() {
        let data = [Slice { name: "Zero", value: 0.0, color: "#000" }];
        let pie = PieLayout::compute(&data, Point::new(0.0, 0.0), 0.0, 10.0);
        assert_eq!(pie.slices[0].percent, 0.0);
        assert!(pie.labels().is_empty());
        assert!(pie.hit(Point::new(1.0, 1.0)).is_none());
    }
}
