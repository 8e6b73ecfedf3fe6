//! Tooltip content for the chart cards.

use super::area::{EARLY_COUNSELLING, NO_INTERVENTION};
use super::data::{InterventionPoint, RatioBar};
use super::pie::PieSlice;

/// Text color classes used by tooltip lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Accent,
    Danger,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub tone: Tone,
}

/// Contents of a hover tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn line(mut self, text: String, tone: Tone) -> Self {
        self.lines.push(TooltipLine { text, tone });
        self
    }
}

pub fn pie_tooltip(slice: &PieSlice) -> Tooltip {
    Tooltip::new(slice.name).line(format!("{}%", slice.value), Tone::Accent)
}

pub fn bar_tooltip(bar: &RatioBar) -> Tooltip {
    Tooltip::new(bar.name).line(format!("{} students", bar.students), Tone::Strong)
}

pub fn area_tooltip(point: &InterventionPoint) -> Tooltip {
    Tooltip::new(point.semester)
        .line(
            format!("{}: {}%", NO_INTERVENTION.label, point.no_intervention),
            Tone::Danger,
        )
        .line(
            format!("{}: {}%", EARLY_COUNSELLING.label, point.early_counselling),
            Tone::Success,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::{COUNSELOR_RATIOS, DROPOUT_REASONS, INTERVENTION_TREND};
    use crate::charts::pie::PieLayout;
    use crate::geometry::Point;

    #[test]
    fn test_pie_tooltip_shows_raw_percentage() {
        let pie = PieLayout::compute(&DROPOUT_REASONS, Point::new(0.0, 0.0), 0.0, 85.0);
        let tip = pie_tooltip(&pie.slices[0]);
        assert_eq!(tip.title, "Emotional Stress");
        assert_eq!(tip.lines[0].text, "52%");
    }

    #[test]
    fn test_bar_tooltip() {
        let tip = bar_tooltip(&COUNSELOR_RATIOS[1]);
        assert_eq!(tip.title, "U.S. Average");
        assert_eq!(tip.lines[0].text, "385 students");
    }

    #[test]
    fn test_area_tooltip() {
        let tip = area_tooltip(&INTERVENTION_TREND[0]);
        assert_eq!(tip.title, "S1");
        assert_eq!(tip.lines[0].text, "No Intervention: 12%");
        assert_eq!(tip.lines[1].text, "Early Counselling: 4%");
        assert_eq!(tip.lines[1].tone, Tone::Success);
    }
}
