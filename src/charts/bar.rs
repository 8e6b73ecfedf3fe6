//! Bar Layout
//!
//! Counselor-to-student ratio bars on a fixed 0..800 value axis.

use crate::geometry::{Point, Rect};

use super::data::RatioBar;
use super::scale::{BandScale, LinearScale};

/// Fixed bar width in pixels
pub const BAR_SIZE: f64 = 44.0;

/// Corner radius of the top two corners
pub const BAR_RADIUS: f64 = 6.0;

const BAND_PADDING: f64 = 0.1;

/// A laid-out bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub index: usize,
    pub label: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub rect: Rect,
    /// Where the category label is drawn under the axis
    pub label_anchor: Point,
}

/// A value-axis tick
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the axis
    pub position: f64,
    pub label: String,
}

/// Full bar chart geometry inside a plot rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub plot: Rect,
    pub bars: Vec<BarShape>,
    pub ticks: Vec<AxisTick>,
    bands: BandScale,
}

impl BarLayout {
    pub fn compute(data: &[RatioBar], plot: Rect, domain: (f64, f64)) -> Self {
        let bands = BandScale::new(data.len(), (plot.x, plot.right()), BAND_PADDING);
        let values = LinearScale::new(domain, (plot.bottom(), plot.y));
        let width = BAR_SIZE.min(bands.bandwidth());

        let bars = data
            .iter()
            .enumerate()
            .map(|(index, datum)| {
                let top = values.map(datum.students.clamp(domain.0, domain.1));
                let center = bands.center(index);
                BarShape {
                    index,
                    label: datum.name,
                    value: datum.students,
                    fill: datum.fill,
                    rect: Rect::new(center - width / 2.0, top, width, plot.bottom() - top),
                    label_anchor: Point::new(center, plot.bottom() + 16.0),
                }
            })
            .collect();

        let ticks = values
            .ticks(4)
            .into_iter()
            .map(|value| AxisTick {
                value,
                position: values.map(value),
                label: format!("{}", value),
            })
            .collect();

        Self {
            plot,
            bars,
            ticks,
            bands,
        }
    }

    /// Bar whose band lies under the pointer, anywhere in the plot height
    pub fn hit(&self, p: Point) -> Option<&BarShape> {
        if p.y < self.plot.y || p.y > self.plot.bottom() {
            return None;
        }
        self.bands.index_at(p.x).and_then(|i| self.bars.get(i))
    }
}
