//! Charts
//!
//! Static datasets and the geometry for the three chart cards. Layout is
//! computed here in plain Rust; the browser build only paints the result.
//!
//! ## Components
//!
//! - [`data`]: Immutable datasets
//! - [`scale`]: Linear and band scales
//! - [`pie`]: Dropout-reasons pie (slice angles, labels, hit testing)
//! - [`bar`]: Counselor-ratio bars
//! - [`area`]: Intervention-impact monotone area curves
//! - [`tooltip`]: Hover tooltip text
//! - [`carousel`]: Endless card strip timing

pub mod area;
pub mod bar;
pub mod carousel;
pub mod data;
pub mod pie;
pub mod scale;
pub mod tooltip;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;
use crate::geometry::{Point, Rect};

pub use area::{AreaLayout, AreaSeries, CubicSegment};
pub use bar::{AxisTick, BarLayout, BarShape};
pub use carousel::{Carousel, CarouselSpeed, ScrollDirection};
pub use data::{
    InterventionPoint, RatioBar, Slice, COUNSELOR_RATIOS, DROPOUT_REASONS, INTERVENTION_DOMAIN,
    INTERVENTION_TREND, RATIO_DOMAIN,
};
pub use pie::{label_text, PieLabel, PieLayout, PieSlice, LABEL_MIN_SHARE};
pub use tooltip::{Tooltip, TooltipLine, Tone};

/// Which chart a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Pie, ChartKind::Bar, ChartKind::Area];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Area => "area",
        }
    }

    /// Card heading, subtitle and source line
    pub fn card(&self) -> ChartCard {
        match self {
            ChartKind::Pie => ChartCard {
                kind: *self,
                title: "Top Dropout Reasons",
                subtitle: "% of students citing each factor",
                source: "Source: Gallup / Lumina Foundation, 2023",
                glyph: "📉",
                accent: "orange",
            },
            ChartKind::Bar => ChartCard {
                kind: *self,
                title: "Counselor-to-Student Ratio",
                subtitle: "Students per counselor by tier",
                source: "Source: ASCA National Report, 2023",
                glyph: "👥",
                accent: "purple",
            },
            ChartKind::Area => ChartCard {
                kind: *self,
                title: "Impact of Early Counselling",
                subtitle: "Cumulative dropout % over 6 semesters",
                source: "Source: National Center for Education Statistics",
                glyph: "💓",
                accent: "green",
            },
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(ChartKind::Pie),
            "bar" => Ok(ChartKind::Bar),
            "area" => Ok(ChartKind::Area),
            other => Err(SiteError::UnknownChart(other.to_string())),
        }
    }
}

/// Static text around a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCard {
    pub kind: ChartKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub source: &'static str,
    pub glyph: &'static str,
    /// Tailwind color family of the icon badge
    pub accent: &'static str,
}

/// Outer size of the drawing area inside every card (CSS pixels)
pub const CHART_WIDTH: f64 = 312.0;
pub const CHART_HEIGHT: f64 = 240.0;

/// Pie outer radius in pixels
pub const PIE_RADIUS: f64 = 85.0;

/// Plot rectangle for the cartesian charts inside a drawing area
///
/// Leaves room for the value axis on the left and category labels below.
pub fn cartesian_plot(width: f64, height: f64) -> Rect {
    let (top, right, bottom, left) = (10.0, 10.0, 35.0, 50.0);
    Rect::new(
        left,
        top,
        (width - left - right).max(0.0),
        (height - top - bottom).max(0.0),
    )
}

/// Pie center inside a drawing area, leaving room for the legend below
pub fn pie_center(width: f64, height: f64) -> Point {
    Point::new(width * 0.5, height * 0.45)
}
