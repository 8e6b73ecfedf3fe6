//! Scroll-Triggered Entrance Animations
//!
//! Sections fade and slide their cards in the first time they scroll into
//! view. A [`RevealTrigger`] is the per-mount state machine: it watches the
//! section geometry, fires once when the start threshold is crossed and then
//! stays shown for the rest of the mount. The animation itself is a CSS
//! transition built from an [`Entrance`].
//!
//! Start thresholds use the `"<element edge> <viewport anchor>[+=|-=px]"`
//! notation, e.g. `"top center+=100"`: fire once the element's top edge is
//! above the viewport center plus 100 px.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// Edge of the observed element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }

    fn fraction(&self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

/// Reference line in the viewport, as a fraction of its height from the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor(pub f64);

impl Anchor {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Anchor(0.0)),
            "center" => Some(Anchor(0.5)),
            "bottom" => Some(Anchor(1.0)),
            pct => pct
                .strip_suffix('%')
                .and_then(|n| n.parse::<f64>().ok())
                .map(|n| Anchor(n / 100.0)),
        }
    }
}

/// Where an entrance starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerStart {
    pub element: Edge,
    pub viewport: Anchor,
    /// Pixels added to the viewport anchor (down is positive)
    pub offset: f64,
}

impl TriggerStart {
    /// Viewport y (from the top) the element edge has to reach
    pub fn threshold(&self, viewport_height: f64) -> f64 {
        viewport_height * self.viewport.0 + self.offset
    }

    /// Whether the element has scrolled far enough to start
    pub fn is_reached(&self, geometry: &ViewportGeometry) -> bool {
        let edge = geometry.element_top + geometry.element_height * self.element.fraction();
        edge <= self.threshold(geometry.viewport_height)
    }
}

impl FromStr for TriggerStart {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SiteError::InvalidTrigger {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split_whitespace();
        let (Some(edge), Some(anchor), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected \"<edge> <anchor>\""));
        };

        let element = Edge::parse(edge).ok_or_else(|| invalid("unknown element edge"))?;

        let (anchor, offset) = match anchor.find(['+', '-']) {
            Some(at) => {
                let (name, rest) = anchor.split_at(at);
                let sign = if rest.starts_with('+') { 1.0 } else { -1.0 };
                let amount = rest
                    .get(1..)
                    .and_then(|r| r.strip_prefix('='))
                    .ok_or_else(|| invalid("offset must be written as += or -="))?
                    .parse::<f64>()
                    .map_err(|_| invalid("offset is not a number"))?;
                (name, sign * amount)
            }
            None => (anchor, 0.0),
        };
        let viewport = Anchor::parse(anchor).ok_or_else(|| invalid("unknown viewport anchor"))?;

        Ok(TriggerStart {
            element,
            viewport,
            offset,
        })
    }
}

impl fmt::Display for TriggerStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.element {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{} ", edge)?;
        match self.viewport.0 {
            v if v == 0.0 => write!(f, "top")?,
            v if v == 0.5 => write!(f, "center")?,
            v if v == 1.0 => write!(f, "bottom")?,
            v => write!(f, "{}%", v * 100.0)?,
        }
        if self.offset > 0.0 {
            write!(f, "+={}", self.offset)?;
        } else if self.offset < 0.0 {
            write!(f, "-={}", -self.offset)?;
        }
        Ok(())
    }
}

/// Section position relative to the viewport, as read from the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    /// Element top relative to the viewport top
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Strong deceleration, `1 - (1 - t)^3`
    Power3Out,
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// CSS timing function approximating the curve
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

/// A one-shot staggered entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub start: TriggerStart,
    /// Starting offset in pixels, animated to zero
    pub from_x: f64,
    pub from_y: f64,
    /// Seconds per element
    pub duration: f64,
    /// Seconds between consecutive elements
    pub stagger: f64,
    pub ease: Ease,
}

const CENTER_PLUS_100: TriggerStart = TriggerStart {
    element: Edge::Top,
    viewport: Anchor(0.5),
    offset: 100.0,
};

impl Entrance {
    /// About section cards
    pub fn about() -> Self {
        Self {
            start: CENTER_PLUS_100,
            from_x: 0.0,
            from_y: 60.0,
            duration: 0.8,
            stagger: 0.2,
            ease: Ease::Power3Out,
        }
    }

    /// Feature cards
    pub fn features() -> Self {
        Self {
            stagger: 0.15,
            ..Self::about()
        }
    }

    /// Workflow steps slide in from the left
    pub fn workflow() -> Self {
        Self {
            from_x: -60.0,
            from_y: 0.0,
            ..Self::about()
        }
    }

    /// Chart carousel heading
    pub fn chart_header() -> Self {
        Self {
            start: TriggerStart {
                offset: 150.0,
                ..CENTER_PLUS_100
            },
            from_x: 0.0,
            from_y: 40.0,
            duration: 0.7,
            stagger: 0.0,
            ease: Ease::Power3Out,
        }
    }

    /// Seconds before element `index` starts moving
    pub fn delay(&self, index: usize) -> f64 {
        self.stagger * index as f64
    }

    /// Seconds until the last of `count` elements settles
    pub fn total_duration(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.delay(count - 1) + self.duration
    }

    /// Eased progress of element `index`, `t` seconds after the trigger fired
    pub fn progress(&self, index: usize, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return if t >= self.delay(index) { 1.0 } else { 0.0 };
        }
        self.ease.apply((t - self.delay(index)) / self.duration)
    }

    /// Inline style before the entrance plays
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: 0; transform: translate3d({}px, {}px, 0px);",
            self.from_x, self.from_y
        )
    }

    /// Inline style that transitions element `index` to its final state
    pub fn shown_style(&self, index: usize) -> String {
        let delay = self.delay(index);
        format!(
            "opacity: 1; transform: none; transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
            d = self.duration,
            e = self.ease.css(),
            delay = delay,
        )
    }
}

/// Lifecycle of a trigger within one mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for the section to scroll in
    Armed,
    /// Fired; elements are (or were) transitioning in
    Played,
    /// Animations unavailable; content shown as-is
    Static,
}

/// Returned once, when an entrance fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPlay {
    pub entrance: Entrance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrigger {
    entrance: Entrance,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            state: RevealState::Armed,
        }
    }

    /// Trigger that starts, and stays, in the final visible state
    pub fn disabled(entrance: Entrance) -> Self {
        Self {
            entrance,
            state: RevealState::Static,
        }
    }

    /// Armed when animations are enabled, static otherwise
    pub fn with_enabled(entrance: Entrance, enabled: bool) -> Self {
        if enabled {
            Self::new(entrance)
        } else {
            Self::disabled(entrance)
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    /// Elements should be visible (or on their way)
    pub fn is_shown(&self) -> bool {
        self.state != RevealState::Armed
    }

    /// Feed the latest geometry. Fires at most once per trigger.
    pub fn observe(&mut self, geometry: &ViewportGeometry) -> Option<RevealPlay> {
        if self.state != RevealState::Armed || !self.entrance.start.is_reached(geometry) {
            return None;
        }
        self.state = RevealState::Played;
        tracing::debug!("Entrance fired at {}", self.entrance.start);
        Some(RevealPlay {
            entrance: self.entrance,
        })
    }

    /// Hide the elements again so the next observation replays the entrance
    ///
    /// Used when a section swaps its elements for a new set. Only a trigger
    /// that has already played is re-armed; returns whether it was.
    pub fn rearm(&mut self) -> bool {
        if self.state != RevealState::Played {
            return false;
        }
        self.state = RevealState::Armed;
        true
    }

    /// Inline style for element `index` in the current state
    pub fn style(&self, index: usize) -> String {
        match self.state {
            RevealState::Armed => self.entrance.hidden_style(),
            RevealState::Played => self.entrance.shown_style(index),
            RevealState::Static => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64) -> ViewportGeometry {
        ViewportGeometry {
            element_top: top,
            element_height: 800.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_parse_trigger_start() {
        let start: TriggerStart = "top center+=100".parse().unwrap();
        assert_eq!(start, CENTER_PLUS_100);
        assert!((start.threshold(1000.0) - 600.0).abs() < 1e-9);

        let start: TriggerStart = "bottom 80%-=20".parse().unwrap();
        assert_eq!(start.element, Edge::Bottom);
        assert!((start.threshold(1000.0) - 780.0).abs() < 1e-9);

        let start: TriggerStart = "center top".parse().unwrap();
        assert_eq!(start.offset, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "top", "left center", "top middle", "top center+100", "top center+=x", "top center bottom"] {
            assert!(
                matches!(bad.parse::<TriggerStart>(), Err(SiteError::InvalidTrigger { .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips_presets() {
        assert_eq!(Entrance::about().start.to_string(), "top center+=100");
        assert_eq!(Entrance::chart_header().start.to_string(), "top center+=150");
    }

    #[test]
    fn test_plays_exactly_once() {
        let mut trigger = RevealTrigger::new(Entrance::about());
        assert!(trigger.observe(&at(900.0)).is_none());
        assert!(!trigger.is_shown());

        assert!(trigger.observe(&at(550.0)).is_some());
        assert!(trigger.observe(&at(100.0)).is_none());
        // Scrolling back out and in again does not replay
        assert!(trigger.observe(&at(2000.0)).is_none());
        assert!(trigger.observe(&at(0.0)).is_none());
        assert_eq!(trigger.state(), RevealState::Played);
    }

    #[test]
    fn test_disabled_is_static() {
        let mut trigger = RevealTrigger::with_enabled(Entrance::features(), false);
        assert!(trigger.is_shown());
        assert!(trigger.observe(&at(0.0)).is_none());
        assert_eq!(trigger.style(3), "");
    }

    #[test]
    fn test_styles() {
        let mut trigger = RevealTrigger::new(Entrance::workflow());
        assert_eq!(
            trigger.style(0),
            "opacity: 0; transform: translate3d(-60px, 0px, 0px);"
        );
        trigger.observe(&at(0.0));
        assert!(trigger.style(2).contains("transform 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) 0.4s"));
    }

    #[test]
    fn test_progress_staggers() {
        let entrance = Entrance::about();
        assert_eq!(entrance.progress(0, 0.0), 0.0);
        assert!((entrance.progress(0, 0.8) - 1.0).abs() < 1e-9);
        assert_eq!(entrance.progress(2, 0.3), 0.0);
        assert!(entrance.progress(1, 0.4) > 0.5);
        assert!((entrance.total_duration(3) - 1.2).abs() < 1e-9);
        assert!((Entrance::features().total_duration(6) - (0.75 + 0.8)).abs() < 1e-9);
    }

    #[test]
    fn test_rearmed_trigger_replays_once() {
        let mut trigger = RevealTrigger::new(Entrance::features());
        assert!(!trigger.rearm());

        assert!(trigger.observe(&at(200.0)).is_some());
        assert!(trigger.rearm());
        assert_eq!(trigger.state(), RevealState::Armed);
        assert_eq!(trigger.style(1), Entrance::features().hidden_style());

        // Still past the start line, so the next observation fires at once
        assert!(trigger.observe(&at(200.0)).is_some());
        assert!(trigger.style(1).contains("0.15s"));
        assert!(trigger.observe(&at(100.0)).is_none());
        assert!(trigger.observe(&at(-400.0)).is_none());
    }

    #[test]
    fn test_static_trigger_ignores_rearm() {
        let mut trigger = RevealTrigger::disabled(Entrance::features());
        assert!(!trigger.rearm());
        assert!(trigger.is_shown());
        assert_eq!(trigger.style(0), "");
    }
}
