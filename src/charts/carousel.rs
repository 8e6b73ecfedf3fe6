//! Chart carousel
//!
//! The chart cards scroll endlessly sideways. The card strip is rendered
//! twice back to back and translated by half its width per cycle, so the
//! end of one cycle lines up with the start of the next.

use serde::{Deserialize, Serialize};

/// Scroll direction of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

/// Carousel cycle speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselSpeed {
    Fast,
    Normal,
    #[default]
    Slow,
}

impl CarouselSpeed {
    /// Seconds for one full cycle
    pub fn duration_secs(&self) -> u32 {
        match self {
            CarouselSpeed::Fast => 2,
            CarouselSpeed::Normal => 40,
            CarouselSpeed::Slow => 60,
        }
    }
}

/// Number of copies of the card strip rendered
pub const STRIP_COPIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    pub direction: ScrollDirection,
    pub speed: CarouselSpeed,
}

impl Carousel {
    pub fn new(direction: ScrollDirection, speed: CarouselSpeed) -> Self {
        Self { direction, speed }
    }

    /// Keyframes name defined in the stylesheet
    pub fn keyframes(&self) -> &'static str {
        match self.direction {
            ScrollDirection::Left => "scrollLeft",
            ScrollDirection::Right => "scrollRight",
        }
    }

    /// Inline `animation` value, or `none` before the strip has started
    pub fn animation_css(&self, started: bool) -> String {
        if !started {
            return "none".to_string();
        }
        format!(
            "{} {}s linear infinite",
            self.keyframes(),
            self.speed.duration_secs()
        )
    }

    /// Inline style for the strip: running, or parked where the animation
    /// would start
    pub fn strip_style(&self, started: bool) -> String {
        if started {
            return format!("animation: {};", self.animation_css(true));
        }
        // `+ 0.0` folds -0 into 0
        let percent = self.offset_at(0.0) * 100.0 + 0.0;
        format!("animation: none; transform: translateX({}%);", percent)
    }

    /// Horizontal offset of the strip, as a fraction of its full width,
    /// after `elapsed` seconds
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        let duration = self.speed.duration_secs() as f64;
        let phase = (elapsed / duration).rem_euclid(1.0);
        let half = 1.0 / STRIP_COPIES as f64;
        match self.direction {
            ScrollDirection::Left => -half * phase,
            ScrollDirection::Right => -half * (1.0 - phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_css() {
        let carousel = Carousel::new(ScrollDirection::Left, CarouselSpeed::Slow);
        assert_eq!(carousel.animation_css(false), "none");
        assert_eq!(carousel.animation_css(true), "scrollLeft 60s linear infinite");

        let carousel = Carousel::new(ScrollDirection::Right, CarouselSpeed::Fast);
        assert_eq!(carousel.animation_css(true), "scrollRight 2s linear infinite");
    }

    #[test]
    fn test_strip_style_parks_at_start() {
        let left = Carousel::new(ScrollDirection::Left, CarouselSpeed::Slow);
        assert_eq!(left.strip_style(false), "animation: none; transform: translateX(0%);");
        assert_eq!(left.strip_style(true), "animation: scrollLeft 60s linear infinite;");

        let right = Carousel::new(ScrollDirection::Right, CarouselSpeed::Slow);
        assert_eq!(right.strip_style(false), "animation: none; transform: translateX(-50%);");
    }

    #[test]
    fn test_offset_loops_seamlessly() {
        let carousel = Carousel::new(ScrollDirection::Left, CarouselSpeed::Normal);
        assert!(carousel.offset_at(0.0).abs() < 1e-9);
        assert!((carousel.offset_at(20.0) + 0.25).abs() < 1e-9);
        // One full cycle later the strip is back where it started
        assert!((carousel.offset_at(40.0) - carousel.offset_at(0.0)).abs() < 1e-9);

        let right = Carousel::new(ScrollDirection::Right, CarouselSpeed::Normal);
        assert!((right.offset_at(0.0) + 0.5).abs() < 1e-9);
        assert!((right.offset_at(20.0) + 0.25).abs() < 1e-9);
    }
}
