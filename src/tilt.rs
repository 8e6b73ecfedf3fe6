//! Pointer tilt for the alert card.
//!
//! The card rotates toward the pointer while hovered and layers inside it
//! lift towards the viewer by their own depth.

use crate::geometry::{Point, Rect};

/// Pixels of pointer travel per degree of rotation
pub const TILT_DIVISOR: f64 = 25.0;

/// CSS perspective of the card container
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// Current tilt of a card
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltCard {
    /// Rotation around the y axis in degrees, from horizontal pointer offset
    pub rotate_y: f64,
    /// Rotation around the x axis in degrees, from vertical pointer offset
    pub rotate_x: f64,
    pub hovered: bool,
}

impl TiltCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Track the pointer over the card's bounding rect
    pub fn pointer_move(&mut self, pointer: Point, rect: Rect) {
        let center = rect.center();
        self.rotate_y = (pointer.x - center.x) / TILT_DIVISOR;
        self.rotate_x = (pointer.y - center.y) / TILT_DIVISOR;
    }

    /// Pointer left: flatten the card
    pub fn leave(&mut self) {
        self.hovered = false;
        self.rotate_y = 0.0;
        self.rotate_x = 0.0;
    }

    /// Inline `transform` of the card body
    pub fn transform(&self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.rotate_y, self.rotate_x)
    }

    /// Inline `transform` of an item lifted by `depth` pixels
    pub fn item_transform(&self, depth: f64) -> String {
        let z = if self.hovered { depth } else { 0.0 };
        format!("translateZ({}px)", z)
    }

    pub fn container_style() -> String {
        format!("perspective: {}px;", PERSPECTIVE_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_follows_pointer() {
        let rect = Rect::new(100.0, 50.0, 400.0, 300.0);
        let mut card = TiltCard::new();
        card.enter();
        card.pointer_move(Point::new(400.0, 100.0), rect);

        // 100 px right of center, 100 px above it
        assert!((card.rotate_y - 4.0).abs() < 1e-9);
        assert!((card.rotate_x + 4.0).abs() < 1e-9);
        assert_eq!(card.transform(), "rotateY(4deg) rotateX(-4deg)");
    }

    #[test]
    fn test_center_is_flat() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut card = TiltCard::new();
        card.pointer_move(rect.center(), rect);
        assert_eq!(card.transform(), "rotateY(0deg) rotateX(0deg)");
    }

    #[test]
    fn test_items_lift_only_while_hovered() {
        let mut card = TiltCard::new();
        assert_eq!(card.item_transform(100.0), "translateZ(0px)");
        card.enter();
        assert_eq!(card.item_transform(100.0), "translateZ(100px)");
        card.pointer_move(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 50.0, 50.0));
        card.leave();
        assert_eq!(card, TiltCard::default());
        assert_eq!(TiltCard::container_style(), "perspective: 1000px;");
    }
}
