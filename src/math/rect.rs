// Defines an axis-aligned rectangle in screen space

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// An axis-aligned rectangle defined by its top-left corner and its extents.
///
/// The y axis points down, so `top` is the smaller y value and `bottom` the larger.
/// Width and height are expected to be non-negative; this type does not clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new Rect from its top-left corner and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Creates a Rect centred on `center` with the given half extents.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        let top_left = center - half_extents;
        Rect::new(top_left.x, top_left.y, half_extents.x * 2.0, half_extents.y * 2.0)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half of the width and height.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Checks if this rectangle overlaps another one.
    /// Edges that only touch do not count as an overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        let x_overlap = self.left() < other.right() && self.right() > other.left();
        let y_overlap = self.top() < other.bottom() && self.bottom() > other.top();
        x_overlap && y_overlap
    }

    /// Returns true if neither extent is negative.
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.half_extents(), Vec2::new(15.0, 20.0));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(5.0, 10.0));
        assert_eq!(r, Rect::new(45.0, 40.0, 10.0, 20.0));
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_rect_well_formed() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, -1.0, 5.0).is_well_formed());
    }
}
