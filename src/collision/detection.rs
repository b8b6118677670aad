use crate::math::{Rect, Vec2};
use crate::objects::MovingBody;
use super::manifold::Contact;

/// Per-axis tolerance used to decide that a contact happened at one of B's corners.
///
/// This is a fixed distance in world units and does not scale with the size or speed
/// of the bodies, so small or fast bodies can miss the corner window entirely.
pub const CORNER_EPSILON: f64 = 0.1;

/// Checks if two rectangles overlap. Touching edges do not count.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Checks if the rectangles of two bodies overlap.
pub fn bodies_intersect(a: &MovingBody, b: &MovingBody) -> bool {
    intersects(&a.rect, &b.rect)
}

/// Checks whether `a` overlaps `b` and derives a contact normal for `a`.
///
/// The normal is chosen from the offset between the two centres, B's half extents and
/// A's velocity. Rules are evaluated in the order right, left, top, bottom and a later
/// match replaces an earlier one. If the offset sits within [`CORNER_EPSILON`] of one of
/// B's corners the normal becomes the normalized offset instead.
///
/// An overlap that matches no rule is still a hit, with a zero normal.
pub fn classify(a: &MovingBody, b: &MovingBody) -> Contact {
    if !bodies_intersect(a, b) {
        return Contact::NONE;
    }

    let delta = a.position - b.position;
    let abs_delta = delta.abs();
    let half = b.rect.half_extents();
    let mut normal = Vec2::ZERO;

    // Right side of B
    if delta.x > 0.0 && abs_delta.y < half.y && a.velocity.x < 0.0 {
        normal = Vec2::new(1.0, 0.0);
    }

    // Left side
    if delta.x < 0.0 && abs_delta.y < half.y && a.velocity.x > 0.0 {
        normal = Vec2::new(-1.0, 0.0);
    }

    // Top side
    if delta.y < 0.0 && abs_delta.x < half.x && a.velocity.y > 0.0 {
        normal = Vec2::new(0.0, -1.0);
    }

    // Bottom side
    if delta.y > 0.0 && abs_delta.x < half.x && a.velocity.y < 0.0 {
        normal = Vec2::new(0.0, 1.0);
    }

    if near_corner(delta, half) {
        normal = delta.normalize();
    }

    Contact::hit(normal)
}

/// True if `delta` is within [`CORNER_EPSILON`] of any `(±half.x, ±half.y)`.
fn near_corner(delta: Vec2, half: Vec2) -> bool {
    [
        Vec2::new(-half.x, half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
    ]
    .iter()
    .any(|corner| {
        (delta.x - corner.x).abs() < CORNER_EPSILON && (delta.y - corner.y).abs() < CORNER_EPSILON
    })
}

/// Something that can be tested for collision against a `T`.
pub trait Collidable<T> {
    fn check_collision(&self, other: &T) -> bool;
}

impl Collidable<MovingBody> for MovingBody {
    fn check_collision(&self, other: &MovingBody) -> bool {
        bodies_intersect(self, other)
    }
}

impl Collidable<Rect> for MovingBody {
    fn check_collision(&self, other: &Rect) -> bool {
        intersects(&self.rect, other)
    }
}
