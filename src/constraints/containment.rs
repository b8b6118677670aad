//! Keeps a body inside its bounding region.

use crate::collision::point::CollisionPoint;
use crate::math::{Rect, Vec2};
use crate::objects::MovingBody;

/// Describes a correction applied to keep a body inside its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsHit {
    /// Offset applied to the body's position.
    pub change: Vec2,
    /// Unit normal of the wall or corner that was hit, pointing into the region.
    pub normal: Vec2,
    /// Which wall or corner of the region was hit.
    pub point: CollisionPoint,
}

/// Reacts to a body hitting the edge of its region.
///
/// The handler runs before the correction is committed, so `body.position` is still the
/// out-of-bounds position. Changes to the position are overwritten by the correction;
/// velocity and steering changes are kept.
pub trait BoundsHandler {
    fn on_hit_bounds(&mut self, _body: &mut MovingBody, _hit: &BoundsHit) {}
}

/// Clamps the body and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreBounds;

impl BoundsHandler for IgnoreBounds {}

/// Bounces the body off the wall by reflecting its velocity about the hit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectVelocity {
    /// Fraction of the speed kept after the bounce. Range [0, 1].
    pub restitution: f64,
}

impl ReflectVelocity {
    pub fn new(restitution: f64) -> Self {
        ReflectVelocity {
            restitution: restitution.clamp(0.0, 1.0),
        }
    }
}

impl Default for ReflectVelocity {
    fn default() -> Self {
        ReflectVelocity { restitution: 1.0 }
    }
}

impl BoundsHandler for ReflectVelocity {
    fn on_hit_bounds(&mut self, body: &mut MovingBody, hit: &BoundsHit) {
        // Only bounce while still heading into the wall
        if body.velocity.dot(hit.normal) >= 0.0 {
            return;
        }
        let reflected = body.velocity.reflect(hit.normal) * self.restitution;
        body.set_velocity(reflected);
    }
}

/// Clamps `body` into `region` without notifying anyone.
///
/// Returns the applied correction, or `None` if the body was already inside.
pub fn correct_bounds(body: &mut MovingBody, region: &Rect) -> Option<BoundsHit> {
    correct_bounds_with(body, region, &mut IgnoreBounds)
}

/// Clamps `body` into `region`, notifying `handler` when a correction happens.
///
/// Each axis is clamped on its own: left is checked before right and top before bottom,
/// and at most one wall per axis is hit. When both axes are clamped in the same call the
/// two walls combine into the corner between them.
pub fn correct_bounds_with<H: BoundsHandler + ?Sized>(
    body: &mut MovingBody,
    region: &Rect,
    handler: &mut H,
) -> Option<BoundsHit> {
    let mut target = body.position;
    let mut point = CollisionPoint::None;

    if body.rect.left() < region.left() {
        target.x = region.left() + body.origin.x;
        point = CollisionPoint::Left;
    } else if body.rect.right() > region.right() {
        target.x = region.right() - body.origin.x;
        point = CollisionPoint::Right;
    }

    if body.rect.top() < region.top() {
        target.y = region.top() + body.origin.y;
        point = merge_vertical(point, CollisionPoint::Top);
    } else if body.rect.bottom() > region.bottom() {
        target.y = region.bottom() - body.origin.y;
        point = merge_vertical(point, CollisionPoint::Bottom);
    }

    let change = target - body.position;
    if change == Vec2::ZERO {
        return None;
    }

    let hit = BoundsHit {
        change,
        normal: point.normal(true),
        point,
    };
    tracing::debug!(
        point = ?hit.point,
        change_x = hit.change.x,
        change_y = hit.change.y,
        "body hit region bounds"
    );

    handler.on_hit_bounds(body, &hit);

    body.set_position(target);
    Some(hit)
}

fn merge_vertical(horizontal: CollisionPoint, vertical: CollisionPoint) -> CollisionPoint {
    match horizontal {
        CollisionPoint::None => vertical,
        other => other.combine(vertical),
    }
}

impl MovingBody {
    /// Keeps the body inside its own region, if it has one.
    pub fn check_bounds<H: BoundsHandler + ?Sized>(&mut self, handler: &mut H) -> Option<BoundsHit> {
        let region = self.region?;
        correct_bounds_with(self, &region, handler)
    }
}
