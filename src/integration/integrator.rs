use crate::constraints::{BoundsHandler, BoundsHit};
use crate::objects::MovingBody;

/// Integrates the body's state forward in time using Semi-Implicit Euler.
///
/// Velocity is advanced from acceleration first, then position from the new velocity,
/// and the body's rectangle is rebuilt at the new position.
pub fn integrate(body: &mut MovingBody, dt: f64) {
    // v = v + a*dt
    let velocity = body.velocity + body.acceleration * dt;
    body.set_velocity(velocity);
    // p = p + v*dt
    body.set_position(body.position + body.velocity * dt);
}

/// Runs one full step for a single body: integration followed by containment.
///
/// Returns the bounds correction, if the body had a region and left it.
pub fn step_body<H: BoundsHandler + ?Sized>(
    body: &mut MovingBody,
    dt: f64,
    handler: &mut H,
) -> Option<BoundsHit> {
    integrate(body, dt);
    body.check_bounds(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionPoint;
    use crate::constraints::{IgnoreBounds, ReflectVelocity};
    use crate::math::{Rect, Vec2};
    const EPSILON: f64 = 1e-9;

    fn default_test_body() -> MovingBody {
        MovingBody::new(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_integrate_linear_motion_no_acceleration() {
        let mut body = default_test_body().with_velocity(Vec2::new(10.0, -5.0));
        integrate(&mut body, 0.1);

        assert!((body.position.x - 51.0).abs() < EPSILON);
        assert!((body.position.y - 49.5).abs() < EPSILON);
        assert_eq!(body.velocity, Vec2::new(10.0, -5.0));
        // Rectangle follows the body
        assert!((body.rect.x - 46.0).abs() < EPSILON);
        assert!((body.rect.y - 44.5).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_constant_acceleration() {
        let mut body = default_test_body().with_acceleration(Vec2::new(5.0, 0.0));
        integrate(&mut body, 0.1);

        // v = (0,0) + (5,0)*0.1 = (0.5, 0)
        assert!((body.velocity.x - 0.5).abs() < EPSILON);
        assert!(body.velocity.y.abs() < EPSILON);
        // p = (50,50) + (0.5,0)*0.1
        assert!((body.position.x - 50.05).abs() < EPSILON);
        assert!((body.position.y - 50.0).abs() < EPSILON);
        assert!((body.speed - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_step_body_without_region_moves_freely() {
        let mut body = default_test_body().with_velocity(Vec2::new(-1000.0, 0.0));
        let hit = step_body(&mut body, 1.0, &mut IgnoreBounds);
        assert_eq!(hit, None);
        assert!((body.position.x - -950.0).abs() < EPSILON);
    }

    #[test]
    fn test_step_body_clamps_after_integration() {
        let mut body = default_test_body()
            .with_velocity(Vec2::new(-60.0, 0.0))
            .with_region(Rect::new(0.0, 0.0, 100.0, 100.0));
        let hit = step_body(&mut body, 1.0, &mut ReflectVelocity::default()).expect("left wall");

        assert_eq!(hit.point, CollisionPoint::Left);
        assert!((body.position.x - 5.0).abs() < EPSILON);
        assert!((hit.change.x - 15.0).abs() < EPSILON);
        // Bounced back into the region
        assert!((body.velocity.x - 60.0).abs() < EPSILON);
    }
}
