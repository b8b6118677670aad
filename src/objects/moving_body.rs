use crate::math::{Rect, Vec2};

/// A rectangular body that moves through the world and may be confined to a region.
///
/// The body's box is centred on `position`: `origin` holds the half extents, so the
/// top-left corner of `rect` is `position - origin`. Call [`MovingBody::update_rect`]
/// after moving the body by hand so the two stay in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingBody {
    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,

    // Geometry
    pub origin: Vec2, // Half extents of the box
    pub rect: Rect,   // World-space box, derived from position and origin

    /// Restricts the body's movement to this rectangle if set.
    pub region: Option<Rect>,

    // Steering
    pub angle: f64, // Radians, direction of travel
    pub speed: f64,
    pub max_speed: f64,
}

impl MovingBody {
    /// Creates a body of the given size centred on `position`, at rest and unbounded.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        let origin = size / 2.0;
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            origin,
            rect: Rect::from_center(position, origin),
            region: None,
            angle: 0.0,
            speed: 0.0,
            max_speed: f64::INFINITY,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.set_velocity(velocity);
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    /// Full width and height of the box.
    pub fn size(&self) -> Vec2 {
        self.origin * 2.0
    }

    /// Recomputes `rect` from the current position.
    pub fn update_rect(&mut self) {
        self.rect = Rect::from_center(self.position, self.origin);
    }

    /// Moves the body and keeps `rect` in sync.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_rect();
    }

    /// Sets the velocity directly and derives angle and speed from it.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.speed = velocity.magnitude();
        if self.speed > 0.0 {
            self.angle = velocity.y.atan2(velocity.x);
        }
    }

    /// Binds the body to a region it cannot leave.
    pub fn bind(&mut self, region: Rect) {
        self.region = Some(region);
    }

    /// Removes the movement restriction.
    pub fn unbind(&mut self) {
        self.region = None;
    }

    pub fn is_bound(&self) -> bool {
        self.region.is_some()
    }

    /// Starts moving if the body is at rest.
    ///
    /// Uses `initial_speed` clamped to `max_speed`, or `max_speed` itself when no
    /// speed is given and it is positive and finite. Does nothing if already moving.
    pub fn start(&mut self, initial_speed: Option<f64>) {
        if self.speed > 0.0 {
            return;
        }

        match initial_speed {
            Some(speed) => self.speed = speed.min(self.max_speed),
            None if self.max_speed > 0.0 && self.max_speed.is_finite() => self.speed = self.max_speed,
            None => {}
        }

        self.update_velocity();
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
        self.update_velocity();
    }

    /// Changes the direction of travel, keeping the current speed.
    pub fn change_direction(&mut self, angle: f64) {
        self.angle = angle;
        self.update_velocity();
    }

    /// Increases speed by `delta`, capped at `max_speed`. Non-positive deltas are ignored.
    pub fn speed_up(&mut self, delta: f64) {
        if delta <= 0.0 {
            return;
        }
        self.speed = (self.speed + delta).min(self.max_speed);
        self.update_velocity();
    }

    /// Decreases speed by `delta`, never below zero. Non-positive deltas are ignored.
    pub fn slow_down(&mut self, delta: f64) {
        if delta <= 0.0 {
            return;
        }
        self.speed = (self.speed - delta).max(0.0);
        self.update_velocity();
    }

    fn update_velocity(&mut self) {
        self.velocity = Vec2::from_angle(self.angle, self.speed);
    }
}
