use crate::math::vec2::Vec2;

/// Result of a two-body rectangle check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contact {
    /// True if the two rectangles overlap.
    pub hit: bool,
    /// Contact normal as seen by body A. May be zero even on a hit,
    /// when no directional rule matched.
    pub normal: Vec2,
}

impl Contact {
    /// The "no contact" result: not hit, zero normal.
    pub const NONE: Contact = Contact { hit: false, normal: Vec2::ZERO };

    pub fn hit(normal: Vec2) -> Self {
        Contact { hit: true, normal }
    }

    /// The normal if the bodies touched, `None` otherwise.
    pub fn normal(&self) -> Option<Vec2> {
        self.hit.then_some(self.normal)
    }
}

/// A contact recorded between two bodies of a simulation during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPair {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// Normal as seen by body A against body B.
    pub normal: Vec2,
}
