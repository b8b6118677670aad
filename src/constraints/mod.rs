pub mod containment;

// Re-export the containment types for easier access
pub use containment::{
    correct_bounds, correct_bounds_with, BoundsHandler, BoundsHit, IgnoreBounds, ReflectVelocity,
};
