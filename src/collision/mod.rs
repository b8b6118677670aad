pub mod detection;
pub mod manifold;
pub mod point;

// Re-export key types
pub use detection::*;
pub use manifold::*;
pub use point::{combine, corner_normal, CollisionPoint, CollisionSide};
