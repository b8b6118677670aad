pub mod collision;
pub mod common;
pub mod constraints;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::{classify, combine, intersects, CollisionPoint, CollisionSide, Contact};
pub use common::{EngineError, SimulationConfig};
pub use constraints::{correct_bounds, correct_bounds_with, BoundsHandler, BoundsHit, ReflectVelocity};
pub use math::{Rect, Vec2};
pub use objects::MovingBody;
pub use world::Simulation;
