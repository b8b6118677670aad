pub mod simulation;

pub use simulation::{BodyBoundsHit, Simulation};
