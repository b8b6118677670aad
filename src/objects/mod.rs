pub mod moving_body;

pub use moving_body::MovingBody;
