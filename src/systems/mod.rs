//! Systems - shape construction and motion
//!
//! Both systems are stateless over shapes: they never hold on to a shape
//! between calls.

pub mod factory;
pub mod motion;

pub use factory::ShapeFactory;
pub use motion::{MotionIntegrator, GRAVITY_SCALE};
