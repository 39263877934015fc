//! MotionIntegrator - gravity, explicit Euler step, side-wall clamp
//!
//! Order per shape:
//! 1. vy += gravity * GRAVITY_SCALE * dt
//! 2. position += velocity * dt
//! 3. clamp against the left/right walls (vx zeroed on contact)
//! 4. visibility = not fully outside the bounds padded by the shape size
//!
//! Visibility is informational; removal is the simulation's prune pass.

use crate::domain::{Bounds, Shape};

/// Pixels per second squared at gravity scalar 1.0
pub const GRAVITY_SCALE: f32 = 250.0;

pub struct MotionIntegrator {
    gravity: f32,
}

impl MotionIntegrator {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Advance one shape by `dt` seconds
    pub fn update(&self, shape: &mut Shape, dt: f32, bounds: &Bounds) {
        shape.velocity.y += self.gravity * GRAVITY_SCALE * dt;

        shape.position += shape.velocity * dt;

        clamp_to_walls(shape, bounds);

        shape.visible = !is_outside(shape, bounds);
    }
}

/// Snap the bounding box inside the side walls. The left wall wins when
/// the shape is wider than the area.
fn clamp_to_walls(shape: &mut Shape, bounds: &Bounds) {
    let half_width = shape.half_width();

    if shape.position.x - half_width <= bounds.left() {
        shape.position.x = bounds.left() + half_width;
        shape.velocity.x = 0.0;
    } else if shape.position.x + half_width >= bounds.right() {
        shape.position.x = bounds.right() - half_width;
        shape.velocity.x = 0.0;
    }
}

fn is_outside(shape: &Shape, bounds: &Bounds) -> bool {
    let p = shape.position;
    let pad = shape.size;

    p.y + pad < bounds.top()
        || p.y - pad > bounds.bottom()
        || p.x + pad < bounds.left()
        || p.x - pad > bounds.right()
}
