//! Domain model: the play area and the shapes falling through it

pub mod bounds;
pub mod shape;

pub use bounds::{canvas_size_for_viewport, BorderStyle, Bounds, PlayArea};
pub use shape::{Outline, Shape, ShapeKind};
