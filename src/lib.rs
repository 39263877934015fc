//! Shapefall Engine - falling shapes toy in WASM
//!
//! Shapes spawn above the play area, fall under gravity, stop against the
//! side walls and are destroyed once far below the area or when clicked.
//!
//! Architecture:
//! - core/        - vector math, random numbers, console logging
//! - domain/      - play area bounds and the shape model
//! - systems/     - shape factory and motion integrator
//! - simulation/  - per-frame driver and the wasm-bindgen facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(log::LevelFilter::Info);
    log::info!("Shapefall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Control label, one decimal place ("1.5")
#[wasm_bindgen]
pub fn format_control(value: f32) -> String {
    format!("{:.1}", value)
}

/// Surface area label, rounded to whole pixels ("1234 px²")
#[wasm_bindgen]
pub fn format_area(area: f64) -> String {
    format!("{} px²", area.round() as i64)
}

/// Host-side drawing constants
#[wasm_bindgen]
pub fn background_color() -> u32 { 0x2C2C2C }
#[wasm_bindgen]
pub fn shape_stroke_color() -> u32 { 0x000000 }
#[wasm_bindgen]
pub fn shape_stroke_width() -> f32 { 2.0 }

// Re-export main types
pub use domain::{Bounds, Outline, PlayArea, Shape, ShapeKind};
pub use simulation::{FrameStats, PointerAction, Simulation, SimulationCore, SimulationSettings};
pub use systems::{MotionIntegrator, ShapeFactory, GRAVITY_SCALE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_display_format() {
        assert_eq!(format_control(1.0), "1.0");
        assert_eq!(format_control(0.1), "0.1");
        assert_eq!(format_control(2.5), "2.5");
        assert_eq!(format_area(0.0), "0 px²");
        assert_eq!(format_area(1234.5), "1235 px²");
        assert_eq!(format_area(1234.4), "1234 px²");
    }
}
