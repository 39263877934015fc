//! Simulation - the per-frame driver
//!
//! Owns the only mutable state in the engine: the live shape list, the
//! spawn timer and the user settings. Every frame the host calls `tick`,
//! which spawns on schedule, integrates every shape, prunes the ones that
//! fell past the prune line and publishes `FrameStats`.
//!
//! Factory and integrator never keep references to shapes between calls.

use crate::domain::{BorderStyle, Bounds, PlayArea, Shape};
use crate::systems::{MotionIntegrator, ShapeFactory};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{Border, PointerOutcome, PointerResult, Simulation};
pub use frame_stats::FrameStats;
pub use settings::{
    step_down, step_up, SimulationSettings, CONTROL_FLOOR, CONTROL_STEP, DEFAULT_GRAVITY,
    DEFAULT_SEED, DEFAULT_SPAWN_RATE,
};

use perf_timer::PerfTimer;

/// Auto-spawned shapes start this far above the top edge
pub const SPAWN_OFFSET_Y: f32 = 60.0;
/// Shapes further than this below the bottom edge are destroyed
pub const PRUNE_MARGIN: f32 = 500.0;
/// Floats per shape in the render buffer
pub const RENDER_STRIDE: usize = 7;

/// Result of a pointer press on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// A shape was hit and removed
    Removed(u32),
    /// Empty space inside the bounds; a new shape was spawned
    Spawned(u32),
    /// Outside the bounds, nothing happened
    Ignored,
}

pub struct SimulationCore {
    area: PlayArea,
    bounds: Bounds,
    factory: ShapeFactory,
    integrator: MotionIntegrator,
    shapes: Vec<Shape>,
    next_id: u32,

    settings: SimulationSettings,
    /// Seconds since the last auto-spawn; `None` until the first one
    since_last_spawn: Option<f32>,
    frame: u64,

    stats: FrameStats,
    render_buffer: Vec<f32>,
}

impl SimulationCore {
    /// Create a simulation over a `width` x `height` play area
    pub fn new(width: f32, height: f32) -> Self {
        init::create_simulation_core(width, height, SimulationSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, settings: SimulationSettings) -> Self {
        init::create_simulation_core(width, height, settings)
    }

    pub fn width(&self) -> f32 { self.bounds.width }

    pub fn height(&self) -> f32 { self.bounds.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn get_bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn border(&self) -> BorderStyle {
        self.area.border()
    }

    /// Rebuild the play area for a new viewport size. Shapes are kept.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.area = PlayArea::for_viewport(viewport_width, viewport_height);
        self.bounds = self.area.get_bounds();
        log::info!(
            "resized to {}x{} (viewport {}x{})",
            self.bounds.width,
            self.bounds.height,
            viewport_width,
            viewport_height
        );
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Replace all settings; reseeds the factory
    pub fn load_settings(&mut self, settings: SimulationSettings) {
        settings::load_settings(self, settings);
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        let settings = SimulationSettings::from_json(json)?;
        self.load_settings(settings);
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn spawn_rate(&self) -> f32 { self.settings.spawn_rate }

    pub fn gravity(&self) -> f32 { self.settings.gravity }

    pub fn set_spawn_rate(&mut self, rate: f32) {
        settings::set_spawn_rate(self, rate);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_auto_spawn(&mut self, enabled: bool) {
        settings::set_auto_spawn(self, enabled);
    }

    pub fn increase_spawn_rate(&mut self) -> f32 {
        settings::increase_spawn_rate(self)
    }

    pub fn decrease_spawn_rate(&mut self) -> f32 {
        settings::decrease_spawn_rate(self)
    }

    pub fn increase_gravity(&mut self) -> f32 {
        settings::increase_gravity(self)
    }

    pub fn decrease_gravity(&mut self) -> f32 {
        settings::decrease_gravity(self)
    }

    // === SHAPES ===

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: u32) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Insert an already-built shape; returns its id
    pub fn add_shape(&mut self, shape: Shape) -> u32 {
        commands::add_shape(self, shape)
    }

    /// Random shape above the top edge at a random x
    pub fn spawn_random_shape(&mut self) -> u32 {
        commands::spawn_random_shape(self)
    }

    /// Random shape at (x, y) if the point lies inside the bounds
    pub fn spawn_shape_at(&mut self, x: f32, y: f32) -> Option<u32> {
        commands::spawn_shape_at(self, x, y)
    }

    pub fn remove_shape(&mut self, id: u32) -> bool {
        commands::remove_shape(self, id)
    }

    pub fn shape_at(&self, x: f32, y: f32) -> Option<u32> {
        commands::shape_at(self, x, y)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerAction {
        commands::pointer_down(self, x, y)
    }

    /// Remove every shape and restart the spawn timer
    pub fn clear(&mut self) {
        commands::clear(self);
        self.stats = FrameStats::default();
    }

    // === STATS ===

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Sum of bounding-box areas of the visible shapes, px²
    pub fn surface_area(&self) -> f64 {
        self.shapes
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.area() as f64)
            .sum()
    }

    /// Stats published by the last tick
    pub fn stats(&self) -> FrameStats {
        self.stats.clone()
    }

    // === FRAME ===

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        step::tick(self, dt);
    }

    // === RENDER ===

    pub fn collect_render_records(&mut self) -> usize {
        render_extract::collect_render_records(self)
    }

    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    pub fn shape_outline(&self, id: u32) -> Option<Vec<f32>> {
        render_extract::shape_outline(self, id)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
