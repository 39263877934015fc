use serde::{Deserialize, Serialize};

use super::SimulationCore;

/// Increment/decrement applied by the +/- controls
pub const CONTROL_STEP: f32 = 0.5;
/// Neither control can go below this
pub const CONTROL_FLOOR: f32 = 0.1;

pub const DEFAULT_SPAWN_RATE: f32 = 1.0;
pub const DEFAULT_GRAVITY: f32 = 1.0;
pub const DEFAULT_SEED: u32 = 12345;

/// User-adjustable simulation parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Shapes per second
    pub spawn_rate: f32,
    /// Multiplier on `GRAVITY_SCALE`
    pub gravity: f32,
    /// Periodic spawning at the top of the area
    pub auto_spawn: bool,
    /// Seed for the shape factory
    pub seed: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            spawn_rate: DEFAULT_SPAWN_RATE,
            gravity: DEFAULT_GRAVITY,
            auto_spawn: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimulationSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Floor both controls at `CONTROL_FLOOR`; non-finite values fall back to the defaults
    pub fn sanitized(self) -> Self {
        Self {
            spawn_rate: sanitize(self.spawn_rate, DEFAULT_SPAWN_RATE),
            gravity: sanitize(self.gravity, DEFAULT_GRAVITY),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        check_control("spawn_rate", self.spawn_rate)?;
        check_control("gravity", self.gravity)?;
        Ok(())
    }
}

fn check_control(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be a finite number, got {}", name, value));
    }
    if value < CONTROL_FLOOR {
        return Err(format!("{} must be at least {}, got {}", name, CONTROL_FLOOR, value));
    }
    Ok(())
}

#[inline]
pub fn step_up(value: f32) -> f32 {
    value + CONTROL_STEP
}

#[inline]
pub fn step_down(value: f32) -> f32 {
    (value - CONTROL_STEP).max(CONTROL_FLOOR)
}

pub(super) fn load_settings(world: &mut SimulationCore, settings: SimulationSettings) {
    let settings = settings.sanitized();
    world.factory = crate::systems::ShapeFactory::new(settings.seed);
    world.integrator.set_gravity(settings.gravity);
    world.settings = settings;
    log::info!(
        "settings loaded: spawn_rate={:.1} gravity={:.1} auto_spawn={}",
        world.settings.spawn_rate,
        world.settings.gravity,
        world.settings.auto_spawn
    );
}

/// Non-finite values are ignored, the rest floored at `CONTROL_FLOOR`
#[inline]
fn sanitize(value: f32, current: f32) -> f32 {
    if value.is_finite() { value.max(CONTROL_FLOOR) } else { current }
}

pub(super) fn set_spawn_rate(world: &mut SimulationCore, rate: f32) {
    let rate = sanitize(rate, world.settings.spawn_rate);
    world.settings.spawn_rate = rate;
    log::debug!("spawn rate -> {:.1}", rate);
}

pub(super) fn set_gravity(world: &mut SimulationCore, gravity: f32) {
    let gravity = sanitize(gravity, world.settings.gravity);
    world.settings.gravity = gravity;
    world.integrator.set_gravity(gravity);
    log::debug!("gravity -> {:.1}", gravity);
}

pub(super) fn set_auto_spawn(world: &mut SimulationCore, enabled: bool) {
    world.settings.auto_spawn = enabled;
}

pub(super) fn increase_spawn_rate(world: &mut SimulationCore) -> f32 {
    let rate = step_up(world.settings.spawn_rate);
    set_spawn_rate(world, rate);
    rate
}

pub(super) fn decrease_spawn_rate(world: &mut SimulationCore) -> f32 {
    let rate = step_down(world.settings.spawn_rate);
    set_spawn_rate(world, rate);
    rate
}

pub(super) fn increase_gravity(world: &mut SimulationCore) -> f32 {
    let gravity = step_up(world.settings.gravity);
    set_gravity(world, gravity);
    gravity
}

pub(super) fn decrease_gravity(world: &mut SimulationCore) -> f32 {
    let gravity = step_down(world.settings.gravity);
    set_gravity(world, gravity);
    gravity
}
