use wasm_bindgen::prelude::*;

use super::frame_stats::FrameStats;
use super::settings::SimulationSettings;
use super::{PointerAction, SimulationCore, RENDER_STRIDE};

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored = 0,
    Spawned = 1,
    Removed = 2,
}

/// What a pointer press did, and to which shape (0 when ignored)
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct PointerResult {
    outcome: PointerOutcome,
    shape_id: u32,
}

#[wasm_bindgen]
impl PointerResult {
    #[wasm_bindgen(getter)]
    pub fn outcome(&self) -> PointerOutcome { self.outcome }
    #[wasm_bindgen(getter)]
    pub fn shape_id(&self) -> u32 { self.shape_id }
}

impl From<PointerAction> for PointerResult {
    fn from(action: PointerAction) -> Self {
        match action {
            PointerAction::Removed(id) => PointerResult { outcome: PointerOutcome::Removed, shape_id: id },
            PointerAction::Spawned(id) => PointerResult { outcome: PointerOutcome::Spawned, shape_id: id },
            PointerAction::Ignored => PointerResult { outcome: PointerOutcome::Ignored, shape_id: 0 },
        }
    }
}

/// Play-area border for the host to stroke
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Border {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    stroke_width: f32,
    color: u32,
}

#[wasm_bindgen]
impl Border {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.height }
    #[wasm_bindgen(getter)]
    pub fn stroke_width(&self) -> f32 { self.stroke_width }
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 { self.color }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with a `width` x `height` play area
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    /// Play area sized for the given browser viewport
    #[wasm_bindgen(js_name = forViewport)]
    pub fn for_viewport(viewport_width: f32, viewport_height: f32) -> Self {
        let (width, height) = crate::domain::canvas_size_for_viewport(viewport_width, viewport_height);
        Self::new(width, height)
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u32) -> Self {
        let settings = SimulationSettings { seed, ..SimulationSettings::default() };
        Self {
            core: SimulationCore::with_settings(width, height, settings),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Window resize: rebuild the play area, keep the shapes
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.core.resize(viewport_width, viewport_height);
    }

    pub fn border(&self) -> Border {
        let border = self.core.border();
        Border {
            x: border.rect.x,
            y: border.rect.y,
            width: border.rect.width,
            height: border.rect.height,
            stroke_width: border.stroke_width,
            color: border.color,
        }
    }

    /// Advance by the ticker's elapsed milliseconds
    pub fn tick(&mut self, dt_ms: f64) {
        self.core.tick((dt_ms / 1000.0) as f32);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerResult {
        self.core.pointer_down(x, y).into()
    }

    pub fn remove_shape(&mut self, id: u32) -> bool {
        self.core.remove_shape(id)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === CONTROLS ===

    #[wasm_bindgen(getter)]
    pub fn spawn_rate(&self) -> f32 { self.core.spawn_rate() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.gravity() }

    pub fn increase_spawn_rate(&mut self) -> f32 {
        self.core.increase_spawn_rate()
    }

    pub fn decrease_spawn_rate(&mut self) -> f32 {
        self.core.decrease_spawn_rate()
    }

    pub fn increase_gravity(&mut self) -> f32 {
        self.core.increase_gravity()
    }

    pub fn decrease_gravity(&mut self) -> f32 {
        self.core.decrease_gravity()
    }

    pub fn set_auto_spawn(&mut self, enabled: bool) {
        self.core.set_auto_spawn(enabled);
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    // === STATS ===

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.core.shape_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn surface_area(&self) -> f64 { self.core.surface_area() }

    /// e.g. "1234 px²"
    pub fn surface_area_label(&self) -> String {
        crate::format_area(self.core.surface_area())
    }

    pub fn get_stats(&self) -> FrameStats {
        self.core.stats()
    }

    // === RENDER API ===

    /// Refresh the render buffer; returns the number of records
    pub fn collect_render_records(&mut self) -> usize {
        self.core.collect_render_records()
    }

    /// Pointer to the render buffer (`render_stride()` floats per shape)
    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.core.render_buffer().as_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    /// Outline data for one shape; empty when the id is not live
    pub fn shape_outline(&self, id: u32) -> Vec<f32> {
        self.core.shape_outline(id).unwrap_or_default()
    }
}
