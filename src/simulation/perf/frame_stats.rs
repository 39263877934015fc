use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot published at the end of every tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) shape_count: u32,
    pub(super) visible_count: u32,
    /// Sum of visible bounding-box areas, px²
    pub(super) surface_area: f64,
    pub(super) spawned: u32,
    pub(super) pruned: u32,
    pub(super) tick_ms: f64,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.shape_count }
    #[wasm_bindgen(getter)]
    pub fn visible_count(&self) -> u32 { self.visible_count }
    #[wasm_bindgen(getter)]
    pub fn surface_area(&self) -> f64 { self.surface_area }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn pruned(&self) -> u32 { self.pruned }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }

    /// Area rounded to whole pixels, as displayed
    #[wasm_bindgen(getter)]
    pub fn surface_area_rounded(&self) -> f64 { self.surface_area.round() }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
