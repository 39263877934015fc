use crate::domain::PlayArea;
use crate::systems::{MotionIntegrator, ShapeFactory};

use super::frame_stats::FrameStats;
use super::settings::SimulationSettings;
use super::SimulationCore;

pub(super) fn create_simulation_core(width: f32, height: f32, settings: SimulationSettings) -> SimulationCore {
    let settings = settings.sanitized();
    let area = PlayArea::new(width, height);
    let bounds = area.get_bounds();
    SimulationCore {
        area,
        bounds,
        factory: ShapeFactory::new(settings.seed),
        integrator: MotionIntegrator::new(settings.gravity),
        shapes: Vec::with_capacity(64),
        next_id: 1,
        since_last_spawn: None,
        frame: 0,
        settings,
        stats: FrameStats::default(),
        // Grows on demand in `collect_render_records`.
        render_buffer: Vec::with_capacity(64 * super::RENDER_STRIDE),
    }
}
