use super::{SimulationCore, RENDER_STRIDE};

/// Pack one record per live shape into the render buffer:
/// `[id, x, y, kind, size, color, visible]`. Returns the record count.
pub(super) fn collect_render_records(world: &mut SimulationCore) -> usize {
    world.render_buffer.clear();
    world.render_buffer.reserve(world.shapes.len() * RENDER_STRIDE);

    for shape in world.shapes.iter() {
        world.render_buffer.extend_from_slice(&[
            shape.id as f32,
            shape.position.x,
            shape.position.y,
            shape.kind.code() as f32,
            shape.size,
            // 24-bit colors are exact in an f32 mantissa.
            shape.color as f32,
            if shape.visible { 1.0 } else { 0.0 },
        ]);
    }

    world.shapes.len()
}

pub(super) fn shape_outline(world: &SimulationCore, id: u32) -> Option<Vec<f32>> {
    world
        .shapes
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.outline().flat())
}
