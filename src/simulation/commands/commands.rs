use crate::domain::Shape;

use super::{PointerAction, SimulationCore, SPAWN_OFFSET_Y};

/// Take ownership of a shape and give it a fresh id
pub(super) fn add_shape(world: &mut SimulationCore, mut shape: Shape) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.saturating_add(1);
    shape.id = id;
    log::trace!(
        "shape {} added: {} at ({:.1}, {:.1})",
        id,
        shape.kind.name(),
        shape.position.x,
        shape.position.y
    );
    world.shapes.push(shape);
    id
}

/// Random shape at a random x just above the top edge
pub(super) fn spawn_random_shape(world: &mut SimulationCore) -> u32 {
    let bounds = world.bounds;
    let x = bounds.x + world.factory.next_unit() * bounds.width;
    let y = bounds.y - SPAWN_OFFSET_Y;
    let shape = world.factory.create_random_shape(x, y);
    add_shape(world, shape)
}

/// Random shape at (x, y); `None` when the point is outside the bounds
pub(super) fn spawn_shape_at(world: &mut SimulationCore, x: f32, y: f32) -> Option<u32> {
    if !world.bounds.contains(x, y) {
        return None;
    }
    let shape = world.factory.create_random_shape(x, y);
    Some(add_shape(world, shape))
}

pub(super) fn remove_shape(world: &mut SimulationCore, id: u32) -> bool {
    let Some(idx) = world.shapes.iter().position(|s| s.id == id) else {
        return false;
    };
    // Order matters: later shapes draw on top and win hit tests.
    world.shapes.remove(idx);
    log::trace!("shape {} removed", id);
    true
}

/// Topmost visible shape under the point
pub(super) fn shape_at(world: &SimulationCore, x: f32, y: f32) -> Option<u32> {
    world
        .shapes
        .iter()
        .rev()
        .find(|s| s.visible && s.contains_point(x, y))
        .map(|s| s.id)
}

/// A click on a shape removes it and is not seen by the canvas;
/// otherwise the canvas spawns a shape at the click.
pub(super) fn pointer_down(world: &mut SimulationCore, x: f32, y: f32) -> PointerAction {
    if let Some(id) = shape_at(world, x, y) {
        remove_shape(world, id);
        log::debug!("pointer ({:.1}, {:.1}) removed shape {}", x, y, id);
        return PointerAction::Removed(id);
    }

    match spawn_shape_at(world, x, y) {
        Some(id) => {
            log::debug!("pointer ({:.1}, {:.1}) spawned shape {}", x, y, id);
            PointerAction::Spawned(id)
        }
        None => PointerAction::Ignored,
    }
}

pub(super) fn clear(world: &mut SimulationCore) {
    world.shapes.clear();
    world.since_last_spawn = None;
    world.frame = 0;
}
