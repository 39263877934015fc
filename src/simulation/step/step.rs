use super::commands;
use super::{PerfTimer, SimulationCore, PRUNE_MARGIN};

pub(super) fn tick(world: &mut SimulationCore, dt: f32) {
    let timer = PerfTimer::start();

    // Host timers can report garbage after a tab switch; never run time backwards.
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    let spawned = if spawn_due(world, dt) {
        commands::spawn_random_shape(world);
        world.since_last_spawn = Some(0.0);
        1
    } else {
        0
    };

    let bounds = world.bounds;
    for shape in world.shapes.iter_mut() {
        world.integrator.update(shape, dt, &bounds);
    }

    let pruned = prune(world);

    world.frame += 1;

    world.stats.frame = world.frame;
    world.stats.shape_count = world.shapes.len() as u32;
    world.stats.visible_count = world.shapes.iter().filter(|s| s.visible).count() as u32;
    world.stats.surface_area = world.surface_area();
    world.stats.spawned = spawned;
    world.stats.pruned = pruned;
    world.stats.tick_ms = timer.elapsed_ms();
}

/// Advances the spawn accumulator. A fresh simulation spawns on its first tick.
fn spawn_due(world: &mut SimulationCore, dt: f32) -> bool {
    if !world.settings.auto_spawn {
        return false;
    }
    let interval = 1.0 / world.settings.spawn_rate;
    match world.since_last_spawn {
        None => true,
        Some(elapsed) => {
            let elapsed = elapsed + dt;
            world.since_last_spawn = Some(elapsed);
            elapsed >= interval
        }
    }
}

/// Drop shapes that fell past the prune line; returns how many went.
fn prune(world: &mut SimulationCore) -> u32 {
    let limit = world.bounds.bottom() + PRUNE_MARGIN;
    let before = world.shapes.len();
    world.shapes.retain(|s| s.position.y <= limit);
    let pruned = (before - world.shapes.len()) as u32;
    if pruned > 0 {
        log::trace!("pruned {} shapes below y={}", pruned, limit);
    }
    pruned
}
