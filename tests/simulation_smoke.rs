use shapefall_engine::simulation::{PointerOutcome, PRUNE_MARGIN};
use shapefall_engine::{
    Shape, ShapeFactory, ShapeKind, Simulation, SimulationCore, SimulationSettings, GRAVITY_SCALE,
};

fn quiet(width: f32, height: f32) -> SimulationCore {
    let settings = SimulationSettings { auto_spawn: false, ..SimulationSettings::default() };
    SimulationCore::with_settings(width, height, settings)
}

fn random_at(seed: u32, x: f32, y: f32) -> Shape {
    ShapeFactory::new(seed).create_random_shape(x, y)
}

#[test]
fn falling_shape_follows_euler_reference_trace() {
    let mut world = quiet(800.0, 600.0);
    let id = world.add_shape(random_at(3, 400.0, -60.0));

    let mut trace = Vec::new();
    let (mut vy, mut y) = (0.0f32, -60.0f32);
    for _ in 0..10 {
        world.tick(0.1);
        vy += GRAVITY_SCALE * 0.1;
        y += vy * 0.1;
        trace.push(y);
        assert_eq!(world.shape(id).map(|s| s.position.y), Some(y));
    }

    assert!((trace[9] - 77.5).abs() < 1e-3);
}

#[test]
fn live_count_and_area_follow_prunes() {
    let mut world = quiet(800.0, 600.0);
    for i in 0..5 {
        world.add_shape(ShapeFactory::create_shape(
            ShapeKind::Square,
            100.0 + i as f32 * 120.0,
            300.0,
            0x00FFFF,
            30.0,
        ));
    }
    world.tick(0.0);
    assert_eq!(world.stats().shape_count(), 5);
    assert!(world.stats().surface_area() > 0.0);

    // Push every shape past the prune line.
    let ids: Vec<u32> = world.shapes().iter().map(|s| s.id).collect();
    for id in ids {
        let shape = world.shape(id).cloned().expect("live shape");
        world.remove_shape(id);
        let mut moved = shape;
        moved.position.y = 600.0 + PRUNE_MARGIN + 10.0;
        world.add_shape(moved);
    }
    world.tick(0.0);
    assert_eq!(world.stats().shape_count(), 0);
    assert_eq!(world.stats().pruned(), 5);
    assert_eq!(world.stats().surface_area(), 0.0);
}

#[test]
fn facade_pointer_and_controls() {
    let mut sim = Simulation::with_seed(800.0, 600.0, 11);
    sim.set_auto_spawn(false);

    let spawned = sim.pointer_down(400.0, 300.0);
    assert_eq!(spawned.outcome(), PointerOutcome::Spawned);
    assert_eq!(sim.shape_count(), 1);

    sim.tick(0.0);
    let removed = sim.pointer_down(400.0, 300.0);
    assert_eq!(removed.outcome(), PointerOutcome::Removed);
    assert_eq!(removed.shape_id(), spawned.shape_id());
    assert_eq!(sim.shape_count(), 0);

    let ignored = sim.pointer_down(900.0, 300.0);
    assert_eq!(ignored.outcome(), PointerOutcome::Ignored);
    assert_eq!(ignored.shape_id(), 0);

    assert_eq!(sim.decrease_gravity(), 0.5);
    assert_eq!(sim.increase_spawn_rate(), 1.5);
    assert_eq!(sim.surface_area_label(), "0 px²");
}

#[test]
fn facade_tick_takes_milliseconds() {
    let mut sim = Simulation::new(800.0, 600.0);
    sim.tick(16.0);
    assert_eq!(sim.shape_count(), 1);
    assert_eq!(sim.frame(), 1);
    assert_eq!(sim.collect_render_records(), 1);
    assert_eq!(sim.render_buffer_len(), sim.render_stride());
    let stats = sim.get_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.to_json().contains("\"shape_count\":1"));
}

#[test]
fn wide_viewport_gets_fixed_area() {
    let sim = Simulation::for_viewport(1600.0, 900.0);
    assert_eq!((sim.width(), sim.height()), (800.0, 600.0));
    let border = sim.border();
    assert_eq!(border.stroke_width(), 4.0);
    assert_eq!(border.color(), 0xFFFFFF);

    let narrow = Simulation::for_viewport(390.0, 844.0);
    assert_eq!((narrow.width(), narrow.height()), (390.0, 844.0));
}
