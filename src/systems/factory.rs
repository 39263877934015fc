//! ShapeFactory - builds random shapes at spawn time
//!
//! Kind, color and size are drawn uniformly. Outlines are point lists on
//! circles around the centre, rotated so the first vertex points up.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::core::{Rng, Vec2};
use crate::domain::{Outline, Shape, ShapeKind};

/// Preset fill colors (0xRRGGBB)
pub const COLORS: [u32; 10] = [
    0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF, 0xFF8800, 0x8800FF, 0xFF0088,
    0x00FF88,
];

pub const MIN_SIZE: f32 = 25.0;
pub const MAX_SIZE: f32 = 40.0;

pub const ELLIPSE_RX_FACTOR: f32 = 1.2;
pub const ELLIPSE_RY_FACTOR: f32 = 0.7;

pub const STAR_SPIKES: u32 = 5;
pub const STAR_INNER_FACTOR: f32 = 0.4;

pub struct ShapeFactory {
    rng: Rng,
}

impl ShapeFactory {
    pub fn new(seed: u32) -> Self {
        Self { rng: Rng::new(seed) }
    }

    /// Random kind, color and size at (x, y); velocity zero, visible
    pub fn create_random_shape(&mut self, x: f32, y: f32) -> Shape {
        let kind = ShapeKind::ALL[self.rng.index(ShapeKind::ALL.len())];
        let color = COLORS[self.rng.index(COLORS.len())];
        let size = self.rng.range_f32(MIN_SIZE, MAX_SIZE);
        Self::create_shape(kind, x, y, color, size)
    }

    /// Deterministic construction of a specific shape
    pub fn create_shape(kind: ShapeKind, x: f32, y: f32, color: u32, size: f32) -> Shape {
        let outline = match kind {
            ShapeKind::Circle => Outline::Circle { radius: size },
            ShapeKind::Ellipse => Outline::Ellipse {
                rx: size * ELLIPSE_RX_FACTOR,
                ry: size * ELLIPSE_RY_FACTOR,
            },
            ShapeKind::Star => star_outline(size),
            polygon => polygon_outline(polygon.sides().unwrap_or(3), size),
        };
        Shape::new(kind, Vec2::new(x, y), color, size, outline)
    }

    /// Uniform value in [0, 1) from the factory's generator
    pub(crate) fn next_unit(&mut self) -> f32 {
        self.rng.next_f32()
    }
}

/// Regular polygon inscribed in a circle of `radius`
pub fn polygon_outline(sides: u32, radius: f32) -> Outline {
    let points = (0..sides)
        .map(|i| {
            let angle = (i as f32 * 2.0 * PI) / sides as f32 - FRAC_PI_2;
            Vec2::from_polar(radius, angle)
        })
        .collect();
    Outline::Polygon(points)
}

/// Star alternating outer radius `size` and inner radius `0.4 * size`
pub fn star_outline(size: f32) -> Outline {
    let outer = size;
    let inner = size * STAR_INNER_FACTOR;
    let points = (0..STAR_SPIKES * 2)
        .map(|i| {
            let angle = (i as f32 * PI) / STAR_SPIKES as f32 - FRAC_PI_2;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec2::from_polar(radius, angle)
        })
        .collect();
    Outline::Polygon(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn points(outline: &Outline) -> &[Vec2] {
        match outline {
            Outline::Polygon(points) => points,
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn random_shape_sits_at_spawn_point_at_rest() {
        let mut factory = ShapeFactory::new(99);
        for i in 0..200 {
            let x = i as f32 * 3.5;
            let shape = factory.create_random_shape(x, -60.0);
            assert_eq!(shape.position, Vec2::new(x, -60.0));
            assert_eq!(shape.velocity, Vec2::zero());
            assert!(shape.visible);
            assert!(shape.size >= MIN_SIZE && shape.size < MAX_SIZE);
            assert!(COLORS.contains(&shape.color));
        }
    }

    #[test]
    fn every_kind_and_color_eventually_appears() {
        let mut factory = ShapeFactory::new(2024);
        let mut kinds = HashSet::new();
        let mut colors = HashSet::new();
        for _ in 0..2000 {
            let shape = factory.create_random_shape(0.0, 0.0);
            kinds.insert(shape.kind);
            colors.insert(shape.color);
        }
        assert_eq!(kinds.len(), 7);
        assert_eq!(colors.len(), 10);
    }

    #[test]
    fn polygons_have_one_vertex_per_side_first_pointing_up() {
        for (kind, sides) in [
            (ShapeKind::Triangle, 3),
            (ShapeKind::Square, 4),
            (ShapeKind::Pentagon, 5),
            (ShapeKind::Hexagon, 6),
        ] {
            let shape = ShapeFactory::create_shape(kind, 0.0, 0.0, 0xFF0000, 30.0);
            let pts = points(shape.outline());
            assert_eq!(pts.len(), sides);
            assert!(pts[0].x.abs() < 1e-4);
            assert!((pts[0].y + 30.0).abs() < 1e-4);
            for p in pts {
                assert!((p.length() - 30.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let shape = ShapeFactory::create_shape(ShapeKind::Star, 0.0, 0.0, 0x00FF00, 30.0);
        let pts = points(shape.outline());
        assert_eq!(pts.len(), 10);
        for (i, p) in pts.iter().enumerate() {
            let expected = if i % 2 == 0 { 30.0 } else { 12.0 };
            assert!((p.length() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn circle_and_ellipse_radii() {
        let circle = ShapeFactory::create_shape(ShapeKind::Circle, 0.0, 0.0, 0, 30.0);
        assert_eq!(circle.outline(), &Outline::Circle { radius: 30.0 });
        assert_eq!(circle.extent(), (60.0, 60.0));

        let ellipse = ShapeFactory::create_shape(ShapeKind::Ellipse, 0.0, 0.0, 0, 30.0);
        match ellipse.outline() {
            Outline::Ellipse { rx, ry } => {
                assert!((rx - 36.0).abs() < 1e-4);
                assert!((ry - 21.0).abs() < 1e-4);
            }
            other => panic!("expected ellipse, got {:?}", other),
        }
        let (w, h) = ellipse.extent();
        assert!((w - 72.0).abs() < 1e-4);
        assert!((h - 42.0).abs() < 1e-4);
    }

    #[test]
    fn seeded_factories_agree() {
        let mut a = ShapeFactory::new(5);
        let mut b = ShapeFactory::new(5);
        for _ in 0..50 {
            let sa = a.create_random_shape(1.0, 2.0);
            let sb = b.create_random_shape(1.0, 2.0);
            assert_eq!(sa.kind, sb.kind);
            assert_eq!(sa.color, sb.color);
            assert_eq!(sa.size, sb.size);
        }
    }
}
