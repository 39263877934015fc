//! Shape - a falling polygon, circle, ellipse or star
//!
//! The outline is stored relative to the shape's centre, so moving a shape
//! only touches `position`. Bounding boxes are axis-aligned and computed
//! from the outline geometry (stroke excluded).

use crate::core::Vec2;

/// The seven shape kinds the factory picks from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Circle,
    Ellipse,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Star,
    ];

    /// Vertex count for the regular polygon kinds
    pub fn sides(self) -> Option<u32> {
        match self {
            ShapeKind::Triangle => Some(3),
            ShapeKind::Square => Some(4),
            ShapeKind::Pentagon => Some(5),
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Star => None,
        }
    }

    /// Stable numeric tag used in render records
    pub fn code(self) -> u8 {
        match self {
            ShapeKind::Triangle => 0,
            ShapeKind::Square => 1,
            ShapeKind::Pentagon => 2,
            ShapeKind::Hexagon => 3,
            ShapeKind::Circle => 4,
            ShapeKind::Ellipse => 5,
            ShapeKind::Star => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Star => "star",
        }
    }
}

/// Geometry in local coordinates (centre at 0,0)
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Polygon(Vec<Vec2>),
    Circle { radius: f32 },
    Ellipse { rx: f32, ry: f32 },
}

impl Outline {
    /// Bounding box (width, height)
    pub fn extent(&self) -> (f32, f32) {
        match self {
            Outline::Polygon(points) => {
                if points.is_empty() {
                    return (0.0, 0.0);
                }
                let mut min = points[0];
                let mut max = points[0];
                for p in points.iter().skip(1) {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                (max.x - min.x, max.y - min.y)
            }
            Outline::Circle { radius } => (radius * 2.0, radius * 2.0),
            Outline::Ellipse { rx, ry } => (rx * 2.0, ry * 2.0),
        }
    }

    /// Point containment, `p` relative to the centre
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Outline::Polygon(points) => polygon_contains(points, p),
            Outline::Circle { radius } => p.x * p.x + p.y * p.y <= radius * radius,
            Outline::Ellipse { rx, ry } => {
                if *rx <= 0.0 || *ry <= 0.0 {
                    return false;
                }
                let nx = p.x / rx;
                let ny = p.y / ry;
                nx * nx + ny * ny <= 1.0
            }
        }
    }

    /// Flattened data for the host: polygon vertices as x0,y0,x1,y1,...;
    /// `[radius]` for circles and `[rx, ry]` for ellipses.
    pub fn flat(&self) -> Vec<f32> {
        match self {
            Outline::Polygon(points) => {
                let mut out = Vec::with_capacity(points.len() * 2);
                for p in points {
                    out.push(p.x);
                    out.push(p.y);
                }
                out
            }
            Outline::Circle { radius } => vec![*radius],
            Outline::Ellipse { rx, ry } => vec![*rx, *ry],
        }
    }
}

/// Even-odd crossing test
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            if p.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// A live shape. Owned by the simulation's shape list only.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Assigned by the simulation on insertion (0 = not yet inserted)
    pub id: u32,
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub kind: ShapeKind,
    /// Nominal radius
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub visible: bool,
    outline: Outline,
}

impl Shape {
    pub fn new(kind: ShapeKind, position: Vec2, color: u32, size: f32, outline: Outline) -> Self {
        Self {
            id: 0,
            position,
            velocity: Vec2::zero(),
            kind,
            size,
            color,
            visible: true,
            outline,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Bounding box (width, height); does not depend on position
    pub fn extent(&self) -> (f32, f32) {
        self.outline.extent()
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.extent().0 * 0.5
    }

    /// Bounding-box area in square pixels
    pub fn area(&self) -> f32 {
        let (w, h) = self.extent();
        w * h
    }

    /// Hit test in world coordinates
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.outline.contains(Vec2::new(x, y) - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_outline(half: f32) -> Outline {
        Outline::Polygon(vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ])
    }

    #[test]
    fn kind_codes_are_indices_into_all() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, i);
        }
    }

    #[test]
    fn bounding_box_excludes_stroke() {
        let shape = Shape::new(
            ShapeKind::Circle,
            Vec2::new(0.0, 0.0),
            0xFF0000,
            30.0,
            Outline::Circle { radius: 30.0 },
        );
        // Geometry only: the 2px host stroke adds nothing.
        assert_eq!(shape.extent(), (60.0, 60.0));
        assert_eq!(shape.half_width(), 30.0);
        assert_eq!(shape.area(), 3600.0);
    }

    #[test]
    fn polygon_extent_and_containment() {
        let outline = square_outline(10.0);
        assert_eq!(outline.extent(), (20.0, 20.0));
        assert!(outline.contains(Vec2::new(0.0, 0.0)));
        assert!(outline.contains(Vec2::new(9.0, -9.0)));
        assert!(!outline.contains(Vec2::new(11.0, 0.0)));
    }

    #[test]
    fn ellipse_extent_and_containment() {
        let outline = Outline::Ellipse { rx: 12.0, ry: 7.0 };
        assert_eq!(outline.extent(), (24.0, 14.0));
        assert!(outline.contains(Vec2::new(11.0, 0.0)));
        assert!(!outline.contains(Vec2::new(0.0, 8.0)));
        assert_eq!(outline.flat(), vec![12.0, 7.0]);
    }

    #[test]
    fn hit_test_follows_position() {
        let mut shape = Shape::new(
            ShapeKind::Circle,
            Vec2::new(100.0, 100.0),
            0xFF0000,
            10.0,
            Outline::Circle { radius: 10.0 },
        );
        assert!(shape.contains_point(105.0, 105.0));
        assert!(!shape.contains_point(0.0, 0.0));

        shape.position = Vec2::new(0.0, 0.0);
        assert!(shape.contains_point(0.0, 5.0));
        assert!(!shape.contains_point(105.0, 105.0));
        assert_eq!(shape.area(), 400.0);
        assert_eq!(shape.half_width(), 10.0);
    }
}
