//! Play area - the rectangle shapes fall through
//!
//! `Bounds` is an immutable value. A resize builds a new `PlayArea`
//! rather than mutating the old one.

/// Viewports narrower than this use the full window, wider ones the fixed area.
pub const WIDE_VIEWPORT: f32 = 1024.0;
pub const FIXED_WIDTH: f32 = 800.0;
pub const FIXED_HEIGHT: f32 = 600.0;

pub const BORDER_WIDTH: f32 = 4.0;
pub const BORDER_COLOR: u32 = 0xFFFFFF;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 { self.x }

    #[inline]
    pub fn right(&self) -> f32 { self.x + self.width }

    #[inline]
    pub fn top(&self) -> f32 { self.y }

    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// Inclusive on every edge
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }
}

/// Stroke the host draws around the play area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub rect: Bounds,
    pub stroke_width: f32,
    pub color: u32,
}

/// Fixed-size rectangle anchored at the origin
#[derive(Clone, Debug)]
pub struct PlayArea {
    width: f32,
    height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Play area for a browser viewport of the given size
    pub fn for_viewport(viewport_width: f32, viewport_height: f32) -> Self {
        let (w, h) = canvas_size_for_viewport(viewport_width, viewport_height);
        Self::new(w, h)
    }

    pub fn get_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    pub fn border(&self) -> BorderStyle {
        BorderStyle {
            rect: self.get_bounds(),
            stroke_width: BORDER_WIDTH,
            color: BORDER_COLOR,
        }
    }
}

/// Small screens get the whole viewport; everything else the fixed 800x600 area.
pub fn canvas_size_for_viewport(viewport_width: f32, viewport_height: f32) -> (f32, f32) {
    if viewport_width < WIDE_VIEWPORT {
        (viewport_width, viewport_height)
    } else {
        (FIXED_WIDTH, FIXED_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_anchored_at_origin() {
        let b = PlayArea::new(800.0, 600.0).get_bounds();
        assert_eq!(b, Bounds::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(b.right(), 800.0);
        assert_eq!(b.bottom(), 600.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(0.0, 0.0, 100.0, 50.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(100.0, 50.0));
        assert!(!b.contains(100.1, 10.0));
        assert!(!b.contains(10.0, -0.1));
    }

    #[test]
    fn viewport_sizing_rule() {
        assert_eq!(canvas_size_for_viewport(800.0, 900.0), (800.0, 900.0));
        assert_eq!(canvas_size_for_viewport(1023.0, 700.0), (1023.0, 700.0));
        assert_eq!(canvas_size_for_viewport(1024.0, 700.0), (800.0, 600.0));
        assert_eq!(canvas_size_for_viewport(1920.0, 1080.0), (800.0, 600.0));
    }

    #[test]
    fn border_tracks_area() {
        let border = PlayArea::for_viewport(500.0, 400.0).border();
        assert_eq!(border.rect.width, 500.0);
        assert_eq!(border.rect.height, 400.0);
        assert_eq!(border.stroke_width, 4.0);
        assert_eq!(border.color, 0xFFFFFF);
    }
}
