/// Geometry primitives shared by the resolver, animator and drag controller
use nalgebra::{Point2, Vector2};

/// A position in document or viewport space, in CSS pixels
pub type Point = Point2<f64>;

/// A displacement between two points
pub type Vector = Vector2<f64>;

/// Returns true when both coordinates are finite numbers
pub fn is_finite(point: &Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Axis-aligned rectangle, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Hit test with inclusive edges. Empty rectangles contain nothing.
    pub fn contains(&self, point: &Point) -> bool {
        if !(self.width > 0.0 && self.height > 0.0) || !is_finite(point) {
            return false;
        }
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// Browser viewport: vertical scroll offset plus visible size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Non-finite or negative inputs collapse to zero.
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y: sanitize(scroll_y),
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// True before layout has produced a usable size
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Document-space Y of the viewport's horizontal mid-line
    pub fn mid_y(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }
}
