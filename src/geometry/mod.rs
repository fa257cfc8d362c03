//! Integer point and rectangle math shared by shapes, tools and the canvas.

pub mod hit_testing;

pub use hit_testing::{distance, distance_point_to_segment, point_in_ellipse, point_in_rect};

/// A point on the sketch, in logical canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Maps the point under a 90° clockwise rotation of a canvas of `canvas` size.
    pub fn rotated_90(self, canvas: Size) -> Self {
        Self::new(canvas.height.saturating_sub(self.y), self.x)
    }
}

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }
}

impl From<Point> for egui::Pos2 {
    fn from(p: Point) -> Self {
        egui::pos2(p.x as f32, p.y as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// True if `other` is larger than `self` in either dimension.
    pub fn is_exceeded_by(self, other: Self) -> bool {
        other.width > self.width || other.height > self.height
    }

    /// The size of the canvas after a quarter turn.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Axis-aligned rectangle. Shapes only ever store normalized rectangles
/// (non-negative width and height); a shrunk hit-test rectangle may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Saturates instead of overflowing for rectangles read from untrusted files.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center in floating point, so odd sizes keep their half unit.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }
}

/// Normalizes two arbitrary corners into a rectangle with non-negative size.
pub fn rect_from_points(p1: Point, p2: Point) -> Rect {
    let span = |a: i32, b: i32| i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX);
    Rect::new(p1.x.min(p2.x), p1.y.min(p2.y), span(p1.x, p2.x), span(p1.y, p2.y))
}

/// Moves all four sides outward by `d` (inward when `d` is negative).
pub fn expand_rect(r: Rect, d: i32) -> Rect {
    let twice = d.saturating_mul(2);
    Rect::new(
        r.x.saturating_sub(d),
        r.y.saturating_sub(d),
        r.width.saturating_add(twice),
        r.height.saturating_add(twice),
    )
}

/// Maps `r` under a 90° clockwise rotation of a canvas of `canvas` size.
///
/// Four applications (with the canvas size transposed after each turn) give
/// back the original rectangle.
pub fn rotate_rect_90(r: Rect, canvas: Size) -> Rect {
    Rect::new(canvas.height.saturating_sub(r.bottom()), r.left(), r.height, r.width)
}
