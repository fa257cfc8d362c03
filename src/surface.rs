use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use crate::shape::Rotation;

/// Raster backend that shapes paint themselves onto.
///
/// The document owns exactly one surface and composites every shape through
/// it; tools never touch pixels. `Canvas` is the pixel-buffer implementation,
/// tests substitute a recording double.
pub trait Surface {
    /// Creates a fresh, compatible surface of `size` (same font, same backend).
    fn allocate(&self, size: Size) -> Self
    where
        Self: Sized;

    fn size(&self) -> Size;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, thickness: i32);

    fn draw_rect(&mut self, rect: Rect, color: Color, thickness: i32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_ellipse(&mut self, rect: Rect, color: Color, thickness: i32);

    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Draws `ch` into `bounds`, turned clockwise by `rotation`.
    fn draw_glyph(&mut self, ch: char, bounds: Rect, color: Color, rotation: Rotation);

    /// Size `ch` occupies when drawn upright: advance width by line height.
    fn measure_glyph(&self, ch: char) -> Size;

    /// Copies `source` onto this surface with its top-left corner at `origin`.
    fn blit(&mut self, source: &Self, origin: Point)
    where
        Self: Sized;
}
