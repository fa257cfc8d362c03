use log::debug;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, Size};
use crate::shape::{Shape, Sketchable};
use crate::surface::Surface;

/// The sketch: committed shapes in z-order, the live preview overlay and the
/// surface everything is composited on.
///
/// Later shapes paint over earlier ones and are hit first.
pub struct Document<S: Surface = Canvas> {
    shapes: Vec<Shape>,
    overlay: Option<Shape>,
    surface: S,
    background: Color,
}

impl<S: Surface> Document<S> {
    pub fn new(surface: S) -> Self {
        Self {
            shapes: Vec::new(),
            overlay: None,
            surface,
            background: Color::WHITE,
        }
    }

    /// Colour the surface is cleared to before every composite.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn overlay(&self) -> Option<&Shape> {
        self.overlay.as_ref()
    }

    /// The live preview, for tools that grow it in place.
    pub fn overlay_mut(&mut self) -> Option<&mut Shape> {
        self.overlay.as_mut()
    }

    /// Removes and returns the preview shape.
    pub fn take_overlay(&mut self) -> Option<Shape> {
        self.overlay.take()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_size(&self) -> Size {
        self.surface.size()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Commits `shape` on top of everything else.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!("Committing {:?} as shape #{}", shape.kind(), self.shapes.len());
        self.shapes.push(shape);
    }

    /// Replaces the whole shape list, e.g. after loading a sketch file.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    fn topmost_hit_index(&self, point: Point) -> Option<usize> {
        self.shapes.iter().rposition(|shape| shape.hit_test(point))
    }

    /// Removes the topmost shape hit by `point`, if any. Never removes more
    /// than one shape.
    pub fn remove_topmost_hit_at(&mut self, point: Point) -> Option<Shape> {
        let index = self.topmost_hit_index(point)?;
        let removed = self.shapes.remove(index);
        debug!("Erased {:?} at index {index}", removed.kind());
        Some(removed)
    }

    /// Moves the topmost shape hit by `point` to the top of the stack.
    /// Returns whether a shape was hit.
    pub fn bring_to_front_hit_at(&mut self, point: Point) -> bool {
        let Some(index) = self.topmost_hit_index(point) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        true
    }

    /// Installs (or with `None`, clears) the preview shape. The previous
    /// overlay is dropped, never merged.
    pub fn set_overlay(&mut self, overlay: Option<Shape>) {
        self.overlay = overlay;
    }

    /// Grows the surface to cover `size`, keeping its pixels. Never shrinks.
    pub fn resize_surface_at_least(&mut self, size: Size) {
        let current = self.surface.size();
        if !current.is_exceeded_by(size) {
            return;
        }
        let grown_size = current.max(size);
        let mut grown = self.surface.allocate(grown_size);
        grown.clear(Color::WHITE);
        grown.blit(&self.surface, Point::default());
        self.surface = grown;
        debug!("Surface grown from {current:?} to {grown_size:?}");
    }

    /// Composites background, committed shapes and overlay onto the
    /// document's surface and returns it.
    pub fn render(&mut self) -> &S {
        self.surface.clear(self.background);
        for shape in &self.shapes {
            shape.draw(&mut self.surface);
        }
        if let Some(overlay) = &self.overlay {
            overlay.draw(&mut self.surface);
        }
        &self.surface
    }

    /// Composites like [`Self::render`] and copies the result onto `target`.
    pub fn render_all(&mut self, target: &mut S) {
        self.render();
        target.blit(&self.surface, Point::default());
    }

    /// Drops every committed shape. Pixels go away on the next render.
    pub fn clear(&mut self) {
        debug!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// Turns every committed shape a quarter clockwise on a `canvas`-sized
    /// sketch. The overlay is left alone.
    pub fn rotate_all(&mut self, canvas: Size) {
        for shape in &mut self.shapes {
            shape.rotate_90(canvas);
        }
    }

    /// Turns the whole sketch, using the surface as the canvas, and grows the
    /// surface so the turned sketch fits.
    pub fn rotate_sketch(&mut self) {
        let canvas = self.surface.size();
        self.rotate_all(canvas);
        self.resize_surface_at_least(canvas.transposed());
    }

    pub fn measure_glyph(&self, ch: char) -> Size {
        self.surface.measure_glyph(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DEFAULT_FONT_SIZE;
    use crate::geometry::Rect;
    use crate::shape::{LineShape, RectangleShape};

    fn document(width: i32, height: i32) -> Document {
        Document::new(Canvas::new(Size::new(width, height), DEFAULT_FONT_SIZE).unwrap())
    }

    #[test]
    fn test_resize_grows_and_keeps_pixels() {
        let mut doc = document(20, 20);
        doc.add_shape(RectangleShape::filled(Rect::new(0, 0, 5, 5), Color::RED));
        doc.render();

        doc.resize_surface_at_least(Size::new(40, 10));
        assert_eq!(doc.surface_size(), Size::new(40, 20));
        assert_eq!(doc.surface().pixel(Point::new(2, 2)), Some(Color::RED));
        assert_eq!(doc.surface().pixel(Point::new(30, 5)), Some(Color::WHITE));
    }

    #[test]
    fn test_resize_never_shrinks() {
        let mut doc = document(30, 30);
        doc.resize_surface_at_least(Size::new(10, 10));
        assert_eq!(doc.surface_size(), Size::new(30, 30));
    }

    #[test]
    fn test_render_draws_overlay_last() {
        let mut doc = document(20, 20);
        doc.add_shape(RectangleShape::filled(Rect::new(0, 0, 10, 10), Color::RED));
        doc.set_overlay(Some(RectangleShape::filled(Rect::new(0, 0, 10, 10), Color::BLUE).into()));
        assert_eq!(doc.render().pixel(Point::new(5, 5)), Some(Color::BLUE));

        doc.set_overlay(None);
        assert_eq!(doc.render().pixel(Point::new(5, 5)), Some(Color::RED));
    }

    #[test]
    fn test_overlay_can_grow_in_place_and_be_taken() {
        let mut doc = document(20, 20);
        doc.set_overlay(Some(RectangleShape::outlined(Rect::new(0, 0, 4, 4), Color::GRAY, 1).into()));
        if let Some(Shape::Rectangle(r)) = doc.overlay_mut() {
            *r = RectangleShape::outlined(Rect::new(0, 0, 8, 8), Color::GRAY, 1);
        }
        let taken = doc.take_overlay();
        assert_eq!(taken, Some(RectangleShape::outlined(Rect::new(0, 0, 8, 8), Color::GRAY, 1).into()));
        assert!(doc.overlay().is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_clear_keeps_pixels_until_render() {
        let mut doc = document(20, 20);
        doc.add_shape(LineShape::new(Point::new(0, 3), Point::new(19, 3), Color::BLACK, 1));
        doc.render();
        doc.clear();
        assert!(doc.is_empty());
        assert_eq!(doc.surface().pixel(Point::new(5, 3)), Some(Color::BLACK));
        assert_eq!(doc.render().pixel(Point::new(5, 3)), Some(Color::WHITE));
    }

    #[test]
    fn test_rotate_sketch_grows_surface_to_fit() {
        let mut doc = document(60, 20);
        doc.add_shape(RectangleShape::filled(Rect::new(0, 0, 10, 4), Color::GREEN));
        doc.rotate_sketch();

        assert_eq!(doc.surface_size(), Size::new(60, 60));
        let Shape::Rectangle(r) = &doc.shapes()[0] else {
            panic!("expected a rectangle");
        };
        assert_eq!(r.bounds(), Rect::new(16, 0, 4, 10));
    }
}
