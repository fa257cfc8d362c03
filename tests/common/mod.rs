#![allow(dead_code)]

use sketch_editor::geometry::{Point, Rect, Size};
use sketch_editor::shape::Rotation;
use sketch_editor::{Color, Document, Surface};

/// Glyph cell every character measures as on a [`RecordingSurface`].
pub const GLYPH_SIZE: Size = Size::new(10, 20);

/// One call a shape made on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Line(Point, Point, Color, i32),
    Rect(Rect, Color, i32),
    FillRect(Rect, Color),
    Ellipse(Rect, Color, i32),
    FillEllipse(Rect, Color),
    Glyph(char, Rect, Color, Rotation),
    Blit(Point),
}

/// Surface that remembers what was drawn instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn allocate(&self, size: Size) -> Self {
        Self::new(size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, thickness: i32) {
        self.calls.push(DrawCall::Line(p1, p2, color, thickness));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, thickness: i32) {
        self.calls.push(DrawCall::Rect(rect, color, thickness));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Color, thickness: i32) {
        self.calls.push(DrawCall::Ellipse(rect, color, thickness));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillEllipse(rect, color));
    }

    fn draw_glyph(&mut self, ch: char, bounds: Rect, color: Color, rotation: Rotation) {
        self.calls.push(DrawCall::Glyph(ch, bounds, color, rotation));
    }

    fn measure_glyph(&self, _ch: char) -> Size {
        GLYPH_SIZE
    }

    fn blit(&mut self, _source: &Self, origin: Point) {
        self.calls.push(DrawCall::Blit(origin));
    }
}

pub fn recording_document(width: i32, height: i32) -> Document<RecordingSurface> {
    Document::new(RecordingSurface::new(Size::new(width, height)))
}
