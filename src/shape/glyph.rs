use std::io::{Read, Write};

use super::{Rotation, Sketchable};
use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::SketchResult;
use crate::geometry::{Point, Rect, Size, point_in_rect, rotate_rect_90};
use crate::surface::Surface;

/// A single typed character. The text tool commits one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    character: char,
    bounds: Rect,
    color: Color,
    rotation: Rotation,
}

impl Glyph {
    /// `size` is the measured size of the upright character.
    pub fn new(character: char, origin: Point, size: Size, color: Color) -> Self {
        Self {
            character,
            bounds: Rect::from_origin_size(origin, size),
            color,
            rotation: Rotation::Deg0,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    /// Box the glyph occupies on the canvas, already turned with the glyph.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub(crate) fn write_payload<W: Write>(&self, w: &mut BinaryWriter<W>) -> std::io::Result<()> {
        w.write_color(self.color)?;
        w.write_rect(self.bounds)?;
        w.write_char(self.character)?;
        w.write_i32(self.rotation.degrees())
    }

    pub(crate) fn read_payload<R: Read>(r: &mut BinaryReader<R>) -> SketchResult<Self> {
        let color = r.read_color()?;
        let bounds = r.read_rect()?;
        let character = r.read_char()?;
        let rotation = Rotation::from_degrees(r.read_i32()?)?;
        Ok(Self {
            character,
            bounds,
            color,
            rotation,
        })
    }
}

impl Sketchable for Glyph {
    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.draw_glyph(self.character, self.bounds, self.color, self.rotation);
    }

    // Plain bounding box test; the glyph outline is not consulted.
    fn hit_test(&self, point: Point) -> bool {
        point_in_rect(point, self.bounds)
    }

    fn rotate_90(&mut self, canvas: Size) {
        self.bounds = rotate_rect_90(self.bounds, canvas);
        self.rotation = self.rotation.turned_clockwise();
    }
}
