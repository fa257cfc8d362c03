use std::io::{Read, Write};

use super::{HIT_MARGIN, Sketchable};
use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::SketchResult;
use crate::geometry::{Point, Rect, Size, expand_rect, point_in_rect, rotate_rect_90};
use crate::surface::Surface;

/// Axis-aligned rectangle, either outlined or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleShape {
    bounds: Rect,
    color: Color,
    thickness: i32,
    filled: bool,
}

impl RectangleShape {
    pub fn outlined(bounds: Rect, color: Color, thickness: i32) -> Self {
        Self {
            bounds,
            color,
            thickness: thickness.max(0),
            filled: false,
        }
    }

    pub fn filled(bounds: Rect, color: Color) -> Self {
        Self {
            bounds,
            color,
            thickness: 0,
            filled: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Outline width; always 0 for a filled rectangle.
    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub(crate) fn write_payload<W: Write>(&self, w: &mut BinaryWriter<W>) -> std::io::Result<()> {
        w.write_color(self.color)?;
        w.write_rect(self.bounds)?;
        if !self.filled {
            w.write_i32(self.thickness)?;
        }
        Ok(())
    }

    pub(crate) fn read_payload<R: Read>(r: &mut BinaryReader<R>, filled: bool) -> SketchResult<Self> {
        let color = r.read_color()?;
        let bounds = r.read_rect()?;
        if filled {
            Ok(Self::filled(bounds, color))
        } else {
            let thickness = r.read_i32()?;
            Ok(Self::outlined(bounds, color, thickness))
        }
    }
}

impl Sketchable for RectangleShape {
    fn draw<S: Surface>(&self, surface: &mut S) {
        if self.filled {
            surface.fill_rect(self.bounds, self.color);
        } else {
            surface.draw_rect(self.bounds, self.color, self.thickness);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        if self.filled {
            return point_in_rect(point, self.bounds);
        }
        // Ring between the grown and the shrunk outline.
        point_in_rect(point, expand_rect(self.bounds, HIT_MARGIN))
            && !point_in_rect(point, expand_rect(self.bounds, -HIT_MARGIN))
    }

    fn rotate_90(&mut self, canvas: Size) {
        self.bounds = rotate_rect_90(self.bounds, canvas);
    }
}
