use std::io::{Read, Write};

use super::{HIT_MARGIN, Sketchable};
use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::SketchResult;
use crate::geometry::{Point, Rect, Size, expand_rect, point_in_ellipse, rotate_rect_90};
use crate::surface::Surface;

/// Ellipse inscribed in `bounds`, either outlined or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseShape {
    bounds: Rect,
    color: Color,
    thickness: i32,
    filled: bool,
}

impl EllipseShape {
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

impl Sketchable for EllipseShape {
    fn draw<S: Surface>(&self, surface: &mut S) {
        if self.filled {
            surface.fill_ellipse(self.bounds, self.color);
        } else {
            surface.draw_ellipse(self.bounds, self.color, self.thickness);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        if self.filled {
            return point_in_ellipse(point, self.bounds);
        }
        point_in_ellipse(point, expand_rect(self.bounds, HIT_MARGIN))
            && !point_in_ellipse(point, expand_rect(self.bounds, -HIT_MARGIN))
    }

    fn rotate_90(&mut self, canvas: Size) {
        self.bounds = rotate_rect_90(self.bounds, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_ring_hit() {
        let e = EllipseShape::outlined(Rect::new(0, 0, 40, 20), Color::BLUE, 1);
        // on the rightmost point of the outline
        assert!(e.hit_test(Point::new(40, 10)));
        // three units outside it
        assert!(e.hit_test(Point::new(43, 10)));
        assert!(!e.hit_test(Point::new(45, 10)));
        assert!(!e.hit_test(Point::new(20, 10)));
    }

    #[test]
    fn test_small_outline_has_no_interior_hole() {
        // shrunk by the margin this ellipse vanishes, so the whole grown ellipse hits
        let e = EllipseShape::outlined(Rect::new(0, 0, 6, 6), Color::BLUE, 1);
        assert!(e.hit_test(Point::new(3, 3)));
    }

    #[test]
    fn test_filled_interior_hit() {
        let e = EllipseShape::filled(Rect::new(0, 0, 40, 20), Color::GREEN);
        assert!(e.hit_test(Point::new(20, 10)));
        assert!(!e.hit_test(Point::new(0, 0)));
    }
}
