use std::io::{Read, Write};

use super::{HIT_MARGIN, Sketchable};
use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::SketchResult;
use crate::geometry::{Point, Size, distance_point_to_segment};
use crate::surface::Surface;

/// Straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    p1: Point,
    p2: Point,
    color: Color,
    thickness: i32,
}

impl LineShape {
    pub fn new(p1: Point, p2: Point, color: Color, thickness: i32) -> Self {
        Self {
            p1,
            p2,
            color,
            thickness: thickness.max(0),
        }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub(crate) fn write_payload<W: Write>(&self, w: &mut BinaryWriter<W>) -> std::io::Result<()> {
        w.write_color(self.color)?;
        w.write_point(self.p1)?;
        w.write_point(self.p2)?;
        w.write_i32(self.thickness)
    }

    pub(crate) fn read_payload<R: Read>(r: &mut BinaryReader<R>) -> SketchResult<Self> {
        let color = r.read_color()?;
        let p1 = r.read_point()?;
        let p2 = r.read_point()?;
        let thickness = r.read_i32()?;
        Ok(Self::new(p1, p2, color, thickness))
    }
}

impl Sketchable for LineShape {
    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.draw_line(self.p1, self.p2, self.color, self.thickness);
    }

    fn hit_test(&self, point: Point) -> bool {
        distance_point_to_segment(point, self.p1, self.p2) < HIT_MARGIN as f64
    }

    fn rotate_90(&mut self, canvas: Size) {
        self.p1 = self.p1.rotated_90(canvas);
        self.p2 = self.p2.rotated_90(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> LineShape {
        LineShape::new(Point::new(0, 0), Point::new(10, 0), Color::BLACK, 2)
    }

    #[test]
    fn test_hit_within_margin() {
        assert!(line().hit_test(Point::new(5, 1)));
        assert!(line().hit_test(Point::new(5, 3)));
        assert!(!line().hit_test(Point::new(5, 4)));
        assert!(!line().hit_test(Point::new(5, 10)));
    }

    #[test]
    fn test_hit_past_endpoints() {
        assert!(line().hit_test(Point::new(-2, 2)));
        assert!(!line().hit_test(Point::new(14, 0)));
    }

    #[test]
    fn test_negative_thickness_is_clamped() {
        let l = LineShape::new(Point::new(0, 0), Point::new(1, 1), Color::RED, -3);
        assert_eq!(l.thickness(), 0);
    }

    #[test]
    fn test_rotate_moves_both_ends() {
        let mut l = line();
        l.rotate_90(Size::new(100, 50));
        assert_eq!(l.p1(), Point::new(50, 0));
        assert_eq!(l.p2(), Point::new(50, 10));
    }
}
