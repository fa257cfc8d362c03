use std::io::{Read, Write};

use super::{LineShape, Sketchable};
use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::{SketchError, SketchResult};
use crate::geometry::{Point, Size};
use crate::surface::Surface;

/// Polyline drawn with the pen, stored as its individual segments.
///
/// Segment `i` ends where segment `i + 1` starts; the pen tool keeps that
/// true by always extending from `last_point`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FreehandStroke {
    segments: Vec<LineShape>,
}

impl FreehandStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<LineShape>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[LineShape] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Colour of the first segment, black for an empty stroke.
    pub fn color(&self) -> Color {
        self.segments.first().map(LineShape::color).unwrap_or_default()
    }

    /// End point of the last segment.
    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(LineShape::p2)
    }

    /// Appends a segment to `to`, starting at the current end or at `anchor`
    /// if the stroke is still empty.
    pub fn extend_to(&mut self, anchor: Point, to: Point, color: Color, thickness: i32) {
        let from = self.last_point().unwrap_or(anchor);
        self.segments.push(LineShape::new(from, to, color, thickness));
    }

    pub(crate) fn write_payload<W: Write>(&self, w: &mut BinaryWriter<W>) -> std::io::Result<()> {
        w.write_color(self.color())?;
        let count = i32::try_from(self.segments.len()).map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "too many segments in stroke")
        })?;
        w.write_i32(count)?;
        for segment in &self.segments {
            segment.write_payload(w)?;
        }
        Ok(())
    }

    pub(crate) fn read_payload<R: Read>(r: &mut BinaryReader<R>) -> SketchResult<Self> {
        // The stroke colour is implied by its segments.
        let _color = r.read_color()?;
        let count = r.read_i32()?;
        if count < 0 {
            return Err(SketchError::CorruptRecord(format!("negative segment count {count}")));
        }
        let mut segments = Vec::new();
        for _ in 0..count {
            segments.push(LineShape::read_payload(r)?);
        }
        Ok(Self { segments })
    }
}

impl Sketchable for FreehandStroke {
    fn draw<S: Surface>(&self, surface: &mut S) {
        for segment in &self.segments {
            segment.draw(surface);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        self.segments.iter().any(|segment| segment.hit_test(point))
    }

    fn rotate_90(&mut self, canvas: Size) {
        for segment in &mut self.segments {
            segment.rotate_90(canvas);
        }
    }
}
