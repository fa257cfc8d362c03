use std::io::{Read, Write};

use crate::codec::{BinaryReader, BinaryWriter};
use crate::color::Color;
use crate::error::{SketchError, SketchResult};
use crate::geometry::{Point, Size};
use crate::surface::Surface;

mod ellipse;
mod freehand;
mod glyph;
mod line;
mod rectangle;

pub use ellipse::EllipseShape;
pub use freehand::FreehandStroke;
pub use glyph::Glyph;
pub use line::LineShape;
pub use rectangle::RectangleShape;

/// Tolerance around outline geometry within which a point still hits.
pub const HIT_MARGIN: i32 = 4;

/// Behaviour every shape variant provides.
pub trait Sketchable {
    /// Paints the shape; only the surface is modified.
    fn draw<S: Surface>(&self, surface: &mut S);

    /// Whether `point` counts as clicking this shape.
    fn hit_test(&self, point: Point) -> bool;

    /// Moves the geometry to follow a 90° clockwise turn of a `canvas`-sized sketch.
    fn rotate_90(&mut self, canvas: Size);
}

/// Quarter-turn orientation of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Accepts any multiple of 90, normalized into one full turn.
    pub fn from_degrees(degrees: i32) -> SketchResult<Self> {
        if degrees % 90 != 0 {
            return Err(SketchError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// One more quarter turn clockwise.
    pub fn turned_clockwise(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

/// Record tag of each variant in a sketch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    FilledRectangle,
    Ellipse,
    FilledEllipse,
    Freehand,
    Glyph,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::FilledRectangle,
        ShapeKind::Ellipse,
        ShapeKind::FilledEllipse,
        ShapeKind::Freehand,
        ShapeKind::Glyph,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::FilledRectangle => "filled-rectangle",
            Self::Ellipse => "ellipse",
            Self::FilledEllipse => "filled-ellipse",
            Self::Freehand => "freehand",
            Self::Glyph => "glyph",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// Every drawable thing a sketch can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LineShape),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Freehand(FreehandStroke),
    Glyph(Glyph),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(r) if r.is_filled() => ShapeKind::FilledRectangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(e) if e.is_filled() => ShapeKind::FilledEllipse,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Freehand(_) => ShapeKind::Freehand,
            Shape::Glyph(_) => ShapeKind::Glyph,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Line(l) => l.color(),
            Shape::Rectangle(r) => r.color(),
            Shape::Ellipse(e) => e.color(),
            Shape::Freehand(f) => f.color(),
            Shape::Glyph(g) => g.color(),
        }
    }

    /// Writes the variant payload (colour prefix included, no tag or separator).
    pub fn write_payload<W: Write>(&self, w: &mut BinaryWriter<W>) -> std::io::Result<()> {
        match self {
            Shape::Line(l) => l.write_payload(w),
            Shape::Rectangle(r) => r.write_payload(w),
            Shape::Ellipse(e) => e.write_payload(w),
            Shape::Freehand(f) => f.write_payload(w),
            Shape::Glyph(g) => g.write_payload(w),
        }
    }

    /// Reads the payload that follows a `kind` tag.
    pub fn read_payload<R: Read>(kind: ShapeKind, r: &mut BinaryReader<R>) -> SketchResult<Self> {
        Ok(match kind {
            ShapeKind::Line => Shape::Line(LineShape::read_payload(r)?),
            ShapeKind::Rectangle => Shape::Rectangle(RectangleShape::read_payload(r, false)?),
            ShapeKind::FilledRectangle => Shape::Rectangle(RectangleShape::read_payload(r, true)?),
            ShapeKind::Ellipse => Shape::Ellipse(EllipseShape::read_payload(r, false)?),
            ShapeKind::FilledEllipse => Shape::Ellipse(EllipseShape::read_payload(r, true)?),
            ShapeKind::Freehand => Shape::Freehand(FreehandStroke::read_payload(r)?),
            ShapeKind::Glyph => Shape::Glyph(Glyph::read_payload(r)?),
        })
    }
}

impl Sketchable for Shape {
    fn draw<S: Surface>(&self, surface: &mut S) {
        match self {
            Shape::Line(l) => l.draw(surface),
            Shape::Rectangle(r) => r.draw(surface),
            Shape::Ellipse(e) => e.draw(surface),
            Shape::Freehand(f) => f.draw(surface),
            Shape::Glyph(g) => g.draw(surface),
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Line(l) => l.hit_test(point),
            Shape::Rectangle(r) => r.hit_test(point),
            Shape::Ellipse(e) => e.hit_test(point),
            Shape::Freehand(f) => f.hit_test(point),
            Shape::Glyph(g) => g.hit_test(point),
        }
    }

    fn rotate_90(&mut self, canvas: Size) {
        match self {
            Shape::Line(l) => l.rotate_90(canvas),
            Shape::Rectangle(r) => r.rotate_90(canvas),
            Shape::Ellipse(e) => e.rotate_90(canvas),
            Shape::Freehand(f) => f.rotate_90(canvas),
            Shape::Glyph(g) => g.rotate_90(canvas),
        }
    }
}

impl From<LineShape> for Shape {
    fn from(l: LineShape) -> Self {
        Shape::Line(l)
    }
}

impl From<RectangleShape> for Shape {
    fn from(r: RectangleShape) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<EllipseShape> for Shape {
    fn from(e: EllipseShape) -> Self {
        Shape::Ellipse(e)
    }
}

impl From<FreehandStroke> for Shape {
    fn from(f: FreehandStroke) -> Self {
        Shape::Freehand(f)
    }
}

impl From<Glyph> for Shape {
    fn from(g: Glyph) -> Self {
        Shape::Glyph(g)
    }
}
