//! Binary sketch format.
//!
//! A sketch file is a sequence of records with no header:
//!
//! ```text
//! tag        length-prefixed UTF-8 string (see `ShapeKind::tag`)
//! payload    colour (a, r, g, b as i32) followed by the variant fields
//! separator  b'\n'
//! ```
//!
//! Integers are little-endian `i32`, string lengths are 7-bit varints.
//! Reading is forgiving: a truncated or corrupt tail ends the sketch, an
//! unknown tag skips ahead to the next separator.

use std::io::{self, ErrorKind, Read, Write};

use log::{debug, warn};

use crate::color::Color;
use crate::error::{SketchError, SketchResult};
use crate::geometry::{Point, Rect};
use crate::shape::{Shape, ShapeKind};

pub const RECORD_SEPARATOR: u8 = b'\n';

// Longest string the reader accepts before declaring the stream corrupt.
const MAX_STRING_LEN: usize = 64 * 1024;

pub struct BinaryWriter<W: Write> {
    inner: W,
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.inner.write_all(&[value])
    }

    pub fn write_i32(&mut self, value: i32) -> io::Result<()> {
        self.inner.write_all(&value.to_le_bytes())
    }

    pub fn write_string(&mut self, value: &str) -> io::Result<()> {
        let mut len = value.len();
        loop {
            let byte = (len & 0x7f) as u8;
            len >>= 7;
            if len == 0 {
                self.write_u8(byte)?;
                break;
            }
            self.write_u8(byte | 0x80)?;
        }
        self.inner.write_all(value.as_bytes())
    }

    pub fn write_char(&mut self, value: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.inner.write_all(value.encode_utf8(&mut buf).as_bytes())
    }

    pub fn write_color(&mut self, color: Color) -> io::Result<()> {
        self.write_i32(color.a as i32)?;
        self.write_i32(color.r as i32)?;
        self.write_i32(color.g as i32)?;
        self.write_i32(color.b as i32)
    }

    pub fn write_point(&mut self, p: Point) -> io::Result<()> {
        self.write_i32(p.x)?;
        self.write_i32(p.y)
    }

    pub fn write_rect(&mut self, r: Rect) -> io::Result<()> {
        self.write_i32(r.x)?;
        self.write_i32(r.y)?;
        self.write_i32(r.width)?;
        self.write_i32(r.height)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub struct BinaryReader<R: Read> {
    inner: R,
    bytes_read: u64,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, bytes_read: 0 }
    }

    /// Total bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)?;
        self.bytes_read += buf.len() as u64;
        Ok(())
    }

    pub fn read_u8(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_i32(&mut self) -> io::Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    pub fn read_string(&mut self) -> io::Result<String> {
        let mut len = 0usize;
        let mut shift = 0;
        loop {
            let byte = self.read_u8()?;
            len |= ((byte & 0x7f) as usize) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift > 28 {
                return Err(io::Error::new(ErrorKind::InvalidData, "string length prefix too long"));
            }
        }
        if len > MAX_STRING_LEN {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("string of {len} bytes exceeds limit"),
            ));
        }

        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }

    pub fn read_char(&mut self) -> io::Result<char> {
        let first = self.read_u8()?;
        let width = match first {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Err(io::Error::new(ErrorKind::InvalidData, "invalid UTF-8 lead byte")),
        };
        let mut buf = [first, 0, 0, 0];
        self.read_exact(&mut buf[1..width])?;
        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| io::Error::new(ErrorKind::InvalidData, "invalid UTF-8 character"))
    }

    pub fn read_color(&mut self) -> io::Result<Color> {
        let a = self.read_i32()?;
        let r = self.read_i32()?;
        let g = self.read_i32()?;
        let b = self.read_i32()?;
        Ok(Color::from_channels(a, r, g, b))
    }

    pub fn read_point(&mut self) -> io::Result<Point> {
        let x = self.read_i32()?;
        let y = self.read_i32()?;
        Ok(Point::new(x, y))
    }

    pub fn read_rect(&mut self) -> io::Result<Rect> {
        let x = self.read_i32()?;
        let y = self.read_i32()?;
        let width = self.read_i32()?;
        let height = self.read_i32()?;
        Ok(Rect::new(x, y, width, height))
    }

    /// Consumes bytes up to and including the next record separator.
    /// Returns false if the stream ended first.
    // A payload byte equal to the separator ends the skip early, and the
    // leftover bytes are then read as a record of their own.
    fn skip_record(&mut self) -> io::Result<bool> {
        loop {
            match self.read_u8() {
                Ok(RECORD_SEPARATOR) => return Ok(true),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(false),
                Err(e) => return Err(e),
            }
        }
    }
}

/// Writes every shape as one record, in order.
pub fn write_shapes<W: Write>(writer: W, shapes: &[Shape]) -> SketchResult<()> {
    let mut w = BinaryWriter::new(writer);
    for shape in shapes {
        w.write_string(shape.kind().tag())?;
        shape.write_payload(&mut w)?;
        w.write_u8(RECORD_SEPARATOR)?;
    }
    w.flush()?;
    debug!("Wrote {} shape records", shapes.len());
    Ok(())
}

enum Record {
    Shape(Shape),
    Skipped,
    End,
}

fn read_record<R: Read>(r: &mut BinaryReader<R>) -> SketchResult<Record> {
    let start = r.bytes_read();
    let tag = match r.read_string() {
        Ok(tag) => tag,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof && r.bytes_read() == start => {
            return Ok(Record::End);
        }
        Err(e) => return Err(e.into()),
    };

    let Some(kind) = ShapeKind::from_tag(&tag) else {
        warn!("Skipping record with unknown tag {tag:?} at byte {start}");
        return Ok(if r.skip_record()? { Record::Skipped } else { Record::End });
    };

    let shape = Shape::read_payload(kind, r)?;
    let separator = r.read_u8()?;
    if separator != RECORD_SEPARATOR {
        return Err(SketchError::CorruptRecord(format!(
            "expected record separator after {tag} record, found {separator:#04x}"
        )));
    }
    Ok(Record::Shape(shape))
}

/// Damage to the stream itself, as opposed to a failing reader.
fn is_recoverable(err: &SketchError) -> bool {
    match err {
        SketchError::Io(e) => matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::InvalidData),
        SketchError::CorruptRecord(_) | SketchError::InvalidRotation(_) => true,
        _ => false,
    }
}

/// Reads records until the stream ends.
///
/// A truncated or corrupt record stops reading and the shapes read so far are
/// returned. Only failures of the underlying reader are reported as errors.
pub fn read_shapes<R: Read>(reader: R) -> SketchResult<Vec<Shape>> {
    let mut r = BinaryReader::new(reader);
    let mut shapes = Vec::new();
    loop {
        match read_record(&mut r) {
            Ok(Record::Shape(shape)) => shapes.push(shape),
            Ok(Record::Skipped) => {}
            Ok(Record::End) => break,
            Err(e) if is_recoverable(&e) => {
                warn!("Stopped reading sketch at byte {}: {e}", r.bytes_read());
                break;
            }
            Err(e) => return Err(e),
        }
    }
    debug!("Read {} shape records", shapes.len());
    Ok(shapes)
}
