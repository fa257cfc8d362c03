use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::codec;
use crate::document::Document;
use crate::error::{SketchError, SketchResult};
use crate::shape::Shape;

/// Extension of the native binary sketch format.
pub const SKETCH_EXTENSION: &str = "sketch";

/// What a file name asks to be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Sketch,
    Raster(ImageFormat),
}

impl FileFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if ext == SKETCH_EXTENSION {
            return Ok(Self::Sketch);
        }
        match ImageFormat::from_extension(&ext) {
            Some(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp)) => Ok(Self::Raster(format)),
            _ => Err(SketchError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Saves the sketch to `path`: shapes for `.sketch`, composited pixels for
/// `.png`, `.jpg`/`.jpeg` and `.bmp`.
pub fn save(doc: &mut Document<Canvas>, path: impl AsRef<Path>) -> SketchResult<()> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Sketch => {
            let writer = BufWriter::new(File::create(path)?);
            codec::write_shapes(writer, doc.shapes())?;
            log::info!("Saved {} shapes to {}", doc.len(), path.display());
        }
        FileFormat::Raster(format) => {
            let bytes = doc.render().encode(format)?;
            fs::write(path, bytes)?;
            log::info!("Exported {:?} image to {}", format, path.display());
        }
    }
    Ok(())
}

/// Reads the shapes of a `.sketch` file. A damaged tail is dropped, not reported.
pub fn load(path: impl AsRef<Path>) -> SketchResult<Vec<Shape>> {
    let path = path.as_ref();
    if FileFormat::from_path(path)? != FileFormat::Sketch {
        log::warn!("Only sketch files can be opened: {}", path.display());
        return Err(SketchError::UnsupportedFormat(path.display().to_string()));
    }
    let shapes = codec::read_shapes(BufReader::new(File::open(path)?))?;
    log::info!("Loaded {} shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}

/// Replaces the document's shapes with those stored at `path`.
pub fn open_into(doc: &mut Document<Canvas>, path: impl AsRef<Path>) -> SketchResult<()> {
    let shapes = load(path)?;
    doc.replace_shapes(shapes);
    Ok(())
}
