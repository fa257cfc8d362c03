use pretty_assertions::assert_eq;
use sketch_editor::file_handler::{self, SKETCH_EXTENSION};
use sketch_editor::geometry::{Point, Rect, Size};
use sketch_editor::shape::{EllipseShape, FreehandStroke, Glyph, LineShape, RectangleShape};
use sketch_editor::{Canvas, Color, Document, EditorSettings, SketchError};

fn sample_document() -> Document<Canvas> {
    let mut doc = EditorSettings {
        canvas_width: 80,
        canvas_height: 60,
        ..EditorSettings::default()
    }
    .new_document()
    .unwrap();

    let mut stroke = FreehandStroke::new();
    stroke.extend_to(Point::new(5, 5), Point::new(20, 10), Color::BLUE, 3);
    stroke.extend_to(Point::new(5, 5), Point::new(30, 30), Color::BLUE, 3);

    doc.add_shape(RectangleShape::filled(Rect::new(0, 0, 10, 10), Color::RED));
    doc.add_shape(EllipseShape::outlined(Rect::new(20, 20, 30, 20), Color::GREEN, 2));
    doc.add_shape(LineShape::new(Point::new(0, 59), Point::new(79, 0), Color::BLACK, 1));
    doc.add_shape(stroke);
    let size = doc.measure_glyph('K');
    doc.add_shape(Glyph::new('K', Point::new(50, 5), size, Color::BLACK));
    doc
}

#[test]
fn test_sketch_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("drawing.{SKETCH_EXTENSION}"));
    let mut doc = sample_document();

    file_handler::save(&mut doc, &path).unwrap();
    assert_eq!(file_handler::load(&path).unwrap(), doc.shapes().to_vec());

    let mut other = EditorSettings::default().new_document().unwrap();
    other.add_shape(LineShape::new(Point::new(1, 1), Point::new(2, 2), Color::RED, 1));
    file_handler::open_into(&mut other, &path).unwrap();
    assert_eq!(other.shapes(), doc.shapes());
}

#[test]
fn test_png_export_holds_rendered_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.png");
    let mut doc = sample_document();

    file_handler::save(&mut doc, &path).unwrap();
    let exported = image::open(&path).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (80, 60));
    assert_eq!(exported.get_pixel(2, 8).0, [255, 0, 0, 255]);
    assert_eq!(exported.get_pixel(78, 57).0, [255, 255, 255, 255]);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = sample_document();

    let err = file_handler::save(&mut doc, dir.path().join("drawing.gif")).unwrap_err();
    assert!(matches!(err, SketchError::UnsupportedFormat(_)));
    assert!(!dir.path().join("drawing.gif").exists());

    let err = file_handler::load(dir.path().join("drawing.png")).unwrap_err();
    assert!(matches!(err, SketchError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_sketch_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = file_handler::load(dir.path().join("absent.sketch")).unwrap_err();
    assert!(matches!(err, SketchError::Io(_)));
}

#[test]
fn test_damaged_file_keeps_leading_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("damaged.sketch");
    let mut doc = sample_document();
    file_handler::save(&mut doc, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();
    let loaded = file_handler::load(&path).unwrap();
    assert_eq!(loaded.as_slice(), &doc.shapes()[..doc.len() - 1]);
}

#[test]
fn test_settings_size_the_canvas() {
    let doc = sample_document();
    assert_eq!(doc.surface_size(), Size::new(80, 60));
}
