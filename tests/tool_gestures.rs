mod common;

use common::{GLYPH_SIZE, recording_document};
use pretty_assertions::assert_eq;
use sketch_editor::geometry::{Point, Rect};
use sketch_editor::shape::{EllipseShape, Glyph, LineShape, RectangleShape};
use sketch_editor::tools::{TwoPointKind, TwoPointTool, new_tool};
use sketch_editor::{Color, GestureState, PenStyle, Shape, Sketchable, Tool, ToolType};

fn style() -> PenStyle {
    PenStyle {
        color: Color::RED,
        line_thickness: 3,
        outline_thickness: 2,
        ..PenStyle::default()
    }
}

#[test]
fn test_rectangle_previews_gray_outline_then_commits() {
    let mut doc = recording_document(200, 200);
    let mut tool = TwoPointTool::new(TwoPointKind::FilledRectangle);
    let style = style();

    tool.on_pointer_down(Point::new(40, 30), &mut doc, &style);
    assert_eq!(tool.state(), GestureState::Dragging { anchor: Point::new(40, 30) });

    tool.on_pointer_move(Point::new(10, 50), &mut doc, &style);
    let preview: Shape = RectangleShape::outlined(Rect::new(10, 30, 30, 20), Color::GRAY, 1).into();
    assert_eq!(doc.overlay(), Some(&preview));
    assert!(doc.is_empty());

    tool.on_pointer_up(Point::new(20, 60), &mut doc, &style);
    let committed: Shape = RectangleShape::filled(Rect::new(20, 30, 20, 30), Color::RED).into();
    assert_eq!(doc.shapes(), &[committed]);
    assert_eq!(doc.overlay(), None);
    assert_eq!(tool.state(), GestureState::Idle);
}

#[test]
fn test_two_point_tools_use_their_thickness() {
    let style = style();
    let cases: [(TwoPointKind, Shape); 3] = [
        (
            TwoPointKind::Line,
            LineShape::new(Point::new(0, 0), Point::new(8, 6), Color::RED, 3).into(),
        ),
        (
            TwoPointKind::Rectangle,
            RectangleShape::outlined(Rect::new(0, 0, 8, 6), Color::RED, 2).into(),
        ),
        (
            TwoPointKind::Ellipse,
            EllipseShape::outlined(Rect::new(0, 0, 8, 6), Color::RED, 2).into(),
        ),
    ];

    for (kind, expected) in cases {
        let mut doc = recording_document(50, 50);
        let mut tool = TwoPointTool::new(kind);
        tool.on_pointer_down(Point::new(0, 0), &mut doc, &style);
        tool.on_pointer_up(Point::new(8, 6), &mut doc, &style);
        assert_eq!(doc.shapes(), &[expected]);
    }
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut doc = recording_document(50, 50);
    let mut tool = TwoPointTool::new(TwoPointKind::Ellipse);
    tool.on_pointer_move(Point::new(5, 5), &mut doc, &style());
    tool.on_pointer_up(Point::new(8, 6), &mut doc, &style());
    assert!(doc.is_empty());
    assert_eq!(doc.overlay(), None);
}

#[test]
fn test_pen_builds_connected_stroke() {
    let mut doc = recording_document(100, 100);
    let mut pen = new_tool("pen").unwrap();
    let style = style();

    pen.on_pointer_down(Point::new(0, 0), &mut doc, &style);
    pen.on_pointer_move(Point::new(5, 5), &mut doc, &style);
    pen.on_pointer_move(Point::new(10, 5), &mut doc, &style);
    assert!(matches!(doc.overlay(), Some(Shape::Freehand(f)) if f.len() == 2));

    pen.on_pointer_up(Point::new(12, 8), &mut doc, &style);
    assert_eq!(doc.overlay(), None);
    assert!(!pen.is_dragging());

    let [Shape::Freehand(stroke)] = doc.shapes() else {
        panic!("expected a single stroke, got {:?}", doc.shapes());
    };
    let points: Vec<(Point, Point)> = stroke.segments().iter().map(|s| (s.p1(), s.p2())).collect();
    assert_eq!(
        points,
        vec![
            (Point::new(0, 0), Point::new(5, 5)),
            (Point::new(5, 5), Point::new(10, 5)),
            (Point::new(10, 5), Point::new(12, 8)),
        ]
    );
    assert!(stroke.segments().iter().all(|s| s.color() == Color::RED && s.thickness() == 3));

    // The next gesture starts a fresh stroke.
    pen.on_pointer_down(Point::new(50, 50), &mut doc, &style);
    pen.on_pointer_up(Point::new(50, 50), &mut doc, &style);
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc.shapes()[1], Shape::Freehand(f) if f.len() == 1));
}

#[test]
fn test_pen_stroke_lives_in_the_overlay() {
    let mut doc = recording_document(100, 100);
    let mut pen = new_tool("pen").unwrap();
    let style = style();

    pen.on_pointer_down(Point::new(1, 1), &mut doc, &style);
    assert!(matches!(doc.overlay(), Some(Shape::Freehand(f)) if f.is_empty()));
    for (i, x) in (2..12).enumerate() {
        pen.on_pointer_move(Point::new(x, 1), &mut doc, &style);
        assert!(matches!(doc.overlay(), Some(Shape::Freehand(f)) if f.len() == i + 1));
    }

    // A preview from elsewhere replaces the stroke; the pen starts a new one.
    doc.set_overlay(Some(LineShape::new(Point::new(0, 0), Point::new(1, 1), Color::GRAY, 1).into()));
    pen.on_pointer_move(Point::new(20, 20), &mut doc, &style);
    pen.on_pointer_up(Point::new(20, 20), &mut doc, &style);

    let [Shape::Freehand(stroke)] = doc.shapes() else {
        panic!("expected a single stroke, got {:?}", doc.shapes());
    };
    assert_eq!(stroke.len(), 1);
    assert_eq!(stroke.segments()[0].p1(), Point::new(1, 1));
    assert_eq!(doc.overlay(), None);
}

#[test]
fn test_eraser_removes_while_dragging() {
    let mut doc = recording_document(100, 100);
    doc.add_shape(LineShape::new(Point::new(0, 10), Point::new(50, 10), Color::BLACK, 1));
    doc.add_shape(LineShape::new(Point::new(0, 40), Point::new(50, 40), Color::BLACK, 1));
    doc.add_shape(LineShape::new(Point::new(0, 80), Point::new(50, 80), Color::BLACK, 1));
    let mut eraser = new_tool("eraser").unwrap();
    let style = style();

    eraser.on_pointer_down(Point::new(20, 10), &mut doc, &style);
    assert_eq!(doc.len(), 3);

    eraser.on_pointer_move(Point::new(20, 11), &mut doc, &style);
    assert_eq!(doc.len(), 2);
    assert!(matches!(doc.overlay(), Some(Shape::Ellipse(_))));

    eraser.on_pointer_move(Point::new(20, 60), &mut doc, &style);
    assert_eq!(doc.len(), 2);

    eraser.on_pointer_up(Point::new(20, 41), &mut doc, &style);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.overlay(), None);
    assert!(doc.shapes()[0].hit_test(Point::new(25, 80)));
}

#[test]
fn test_text_tool_advances_cursor() {
    let mut doc = recording_document(300, 100);
    let mut text = new_tool("text").unwrap();
    let style = style();

    text.on_pointer_down(Point::new(10, 20), &mut doc, &style);
    text.on_pointer_up(Point::new(10, 20), &mut doc, &style);
    for c in ['h', '\r', 'i', '\u{8}'] {
        text.on_character(c, &mut doc, &style);
    }

    assert_eq!(
        doc.shapes(),
        &[
            Shape::Glyph(Glyph::new('h', Point::new(10, 20), GLYPH_SIZE, Color::RED)),
            Shape::Glyph(Glyph::new('i', Point::new(20, 20), GLYPH_SIZE, Color::RED)),
        ]
    );
    let ToolType::Text(inner) = &text else {
        panic!("expected the text tool");
    };
    assert_eq!(inner.cursor(), Point::new(30, 20));
}

#[test]
fn test_typing_before_click_starts_at_origin() {
    let mut doc = recording_document(300, 100);
    let mut text = new_tool("text").unwrap();
    text.on_character('a', &mut doc, &style());
    assert_eq!(
        doc.shapes(),
        &[Shape::Glyph(Glyph::new('a', Point::new(0, 0), GLYPH_SIZE, Color::RED))]
    );
}

#[test]
fn test_other_tools_ignore_characters() {
    let mut doc = recording_document(50, 50);
    for mut tool in ToolType::all().into_iter().filter(|t| t.name() != "text") {
        tool.on_character('z', &mut doc, &style());
    }
    assert!(doc.is_empty());
}
