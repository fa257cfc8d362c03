use super::{GestureState, PenStyle, Tool};
use crate::document::Document;
use crate::geometry::{Point, rect_from_points};
use crate::shape::{EllipseShape, LineShape, RectangleShape, Shape};
use crate::surface::Surface;

/// Shapes spanned by a press point and a release point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoPointKind {
    Line,
    Rectangle,
    FilledRectangle,
    Ellipse,
    FilledEllipse,
}

/// Previews an outline while dragging and commits the styled shape on release.
#[derive(Debug, Clone)]
pub struct TwoPointTool {
    kind: TwoPointKind,
    state: GestureState,
}

impl TwoPointTool {
    pub fn new(kind: TwoPointKind) -> Self {
        Self {
            kind,
            state: GestureState::Idle,
        }
    }

    pub fn kind(&self) -> TwoPointKind {
        self.kind
    }

    /// Always a thin outline in the preview colour, whatever the final style.
    fn preview(&self, p1: Point, p2: Point, style: &PenStyle) -> Shape {
        let rect = rect_from_points(p1, p2);
        match self.kind {
            TwoPointKind::Line => LineShape::new(p1, p2, style.preview_color, 1).into(),
            TwoPointKind::Rectangle | TwoPointKind::FilledRectangle => {
                RectangleShape::outlined(rect, style.preview_color, 1).into()
            }
            TwoPointKind::Ellipse | TwoPointKind::FilledEllipse => {
                EllipseShape::outlined(rect, style.preview_color, 1).into()
            }
        }
    }

    fn finished(&self, p1: Point, p2: Point, style: &PenStyle) -> Shape {
        let rect = rect_from_points(p1, p2);
        match self.kind {
            TwoPointKind::Line => LineShape::new(p1, p2, style.color, style.line_thickness).into(),
            TwoPointKind::Rectangle => {
                RectangleShape::outlined(rect, style.color, style.outline_thickness).into()
            }
            TwoPointKind::FilledRectangle => RectangleShape::filled(rect, style.color).into(),
            TwoPointKind::Ellipse => {
                EllipseShape::outlined(rect, style.color, style.outline_thickness).into()
            }
            TwoPointKind::FilledEllipse => EllipseShape::filled(rect, style.color).into(),
        }
    }
}

impl Tool for TwoPointTool {
    fn name(&self) -> &'static str {
        match self.kind {
            TwoPointKind::Line => "line",
            TwoPointKind::Rectangle => "rectangle",
            TwoPointKind::FilledRectangle => "filled rectangle",
            TwoPointKind::Ellipse => "ellipse",
            TwoPointKind::FilledEllipse => "filled ellipse",
        }
    }

    fn state(&self) -> GestureState {
        self.state
    }

    fn on_pointer_down<S: Surface>(&mut self, pos: Point, _doc: &mut Document<S>, _style: &PenStyle) {
        self.state = GestureState::Dragging { anchor: pos };
    }

    fn on_pointer_move<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        if let GestureState::Dragging { anchor } = self.state {
            doc.set_overlay(Some(self.preview(anchor, pos, style)));
        }
    }

    fn on_pointer_up<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        if let GestureState::Dragging { anchor } = self.state {
            doc.add_shape(self.finished(anchor, pos, style));
            doc.set_overlay(None);
            self.state = GestureState::Idle;
        }
    }
}
