use super::{GestureState, PenStyle, Tool};
use crate::document::Document;
use crate::geometry::Point;
use crate::shape::{FreehandStroke, Shape};
use crate::surface::Surface;

/// Freehand drawing. The stroke being drawn lives in the document's overlay
/// and is extended there, one segment per drag event.
#[derive(Debug, Clone, Default)]
pub struct PenTool {
    state: GestureState,
}

impl PenTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        "pen"
    }

    fn state(&self) -> GestureState {
        self.state
    }

    fn on_pointer_down<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, _style: &PenStyle) {
        doc.set_overlay(Some(Shape::Freehand(FreehandStroke::new())));
        self.state = GestureState::Dragging { anchor: pos };
    }

    fn on_pointer_move<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        let GestureState::Dragging { anchor } = self.state else {
            return;
        };
        if let Some(Shape::Freehand(stroke)) = doc.overlay_mut() {
            stroke.extend_to(anchor, pos, style.color, style.line_thickness);
            return;
        }
        // Something else replaced the overlay mid-gesture; start over from here.
        let mut stroke = FreehandStroke::new();
        stroke.extend_to(anchor, pos, style.color, style.line_thickness);
        doc.set_overlay(Some(Shape::Freehand(stroke)));
    }

    fn on_pointer_up<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        let GestureState::Dragging { anchor } = self.state else {
            return;
        };
        let mut stroke = match doc.take_overlay() {
            Some(Shape::Freehand(stroke)) => stroke,
            _ => FreehandStroke::new(),
        };
        if stroke.last_point() != Some(pos) {
            stroke.extend_to(anchor, pos, style.color, style.line_thickness);
        }
        doc.add_shape(stroke);
        self.state = GestureState::Idle;
    }
}
