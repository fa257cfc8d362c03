use super::{GestureState, PenStyle, Tool};
use crate::document::Document;
use crate::geometry::{Point, rect_from_points};
use crate::shape::EllipseShape;
use crate::surface::Surface;

/// Erases continuously: every drag removes the topmost shape under the
/// pointer right away, so an abandoned gesture keeps its deletions.
#[derive(Debug, Clone, Default)]
pub struct EraserTool {
    state: GestureState,
}

impl EraserTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn erase_at<S: Surface>(&self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        let r = style.eraser_radius;
        let ring = rect_from_points(
            Point::new(pos.x.saturating_sub(r), pos.y.saturating_sub(r)),
            Point::new(pos.x.saturating_add(r), pos.y.saturating_add(r)),
        );
        doc.set_overlay(Some(EllipseShape::outlined(ring, style.preview_color, 1).into()));
        doc.remove_topmost_hit_at(pos);
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "eraser"
    }

    fn state(&self) -> GestureState {
        self.state
    }

    fn on_pointer_down<S: Surface>(&mut self, pos: Point, _doc: &mut Document<S>, _style: &PenStyle) {
        self.state = GestureState::Dragging { anchor: pos };
    }

    fn on_pointer_move<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        if self.state.anchor().is_some() {
            self.erase_at(pos, doc, style);
        }
    }

    fn on_pointer_up<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        if self.state.anchor().is_some() {
            self.erase_at(pos, doc, style);
            doc.set_overlay(None);
            self.state = GestureState::Idle;
        }
    }
}
