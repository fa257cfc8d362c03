use super::{GestureState, PenStyle, Tool};
use crate::document::Document;
use crate::geometry::Point;
use crate::shape::Glyph;
use crate::surface::Surface;

/// Types text one glyph shape per character, left to right from the last
/// click. Pointer gestures only move the insertion point.
#[derive(Debug, Clone, Default)]
pub struct TextTool {
    state: GestureState,
    cursor: Point,
}

impl TextTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the next glyph goes.
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "text"
    }

    fn state(&self) -> GestureState {
        self.state
    }

    fn on_pointer_down<S: Surface>(&mut self, pos: Point, _doc: &mut Document<S>, _style: &PenStyle) {
        self.state = GestureState::Dragging { anchor: pos };
        self.cursor = pos;
    }

    fn on_pointer_move<S: Surface>(&mut self, _pos: Point, _doc: &mut Document<S>, _style: &PenStyle) {}

    fn on_pointer_up<S: Surface>(&mut self, _pos: Point, _doc: &mut Document<S>, _style: &PenStyle) {
        self.state = GestureState::Idle;
    }

    fn on_character<S: Surface>(&mut self, c: char, doc: &mut Document<S>, style: &PenStyle) {
        if c < ' ' {
            return;
        }
        let size = doc.measure_glyph(c);
        doc.add_shape(Glyph::new(c, self.cursor, size, style.color));
        self.cursor.x = self.cursor.x.saturating_add(size.width);
    }
}
