use crate::color::Color;
use crate::document::Document;
use crate::geometry::Point;
use crate::surface::Surface;

/// Where a tool is within one press → drag* → release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is held down; `anchor` is where it went down.
    Dragging { anchor: Point },
}

impl GestureState {
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(*anchor),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}

/// Styling the tools stamp onto the shapes they create.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub color: Color,
    pub line_thickness: i32,
    pub outline_thickness: i32,
    pub preview_color: Color,
    pub eraser_radius: i32,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_thickness: 4,
            outline_thickness: 1,
            preview_color: Color::GRAY,
            eraser_radius: 2,
        }
    }
}

/// Tool trait defines the interface for all drawing tools.
///
/// Events arrive in gesture order: one press, zero or more drags, one
/// release. Tools only change pixels through shapes they hand the document.
pub trait Tool {
    /// Label shown in the toolbox.
    fn name(&self) -> &'static str;

    fn state(&self) -> GestureState;

    /// Handle pointer press on the canvas.
    fn on_pointer_down<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle);

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle);

    /// Handle pointer release; this is where most tools commit their shape.
    fn on_pointer_up<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle);

    /// A typed character. Only the text tool cares.
    fn on_character<S: Surface>(&mut self, _c: char, _doc: &mut Document<S>, _style: &PenStyle) {}
}

mod eraser_tool;
mod pen_tool;
mod text_tool;
mod two_point_tool;

pub use eraser_tool::EraserTool;
pub use pen_tool::PenTool;
pub use text_tool::TextTool;
pub use two_point_tool::{TwoPointKind, TwoPointTool};

/// Enum representing all available tools, so the active tool can be held by
/// value and swapped without boxing.
#[derive(Debug, Clone)]
pub enum ToolType {
    Pen(PenTool),
    TwoPoint(TwoPointTool),
    Text(TextTool),
    Eraser(EraserTool),
}

impl Default for ToolType {
    fn default() -> Self {
        ToolType::Pen(PenTool::new())
    }
}

impl ToolType {
    /// Every tool, in toolbox order.
    pub fn all() -> Vec<ToolType> {
        vec![
            ToolType::Pen(PenTool::new()),
            ToolType::TwoPoint(TwoPointTool::new(TwoPointKind::Line)),
            ToolType::TwoPoint(TwoPointTool::new(TwoPointKind::Rectangle)),
            ToolType::TwoPoint(TwoPointTool::new(TwoPointKind::FilledRectangle)),
            ToolType::Text(TextTool::new()),
            ToolType::Eraser(EraserTool::new()),
            ToolType::TwoPoint(TwoPointTool::new(TwoPointKind::Ellipse)),
            ToolType::TwoPoint(TwoPointTool::new(TwoPointKind::FilledEllipse)),
        ]
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state(), GestureState::Dragging { .. })
    }
}

// Factory function to create a new tool from its toolbox label
pub fn new_tool(name: &str) -> Option<ToolType> {
    ToolType::all().into_iter().find(|tool| tool.name() == name)
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.name(),
            Self::TwoPoint(tool) => tool.name(),
            Self::Text(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
        }
    }

    fn state(&self) -> GestureState {
        match self {
            Self::Pen(tool) => tool.state(),
            Self::TwoPoint(tool) => tool.state(),
            Self::Text(tool) => tool.state(),
            Self::Eraser(tool) => tool.state(),
        }
    }

    fn on_pointer_down<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        match self {
            Self::Pen(tool) => tool.on_pointer_down(pos, doc, style),
            Self::TwoPoint(tool) => tool.on_pointer_down(pos, doc, style),
            Self::Text(tool) => tool.on_pointer_down(pos, doc, style),
            Self::Eraser(tool) => tool.on_pointer_down(pos, doc, style),
        }
    }

    fn on_pointer_move<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        match self {
            Self::Pen(tool) => tool.on_pointer_move(pos, doc, style),
            Self::TwoPoint(tool) => tool.on_pointer_move(pos, doc, style),
            Self::Text(tool) => tool.on_pointer_move(pos, doc, style),
            Self::Eraser(tool) => tool.on_pointer_move(pos, doc, style),
        }
    }

    fn on_pointer_up<S: Surface>(&mut self, pos: Point, doc: &mut Document<S>, style: &PenStyle) {
        match self {
            Self::Pen(tool) => tool.on_pointer_up(pos, doc, style),
            Self::TwoPoint(tool) => tool.on_pointer_up(pos, doc, style),
            Self::Text(tool) => tool.on_pointer_up(pos, doc, style),
            Self::Eraser(tool) => tool.on_pointer_up(pos, doc, style),
        }
    }

    fn on_character<S: Surface>(&mut self, c: char, doc: &mut Document<S>, style: &PenStyle) {
        match self {
            Self::Pen(tool) => tool.on_character(c, doc, style),
            Self::TwoPoint(tool) => tool.on_character(c, doc, style),
            Self::Text(tool) => tool.on_character(c, doc, style),
            Self::Eraser(tool) => tool.on_character(c, doc, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbox_order_and_lookup() {
        let names: Vec<_> = ToolType::all().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "pen",
                "line",
                "rectangle",
                "filled rectangle",
                "text",
                "eraser",
                "ellipse",
                "filled ellipse"
            ]
        );
        assert!(matches!(new_tool("eraser"), Some(ToolType::Eraser(_))));
        assert!(new_tool("brush").is_none());
    }

    #[test]
    fn test_new_tools_start_idle() {
        for tool in ToolType::all() {
            assert_eq!(tool.state(), GestureState::Idle);
            assert!(!tool.is_dragging());
        }
    }
}
