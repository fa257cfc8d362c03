use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, DEFAULT_FONT_SIZE};
use crate::color::Color;
use crate::document::Document;
use crate::error::SketchResult;
use crate::geometry::Size;
use crate::tools::PenStyle;

/// User-tunable editor settings, stored as JSON and in the app's storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct EditorSettings {
    pub pen_color: Color,
    /// Width of committed lines and pen strokes.
    pub line_thickness: i32,
    /// Width of committed rectangle and ellipse outlines.
    pub outline_thickness: i32,
    pub preview_color: Color,
    pub background: Color,
    pub eraser_radius: i32,
    pub font_size: f32,
    pub canvas_width: i32,
    pub canvas_height: i32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        let style = PenStyle::default();
        Self {
            pen_color: style.color,
            line_thickness: style.line_thickness,
            outline_thickness: style.outline_thickness,
            preview_color: style.preview_color,
            background: Color::WHITE,
            eraser_radius: style.eraser_radius,
            font_size: DEFAULT_FONT_SIZE,
            canvas_width: 700,
            canvas_height: 500,
        }
    }
}

impl EditorSettings {
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SketchResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn pen_style(&self) -> PenStyle {
        PenStyle {
            color: self.pen_color,
            line_thickness: self.line_thickness.max(0),
            outline_thickness: self.outline_thickness.max(0),
            preview_color: self.preview_color,
            eraser_radius: self.eraser_radius.max(0),
        }
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width.max(1), self.canvas_height.max(1))
    }

    /// Empty sketch on a canvas of the configured size and font.
    pub fn new_document(&self) -> SketchResult<Document<Canvas>> {
        let canvas = Canvas::new(self.canvas_size(), self.font_size)?;
        Ok(Document::new(canvas).with_background(self.background))
    }
}
