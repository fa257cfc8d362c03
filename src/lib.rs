#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod codec;
pub mod color;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod settings;
pub mod shape;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use canvas::Canvas;
pub use codec::{read_shapes, write_shapes};
pub use color::Color;
pub use document::Document;
pub use error::{SketchError, SketchResult};
pub use geometry::{Point, Rect, Size};
pub use settings::EditorSettings;
pub use shape::{HIT_MARGIN, Rotation, Shape, ShapeKind, Sketchable};
pub use surface::Surface;
pub use tools::{GestureState, PenStyle, Tool, ToolType};
