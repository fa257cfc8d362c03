use eframe::egui;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::document::Document;
use crate::file_handler;
use crate::geometry::{Point, Size};
use crate::settings::EditorSettings;
use crate::tools::{Tool, ToolType};

/// We derive Deserialize/Serialize so we can persist the settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    settings: EditorSettings,
    // The sketch itself is saved explicitly, not with the app state
    #[serde(skip)]
    document: Option<Document<Canvas>>,
    #[serde(skip)]
    active_tool: ToolType,
    #[serde(skip)]
    texture: Option<egui::TextureHandle>,
    #[serde(skip)]
    file_name: String,
    #[serde(skip)]
    status: Option<String>,
    #[serde(skip)]
    last_pointer: Option<Point>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(EditorSettings::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: EditorSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    fn with_settings(settings: EditorSettings) -> Self {
        let (document, status) = match settings.new_document() {
            Ok(doc) => (Some(doc), None),
            Err(err) => {
                log::error!("Failed to create sketch canvas: {err}");
                (None, Some(err.to_string()))
            }
        };
        Self {
            settings,
            document,
            active_tool: ToolType::default(),
            texture: None,
            file_name: format!("untitled.{}", file_handler::SKETCH_EXTENSION),
            status,
            last_pointer: None,
        }
    }

    fn toolbox(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.separator();

        for tool in ToolType::all() {
            let selected = self.active_tool.name() == tool.name();
            if ui.selectable_label(selected, tool.name()).clicked() && !self.active_tool.is_dragging() {
                self.active_tool = tool;
            }
        }

        ui.separator();
        ui.label("Color:");
        for (name, color) in Color::PALETTE {
            let label = egui::RichText::new(name).color(egui::Color32::from(color));
            if ui.selectable_label(self.settings.pen_color == color, label).clicked() {
                self.settings.pen_color = color;
            }
        }

        ui.separator();
        if let Some(doc) = self.document.as_mut() {
            if ui.button("Clear").clicked() {
                doc.clear();
            }
            if ui.button("Rotate").clicked() {
                doc.rotate_sketch();
            }
        }

        ui.separator();
        ui.label("File:");
        ui.text_edit_singleline(&mut self.file_name);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                self.save();
            }
            if ui.button("Open").clicked() {
                self.open();
            }
        });
        if let Some(status) = &self.status {
            ui.label(status.as_str());
        }
    }

    fn save(&mut self) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        self.status = Some(match file_handler::save(doc, &self.file_name) {
            Ok(()) => format!("Saved {}", self.file_name),
            Err(err) => {
                log::error!("Saving {} failed: {err}", self.file_name);
                err.to_string()
            }
        });
    }

    fn open(&mut self) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        self.status = Some(match file_handler::open_into(doc, &self.file_name) {
            Ok(()) => format!("Opened {}", self.file_name),
            Err(err) => {
                log::error!("Opening {} failed: {err}", self.file_name);
                err.to_string()
            }
        });
    }

    fn canvas(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        doc.resize_surface_at_least(Size::new(rect.width().ceil() as i32, rect.height().ceil() as i32));

        let style = self.settings.pen_style();
        let to_canvas = |pos: egui::Pos2| Point::from((pos - rect.min).to_pos2());
        let pointer = response.interact_pointer_pos().map(to_canvas);

        if response.drag_started() {
            if let Some(pos) = pointer {
                self.active_tool.on_pointer_down(pos, doc, &style);
            }
        } else if response.dragged() {
            if let Some(pos) = pointer {
                self.active_tool.on_pointer_move(pos, doc, &style);
            }
        }
        if pointer.is_some() {
            self.last_pointer = pointer;
        }
        if response.drag_stopped() {
            let pos = ctx
                .input(|i| i.pointer.latest_pos())
                .map(to_canvas)
                .or(self.last_pointer);
            if let Some(pos) = pos {
                self.active_tool.on_pointer_up(pos, doc, &style);
            }
        }

        // Checked outside `ctx.input`, which holds the context lock.
        let keyboard_taken = ctx.wants_keyboard_input();
        let typed = ctx.input(|i| canvas_characters(&i.events, keyboard_taken));
        for c in typed {
            self.active_tool.on_character(c, doc, &style);
        }

        let image = doc.render().to_color_image();
        let [width, height] = image.size;
        if let Some(texture) = self.texture.as_mut() {
            texture.set(image, egui::TextureOptions::NEAREST);
        } else {
            self.texture = Some(ctx.load_texture("sketch", image, egui::TextureOptions::NEAREST));
        }
        let Some(texture) = &self.texture else {
            return;
        };

        painter.image(
            texture.id(),
            egui::Rect::from_min_size(rect.min, egui::vec2(width as f32, height as f32)),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}

/// Characters typed this frame that belong to the canvas. Nothing is
/// returned while another widget, like the file name field, has keyboard focus.
fn canvas_characters(events: &[egui::Event], keyboard_taken: bool) -> Vec<char> {
    if keyboard_taken {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Text(text) => Some(text.chars()),
            _ => None,
        })
        .flatten()
        .collect()
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("toolbox").show(ctx, |ui| {
            self.toolbox(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ctx, ui);
        });
    }
}
