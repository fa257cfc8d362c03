use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) ARGB color, the unit stored in sketch files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    /// Palette offered by the color chooser, in display order.
    pub const PALETTE: [(&'static str, Color); 9] = [
        ("Black", Color::BLACK),
        ("Red", Color::RED),
        ("Green", Color::GREEN),
        ("Blue", Color::BLUE),
        ("Yellow", Color::YELLOW),
        ("Magenta", Color::MAGENTA),
        ("Cyan", Color::CYAN),
        ("Brown", Color::BROWN),
        ("Orange", Color::ORANGE),
    ];

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Looks up a palette color by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PALETTE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Clamps each channel of a stored integer quadruple into `0..=255`.
    pub fn from_channels(a: i32, r: i32, g: i32, b: i32) -> Self {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Self::argb(ch(a), ch(r), ch(g), ch(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Color> for egui::Color32 {
    fn from(c: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}
