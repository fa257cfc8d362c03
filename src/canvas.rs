use std::io::Cursor;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops};

use crate::color::Color;
use crate::error::{SketchError, SketchResult};
use crate::geometry::{Point, Rect, Size, distance_point_to_segment, expand_rect, rect_from_points};
use crate::shape::Rotation;
use crate::surface::Surface;

/// Default glyph height in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

/// Pixel-buffer surface. Shapes are painted hard-edged; smoothing is left to
/// whoever displays the pixels.
#[derive(Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    font: FontArc,
    font_size: f32,
}

// FontArc has no Debug
impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("font_size", &self.font_size)
            .finish()
    }
}

fn dimension(v: i32) -> u32 {
    v.max(0) as u32
}

impl Canvas {
    /// White canvas using the proportional font that ships with egui.
    pub fn new(size: Size, font_size: f32) -> SketchResult<Self> {
        let font = FontArc::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)
            .map_err(|e| SketchError::Font(e.to_string()))?;
        Ok(Self::with_font(size, font, font_size))
    }

    pub fn with_font(size: Size, font: FontArc, font_size: f32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(dimension(size.width), dimension(size.height), Color::WHITE.into()),
            font,
            font_size,
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, p: Point) -> Option<Color> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.pixels
            .get_pixel_checked(p.x as u32, p.y as u32)
            .map(|Rgba([r, g, b, a])| Color::argb(*a, *r, *g, *b))
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Pixels in the form egui uploads as a texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.pixels.width() as usize, self.pixels.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }

    /// Encodes the current pixels as a bitmap file.
    pub fn encode(&self, format: ImageFormat) -> SketchResult<Vec<u8>> {
        // Formats without an alpha channel (JPEG) reject RGBA input.
        let rgb = DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8();
        let mut out = Cursor::new(Vec::new());
        rgb.write_to(&mut out, format)?;
        Ok(out.into_inner())
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let Some(dst) = self.pixels.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        let Rgba([dr, dg, db, da]) = *dst;
        *dst = Rgba([
            mix(color.r, dr),
            mix(color.g, dg),
            mix(color.b, db),
            da.max((alpha * 255.0).round() as u8),
        ]);
    }

    /// Calls `paint` for every pixel of `area` that lies on the canvas.
    fn for_each_pixel_in(&mut self, area: Rect, mut paint: impl FnMut(&mut Self, i32, i32)) {
        // Edges in i64 so that no rectangle can overflow before clipping.
        let x0 = (area.x as i64).max(0);
        let y0 = (area.y as i64).max(0);
        let x1 = (area.x as i64 + area.width as i64).min(self.pixels.width() as i64);
        let y1 = (area.y as i64 + area.height as i64).min(self.pixels.height() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                paint(self, x as i32, y as i32);
            }
        }
    }

    /// Clips `p1`-`p2` to the canvas grown by `margin` pixels on every side.
    /// Returns `None` when the segment misses it entirely.
    fn clip_segment(&self, p1: Point, p2: Point, margin: i32) -> Option<(Point, Point)> {
        let margin = margin as f64;
        let (min_x, min_y) = (-margin, -margin);
        let max_x = self.pixels.width() as f64 - 1.0 + margin;
        let max_y = self.pixels.height() as f64 - 1.0 + margin;

        // Liang-Barsky
        let (x1, y1) = (p1.x as f64, p1.y as f64);
        let dx = p2.x as f64 - x1;
        let dy = p2.y as f64 - y1;
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in [(-dx, x1 - min_x), (dx, max_x - x1), (-dy, y1 - min_y), (dy, max_y - y1)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        let at = |t: f64| Point::new((x1 + t * dx).round() as i32, (y1 + t * dy).round() as i32);
        Some((at(t0), at(t1)))
    }

    /// Only called with endpoints already clipped to the canvas.
    fn bresenham(&mut self, p1: Point, p2: Point, color: Color) {
        let (mut x, mut y) = (p1.x, p1.y);
        let dx = (p2.x - p1.x).abs();
        let dy = -(p2.y - p1.y).abs();
        let sx = if p1.x < p2.x { 1 } else { -1 };
        let sy = if p1.y < p2.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend(x, y, color, 1.0);
            if x == p2.x && y == p2.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn rasterize_glyph(&self, ch: char, upright: Size, color: Color) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(dimension(upright.width), dimension(upright.height), Rgba([0, 0, 0, 0]));
        let scale = PxScale::from(self.font_size);
        let ascent = self.font.as_scaled(scale).ascent();
        let glyph = self
            .font
            .glyph_id(ch)
            .with_scale_and_position(scale, ab_glyph::point(0.0, ascent));

        if let Some(outlined) = self.font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px < 0 || py < 0 {
                    return;
                }
                if let Some(pixel) = img.get_pixel_mut_checked(px as u32, py as u32) {
                    let a = (color.a as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
                    *pixel = Rgba([color.r, color.g, color.b, a]);
                }
            });
        }
        img
    }
}

/// Approximate distance to the outline of the ellipse with radii `rx`, `ry`
/// centred on the origin; negative inside.
fn ellipse_distance(px: f32, py: f32, rx: f32, ry: f32) -> f32 {
    let nx = px / rx;
    let ny = py / ry;
    let len = (nx * nx + ny * ny).sqrt();
    if len < 1e-6 {
        return -rx.min(ry);
    }
    let scale = (rx * rx * ny * ny + ry * ry * nx * nx).sqrt() / (rx * ry * len);
    (len - 1.0) / scale
}

impl Surface for Canvas {
    fn allocate(&self, size: Size) -> Self {
        Self::with_font(size, self.font.clone(), self.font_size)
    }

    fn size(&self) -> Size {
        Size::new(self.pixels.width() as i32, self.pixels.height() as i32)
    }

    fn clear(&mut self, color: Color) {
        let fill: Rgba<u8> = color.into();
        for pixel in self.pixels.pixels_mut() {
            *pixel = fill;
        }
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, thickness: i32) {
        if thickness <= 1 {
            if let Some((a, b)) = self.clip_segment(p1, p2, 0) {
                self.bresenham(a, b, color);
            }
            return;
        }
        // Round-capped band of width `thickness` around the segment.
        let radius = thickness as f64 / 2.0;
        let pad = thickness / 2 + 1;
        let Some((p1, p2)) = self.clip_segment(p1, p2, pad) else {
            return;
        };
        let area = expand_rect(rect_from_points(p1, p2), pad.saturating_add(1));
        self.for_each_pixel_in(area, |canvas, x, y| {
            if distance_point_to_segment(Point::new(x, y), p1, p2) <= radius {
                canvas.blend(x, y, color, 1.0);
            }
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, thickness: i32) {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        self.draw_line(Point::new(l, t), Point::new(r, t), color, thickness);
        self.draw_line(Point::new(r, t), Point::new(r, b), color, thickness);
        self.draw_line(Point::new(r, b), Point::new(l, b), color, thickness);
        self.draw_line(Point::new(l, b), Point::new(l, t), color, thickness);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.for_each_pixel_in(rect, |canvas, x, y| canvas.blend(x, y, color, 1.0));
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Color, thickness: i32) {
        let rx = rect.width as f32 / 2.0;
        let ry = rect.height as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            // Collapsed to a segment.
            self.draw_line(rect.origin(), Point::new(rect.right(), rect.bottom()), color, thickness);
            return;
        }
        let (cx, cy) = rect.center();
        let half = (thickness.max(1) as f32 / 2.0).max(0.5);
        let area = expand_rect(rect, thickness.max(1).saturating_add(2));
        self.for_each_pixel_in(area, |canvas, x, y| {
            let d = ellipse_distance(x as f32 - cx as f32, y as f32 - cy as f32, rx, ry);
            if d.abs() <= half {
                canvas.blend(x, y, color, 1.0);
            }
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let rx = rect.width as f32 / 2.0;
        let ry = rect.height as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (cx, cy) = rect.center();
        self.for_each_pixel_in(rect, |canvas, x, y| {
            let nx = (x as f32 + 0.5 - cx as f32) / rx;
            let ny = (y as f32 + 0.5 - cy as f32) / ry;
            if nx * nx + ny * ny <= 1.0 {
                canvas.blend(x, y, color, 1.0);
            }
        });
    }

    fn draw_glyph(&mut self, ch: char, bounds: Rect, color: Color, rotation: Rotation) {
        // Rasterized at the font's own size; `bounds` only places and clips it.
        let glyph = self.rasterize_glyph(ch, self.measure_glyph(ch), color);
        let turned = match rotation {
            Rotation::Deg0 => glyph,
            Rotation::Deg90 => imageops::rotate90(&glyph),
            Rotation::Deg180 => imageops::rotate180(&glyph),
            Rotation::Deg270 => imageops::rotate270(&glyph),
        };
        let (width, height) = (bounds.width.max(0) as i64, bounds.height.max(0) as i64);
        for (x, y, Rgba([r, g, b, a])) in turned.enumerate_pixels() {
            if *a == 0 || x as i64 >= width || y as i64 >= height {
                continue;
            }
            let px = i32::try_from(bounds.x as i64 + x as i64);
            let py = i32::try_from(bounds.y as i64 + y as i64);
            if let (Ok(px), Ok(py)) = (px, py) {
                self.blend(px, py, Color::argb(255, *r, *g, *b), *a as f32 / 255.0);
            }
        }
    }

    fn measure_glyph(&self, ch: char) -> Size {
        let scaled = self.font.as_scaled(PxScale::from(self.font_size));
        let advance = scaled.h_advance(self.font.glyph_id(ch));
        Size::new(advance.ceil() as i32, scaled.height().ceil() as i32)
    }

    fn blit(&mut self, source: &Self, origin: Point) {
        imageops::replace(&mut self.pixels, &source.pixels, origin.x as i64, origin.y as i64);
    }
}
