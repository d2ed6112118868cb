use std::io::Cursor;

use anyhow::{Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

/// Side length of one glyph cell in the bitmap font, before scaling.
pub const GLYPH: u32 = 8;

// ---------------------------------------------------------------------------
// Canvas – an owned RGB drawing surface
// ---------------------------------------------------------------------------

/// Owned raster the chart is drawn onto. The pixel buffer lives exactly as
/// long as the canvas; [`Canvas::encode_png`] consumes it.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
        draw_line_segment_mut(&mut self.image, from, to, color);
    }

    /// A line `width` pixels wide, built from parallel one-pixel segments.
    pub fn thick_line(&mut self, from: (f32, f32), to: (f32, f32), width: u32, color: Rgb<u8>) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            self.line(from, to, color);
            return;
        }
        let (nx, ny) = (-dy / len, dx / len);
        let half = (width.max(1) as f32 - 1.0) / 2.0;
        for k in 0..width.max(1) {
            let offset = k as f32 - half;
            self.line(
                (from.0 + nx * offset, from.1 + ny * offset),
                (to.0 + nx * offset, to.1 + ny * offset),
                color,
            );
        }
    }

    /// An `x` shaped marker centred on `center`.
    pub fn cross(&mut self, center: (f32, f32), radius: f32, color: Rgb<u8>) {
        let (x, y) = center;
        self.line((x - radius, y - radius), (x + radius, y + radius), color);
        self.line((x - radius, y + radius), (x + radius, y - radius), color);
    }

    pub fn outline(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        if width > 0 && height > 0 {
            draw_hollow_rect_mut(&mut self.image, Rect::at(x, y).of_size(width, height), color);
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        if width > 0 && height > 0 {
            draw_filled_rect_mut(&mut self.image, Rect::at(x, y).of_size(width, height), color);
        }
    }

    /// Width in pixels of `text` drawn at `scale`.
    pub fn text_width(text: &str, scale: u32) -> u32 {
        text.chars().count() as u32 * GLYPH * scale
    }

    /// Draw `text` left to right with its top-left corner at `(x, y)`.
    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
        for (i, ch) in text.chars().enumerate() {
            let origin_x = x + (i as u32 * GLYPH * scale) as i32;
            self.glyph(ch, scale, color, |col, row| (origin_x + col, y + row));
        }
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, reading bottom
    /// to top, with its bottom-left corner at `(x, y)`.
    pub fn text_vertical(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
        for (i, ch) in text.chars().enumerate() {
            let origin_y = y - (i as u32 * GLYPH * scale) as i32;
            self.glyph(ch, scale, color, |col, row| (x + row, origin_y - col));
        }
    }

    /// Rasterise one glyph; `place` maps scaled glyph coordinates to canvas pixels.
    fn glyph(&mut self, ch: char, scale: u32, color: Rgb<u8>, place: impl Fn(i32, i32) -> (i32, i32)) {
        let bitmap = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);

        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let (px, py) = place(
                            (col * scale + sx) as i32,
                            (row as u32 * scale + sy) as i32,
                        );
                        self.put(px, py, color);
                    }
                }
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Encode as PNG, releasing the pixel buffer whether or not encoding succeeds.
    pub fn encode_png(self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("encoding chart as PNG")?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn painted(canvas: Canvas) -> usize {
        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        decoded.pixels().filter(|p| **p == RED).count()
    }

    #[test]
    fn test_text_draws_inside_its_box() {
        let mut canvas = Canvas::new(64, 32, WHITE);
        canvas.text(0, 0, "A1", 2, RED);
        assert_eq!(Canvas::text_width("A1", 2), 32);

        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        let outside = decoded
            .enumerate_pixels()
            .filter(|(x, y, p)| (*x >= 32 || *y >= 16) && **p == RED)
            .count();
        assert_eq!(outside, 0);
        assert!(decoded.pixels().any(|p| *p == RED));
    }

    #[test]
    fn test_vertical_text_grows_upwards() {
        let mut canvas = Canvas::new(32, 64, WHITE);
        canvas.text_vertical(0, 63, "AB", 1, RED);
        assert!(painted(canvas) > 0);
    }

    #[test]
    fn test_drawing_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.text(-100, -100, "hello", 3, RED);
        canvas.cross((-50.0, -50.0), 4.0, RED);
        canvas.fill(5, 5, 0, 0, RED);
        assert_eq!(painted(canvas), 0);
    }

    #[test]
    fn test_thick_line_is_wider_than_thin() {
        let mut thin = Canvas::new(50, 50, WHITE);
        thin.line((5.0, 25.0), (45.0, 25.0), RED);
        let mut thick = Canvas::new(50, 50, WHITE);
        thick.thick_line((5.0, 25.0), (45.0, 25.0), 3, RED);
        assert!(painted(thick) > painted(thin));
    }
}
