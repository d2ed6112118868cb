use image::Rgb;
use palette::{named, Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Colour conversion helpers
// ---------------------------------------------------------------------------

/// Convert a palette colour into an `image` pixel.
pub fn to_pixel(color: Srgb<u8>) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

/// Lighten `color` towards white in HSL space. `amount` is in `0.0..=1.0`.
pub fn tint(color: Srgb<u8>, amount: f32) -> Rgb<u8> {
    let hsl: Hsl = color.into_format::<f32>().into_color();
    let rgb: Srgb = hsl.lighten(amount).into_color();
    to_pixel(rgb.into_format())
}

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Colours used by every chart element.
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    pub background: Rgb<u8>,
    pub frame: Rgb<u8>,
    pub grid: Rgb<u8>,
    pub ticks: Rgb<u8>,
    pub actual: Rgb<u8>,
    pub predicted: Rgb<u8>,
    pub title: Rgb<u8>,
    pub axis_label: Rgb<u8>,
    pub legend_frame: Rgb<u8>,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: to_pixel(named::WHITE),
            frame: to_pixel(named::BLACK),
            grid: tint(named::DIMGRAY, 0.8),
            ticks: to_pixel(named::DIMGRAY),
            actual: to_pixel(named::ROYALBLUE),
            predicted: to_pixel(named::BLACK),
            title: to_pixel(named::MAROON),
            axis_label: to_pixel(named::DARKMAGENTA),
            legend_frame: tint(named::DIMGRAY, 0.5),
        }
    }
}
