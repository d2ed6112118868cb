use anyhow::Result;

use super::axis::Axis;
use super::canvas::{Canvas, GLYPH};
use super::Chart;
use crate::color::ChartPalette;

/// Output size in pixels.
pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 600;

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub palette: ChartPalette,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub title_scale: u32,
    pub label_scale: u32,
    pub tick_scale: u32,
    pub marker_radius: f32,
    pub line_width: u32,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            palette: ChartPalette::default(),
            margin_left: 120,
            margin_right: 30,
            margin_top: 60,
            margin_bottom: 80,
            title_scale: 2,
            label_scale: 2,
            tick_scale: 2,
            marker_radius: 4.0,
            line_width: 2,
            x_ticks: 8,
            y_ticks: 6,
        }
    }
}

/// Pixel rectangle the data is plotted into.
struct PlotArea {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub(super) fn render(chart: &Chart, style: &ChartStyle) -> Result<Vec<u8>> {
    let colors = &style.palette;
    let mut canvas = Canvas::new(WIDTH, HEIGHT, colors.background);

    let area = PlotArea {
        left: style.margin_left as f32,
        right: (WIDTH - style.margin_right) as f32,
        top: style.margin_top as f32,
        bottom: (HEIGHT - style.margin_bottom) as f32,
    };

    let x_axis = Axis::covering(chart.actual.iter().map(|p| p.0));
    let y_axis = Axis::covering(
        chart
            .actual
            .iter()
            .chain(chart.predicted.iter())
            .map(|p| p.1),
    );
    let to_screen = |(x, y): (f64, f64)| {
        (
            x_axis.to_pixel(x, area.left, area.right),
            y_axis.to_pixel(y, area.bottom, area.top),
        )
    };

    draw_grid(&mut canvas, style, &area, &x_axis, &y_axis);

    for &point in &chart.actual {
        canvas.cross(to_screen(point), style.marker_radius, colors.actual);
    }
    for pair in chart.predicted.windows(2) {
        canvas.thick_line(to_screen(pair[0]), to_screen(pair[1]), style.line_width, colors.predicted);
    }

    canvas.outline(
        area.left as i32,
        area.top as i32,
        (area.right - area.left) as u32 + 1,
        (area.bottom - area.top) as u32 + 1,
        colors.frame,
    );

    draw_labels(&mut canvas, chart, style, &area);
    draw_legend(&mut canvas, style, &area);

    canvas.encode_png()
}

fn draw_grid(canvas: &mut Canvas, style: &ChartStyle, area: &PlotArea, x_axis: &Axis, y_axis: &Axis) {
    let colors = &style.palette;
    let glyph = (GLYPH * style.tick_scale) as i32;

    for (value, label) in x_axis.ticks(style.x_ticks) {
        let px = x_axis.to_pixel(value, area.left, area.right);
        canvas.line((px, area.top), (px, area.bottom), colors.grid);
        canvas.line((px, area.bottom), (px, area.bottom + 6.0), colors.frame);

        let w = Canvas::text_width(&label, style.tick_scale) as i32;
        canvas.text(px as i32 - w / 2, area.bottom as i32 + 10, &label, style.tick_scale, colors.ticks);
    }

    for (value, label) in y_axis.ticks(style.y_ticks) {
        let py = y_axis.to_pixel(value, area.bottom, area.top);
        canvas.line((area.left, py), (area.right, py), colors.grid);
        canvas.line((area.left - 6.0, py), (area.left, py), colors.frame);

        let w = Canvas::text_width(&label, style.tick_scale) as i32;
        canvas.text(area.left as i32 - 10 - w, py as i32 - glyph / 2, &label, style.tick_scale, colors.ticks);
    }
}

fn draw_labels(canvas: &mut Canvas, chart: &Chart, style: &ChartStyle, area: &PlotArea) {
    let colors = &style.palette;
    let center_x = ((area.left + area.right) / 2.0) as i32;
    let center_y = ((area.top + area.bottom) / 2.0) as i32;

    let title_w = Canvas::text_width(&chart.title, style.title_scale) as i32;
    let title_y = (style.margin_top as i32 - (GLYPH * style.title_scale) as i32) / 2;
    canvas.text(center_x - title_w / 2, title_y, &chart.title, style.title_scale, colors.title);

    let x_w = Canvas::text_width(&chart.x_label, style.label_scale) as i32;
    canvas.text(
        center_x - x_w / 2,
        area.bottom as i32 + 10 + (GLYPH * style.tick_scale) as i32 + 16,
        &chart.x_label,
        style.label_scale,
        colors.axis_label,
    );

    let y_w = Canvas::text_width(&chart.y_label, style.label_scale) as i32;
    canvas.text_vertical(16, center_y + y_w / 2, &chart.y_label, style.label_scale, colors.axis_label);
}

fn draw_legend(canvas: &mut Canvas, style: &ChartStyle, area: &PlotArea) {
    const ENTRIES: [&str; 2] = ["Actual Targets", "Predictions"];
    let colors = &style.palette;

    let row_h = (GLYPH * style.label_scale) as i32 + 10;
    let swatch = 28;
    let text_w = ENTRIES
        .iter()
        .map(|e| Canvas::text_width(e, style.label_scale))
        .max()
        .unwrap_or(0) as i32;

    let x = area.left as i32 + 14;
    let y = area.top as i32 + 14;
    let w = 12 + swatch + 10 + text_w + 12;
    let h = 10 + row_h * ENTRIES.len() as i32;

    canvas.fill(x, y, w as u32, h as u32, colors.background);
    canvas.outline(x, y, w as u32, h as u32, colors.legend_frame);

    for (i, entry) in ENTRIES.iter().enumerate() {
        let row_top = y + 10 + row_h * i as i32;
        let mid_y = (row_top + row_h / 2 - 5) as f32;
        let swatch_x = (x + 12) as f32;

        if i == 0 {
            canvas.cross((swatch_x + swatch as f32 / 2.0, mid_y), style.marker_radius, colors.actual);
        } else {
            canvas.thick_line(
                (swatch_x, mid_y),
                (swatch_x + swatch as f32, mid_y),
                style.line_width,
                colors.predicted,
            );
        }
        canvas.text(x + 12 + swatch + 10, row_top, entry, style.label_scale, colors.frame);
    }
}
