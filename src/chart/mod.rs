//! Regression chart: actual sizes as markers, predictions as a line.
//!
//! ```text
//!   Table ──► Visualizer::prepare ──► Chart ──► render ──► PNG bytes
//!             (validate, metric,      (series,   (Canvas, owned
//!              sort line by x)         labels)    for one call)
//! ```

pub mod axis;
pub mod canvas;
mod render;

use crate::data::model::Table;
use crate::error::DataError;
use crate::predict::{Coefficients, ErrorMetric, Predictor};

pub use render::{ChartStyle, HEIGHT, WIDTH};

/// Everything needed to draw one chart, computed up front so rendering
/// cannot fail on bad input.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub metric: ErrorMetric,
    pub score: f64,
    /// `(brightness, true size)` in row order.
    pub actual: Vec<(f64, f64)>,
    /// `(brightness, prediction)` sorted by brightness.
    pub predicted: Vec<(f64, f64)>,
}

impl Chart {
    pub fn render_png(&self) -> anyhow::Result<Vec<u8>> {
        render::render(self, &ChartStyle::default())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Visualizer {
    predictor: Predictor,
    metric: ErrorMetric,
}

impl Visualizer {
    pub fn new(coefficients: Coefficients, metric: ErrorMetric) -> Self {
        Self {
            predictor: Predictor::new(coefficients),
            metric,
        }
    }

    pub fn metric(&self) -> ErrorMetric {
        self.metric
    }

    /// Validate a decoded upload and lay out its chart. Predictions already
    /// present in the table are used as given.
    pub fn prepare(&self, table: Table) -> Result<Chart, DataError> {
        let predicted = self.predictor.complete(table);
        let score = self.metric.evaluate(&predicted).ok_or(DataError::NoRows)?;

        let actual: Vec<(f64, f64)> = predicted
            .rows()
            .map(|(s, _)| (s.brightness, s.true_size))
            .collect();
        let mut line: Vec<(f64, f64)> = predicted
            .rows()
            .map(|(s, p)| (s.brightness, p))
            .collect();
        line.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(Chart {
            title: format!(
                "Linear Regression for Stars Data ({}: {:.2})",
                self.metric.label(),
                score
            ),
            x_label: "Brightness".to_string(),
            y_label: "Size".to_string(),
            metric: self.metric,
            score,
            actual,
            predicted: line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ColumnSchema, Dataset, Sample};

    fn table(rows: &[(f64, f64)], predictions: Option<Vec<f64>>) -> Table {
        Table {
            dataset: Dataset::new(
                ColumnSchema::CANONICAL,
                rows.iter().map(|&(b, s)| Sample::new(b, s)).collect(),
            ),
            predictions,
        }
    }

    #[test]
    fn test_title_embeds_rounded_mse() {
        let chart = Visualizer::default()
            .prepare(table(&[(0.0, 9.0), (1.0, 12.0), (2.0, 14.0)], None))
            .unwrap();
        assert_eq!(chart.title, "Linear Regression for Stars Data (MSE: 0.27)");
        assert!((chart.score - 0.2684).abs() < 1e-3);
        assert_eq!(chart.x_label, "Brightness");
        assert_eq!(chart.y_label, "Size");
    }

    #[test]
    fn test_rmse_variant() {
        let chart = Visualizer::new(Coefficients::STAR_SIZE, ErrorMetric::Rmse)
            .prepare(table(&[(0.0, 9.0), (1.0, 12.0), (2.0, 14.0)], None))
            .unwrap();
        assert_eq!(chart.title, "Linear Regression for Stars Data (RMSE: 0.52)");
    }

    #[test]
    fn test_prediction_line_is_sorted_by_brightness() {
        let chart = Visualizer::default()
            .prepare(table(&[(2.0, 14.0), (0.0, 9.0), (1.0, 12.0)], None))
            .unwrap();
        let xs: Vec<f64> = chart.predicted.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        // markers keep upload order
        assert_eq!(chart.actual[0], (2.0, 14.0));
    }

    #[test]
    fn test_supplied_predictions_are_plotted() {
        let chart = Visualizer::default()
            .prepare(table(&[(0.0, 9.0), (1.0, 12.0)], Some(vec![9.0, 12.0])))
            .unwrap();
        assert_eq!(chart.score, 0.0);
        assert_eq!(chart.predicted, vec![(0.0, 9.0), (1.0, 12.0)]);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert_eq!(
            Visualizer::default().prepare(table(&[], None)).unwrap_err(),
            DataError::NoRows
        );
    }

    #[test]
    fn test_render_produces_png_of_expected_size() {
        let chart = Visualizer::default()
            .prepare(table(&[(0.0, 9.0), (1.0, 12.0), (2.0, 14.0)], None))
            .unwrap();
        let bytes = chart.render_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));

        let marker = ChartStyle::default().palette.actual;
        assert!(decoded.pixels().any(|p| *p == marker));
    }

    #[test]
    fn test_render_single_point() {
        let chart = Visualizer::default()
            .prepare(table(&[(1.0, 11.0)], None))
            .unwrap();
        assert!(chart.render_png().is_ok());
    }
}
