//! Fixed-coefficient star size model and its error metrics.

use std::fmt;
use std::str::FromStr;

use crate::data::model::{Dataset, PredictedDataset, Table};

/// Frozen linear model `size = slope * brightness + intercept`.
///
/// The values come from an offline fit and are never re-estimated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub slope: f64,
    pub intercept: f64,
}

impl Coefficients {
    pub const STAR_SIZE: Coefficients = Coefficients {
        slope: 1.982015,
        intercept: 9.500380,
    };

    #[inline]
    pub fn apply(&self, brightness: f64) -> f64 {
        self.slope * brightness + self.intercept
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::STAR_SIZE
    }
}

// ---------------------------------------------------------------------------
// Predictor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct Predictor {
    coefficients: Coefficients,
}

impl Predictor {
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Append a prediction for every row, keeping row order.
    pub fn predict(&self, dataset: Dataset) -> PredictedDataset {
        let predictions = dataset
            .brightness()
            .map(|b| self.coefficients.apply(b))
            .collect();
        PredictedDataset {
            dataset,
            predictions,
        }
    }

    /// Keep predictions an upload already carries, compute them otherwise.
    pub fn complete(&self, table: Table) -> PredictedDataset {
        match table.predictions {
            Some(predictions) => PredictedDataset {
                dataset: table.dataset,
                predictions,
            },
            None => self.predict(table.dataset),
        }
    }
}

// ---------------------------------------------------------------------------
// Error metric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMetric {
    #[default]
    Mse,
    Rmse,
}

impl ErrorMetric {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorMetric::Mse => "MSE",
            ErrorMetric::Rmse => "RMSE",
        }
    }

    /// `None` for an empty table, where the mean is undefined.
    pub fn evaluate(&self, predicted: &PredictedDataset) -> Option<f64> {
        if predicted.is_empty() {
            return None;
        }
        let sum: f64 = predicted
            .rows()
            .map(|(s, p)| (p - s.true_size).powi(2))
            .sum();
        let mse = sum / predicted.len() as f64;
        Some(match self {
            ErrorMetric::Mse => mse,
            ErrorMetric::Rmse => mse.sqrt(),
        })
    }
}

impl fmt::Display for ErrorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ErrorMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mse" => Ok(ErrorMetric::Mse),
            "rmse" => Ok(ErrorMetric::Rmse),
            other => Err(format!("unknown error metric '{other}' (expected mse or rmse)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ColumnSchema, Sample};
    use proptest::prelude::*;

    fn stars() -> Dataset {
        Dataset::new(
            ColumnSchema::CANONICAL,
            vec![
                Sample::new(0.0, 9.0),
                Sample::new(1.0, 12.0),
                Sample::new(2.0, 14.0),
            ],
        )
    }

    #[test]
    fn test_known_predictions() {
        let predicted = Predictor::default().predict(stars());
        let expected = [9.500380, 11.482395, 13.464410];
        assert_eq!(predicted.predictions.len(), 3);
        for (got, want) in predicted.predictions.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn test_known_mse() {
        let predicted = Predictor::default().predict(stars());
        let mse = ErrorMetric::Mse.evaluate(&predicted).unwrap();
        let expected = (0.500380f64.powi(2) + 0.517605f64.powi(2) + 0.535590f64.powi(2)) / 3.0;
        assert!((mse - expected).abs() < 1e-9);
        assert!((mse - 0.2684).abs() < 1e-3);

        let rmse = ErrorMetric::Rmse.evaluate(&predicted).unwrap();
        assert!((rmse - mse.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_metric_undefined_without_rows() {
        let empty = Predictor::default().predict(Dataset::new(ColumnSchema::CANONICAL, vec![]));
        assert_eq!(ErrorMetric::Mse.evaluate(&empty), None);
    }

    #[test]
    fn test_complete_keeps_supplied_predictions() {
        let table = Table {
            dataset: stars(),
            predictions: Some(vec![9.0, 12.0, 14.0]),
        };
        let predicted = Predictor::default().complete(table);
        assert_eq!(predicted.predictions, vec![9.0, 12.0, 14.0]);
        assert_eq!(ErrorMetric::Mse.evaluate(&predicted), Some(0.0));
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!(" RMSE ".parse::<ErrorMetric>(), Ok(ErrorMetric::Rmse));
        assert_eq!("mse".parse::<ErrorMetric>(), Ok(ErrorMetric::Mse));
        assert!("mae".parse::<ErrorMetric>().is_err());
    }

    proptest! {
        #[test]
        fn prop_predictions_follow_formula(
            rows in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..100)
        ) {
            let samples: Vec<Sample> = rows.iter().map(|&(b, s)| Sample::new(b, s)).collect();
            let predictor = Predictor::default();
            let predicted = predictor.predict(Dataset::new(ColumnSchema::CANONICAL, samples.clone()));

            prop_assert_eq!(predicted.len(), samples.len());
            for (sample, p) in predicted.rows() {
                let want = 1.982015 * sample.brightness + 9.500380;
                prop_assert!((p - want).abs() < 1e-9);
            }

            // predicting again from the same rows gives the same column
            let again = predictor.predict(predicted.dataset.clone());
            prop_assert_eq!(again.predictions, predicted.predictions);
        }
    }
}
