use std::fmt;

// ---------------------------------------------------------------------------
// ColumnSchema – header names for the three semantic columns
// ---------------------------------------------------------------------------

/// Maps the semantic columns of a star table to concrete header names.
///
/// Two naming schemes circulate: the canonical `Brightness` / `True Size`
/// used by generated datasets, and the generic `inputs` / `targets` used by
/// older uploads. Tables are resolved against one of them explicitly; names
/// are never coerced between schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub brightness: &'static str,
    pub target: &'static str,
    pub prediction: &'static str,
}

impl ColumnSchema {
    /// `Brightness`, `True Size`, `Predictions`.
    pub const CANONICAL: ColumnSchema = ColumnSchema {
        brightness: "Brightness",
        target: "True Size",
        prediction: "Predictions",
    };

    /// `inputs`, `targets`, `predictions`.
    pub const GENERIC: ColumnSchema = ColumnSchema {
        brightness: "inputs",
        target: "targets",
        prediction: "predictions",
    };

    /// Schemas tried, in order, when resolving a table header.
    pub const KNOWN: [ColumnSchema; 2] = [Self::CANONICAL, Self::GENERIC];

    /// Header row for a plain two-column dataset.
    pub fn dataset_header(&self) -> [&'static str; 2] {
        [self.brightness, self.target]
    }

    /// Header row for a dataset with the prediction column appended.
    pub fn predicted_header(&self) -> [&'static str; 3] {
        [self.brightness, self.target, self.prediction]
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.brightness, self.target)
    }
}

// ---------------------------------------------------------------------------
// Sample – one row
// ---------------------------------------------------------------------------

/// A single observation: how bright the star looks and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub brightness: f64,
    pub true_size: f64,
}

impl Sample {
    pub fn new(brightness: f64, true_size: f64) -> Self {
        Self {
            brightness,
            true_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset / PredictedDataset
// ---------------------------------------------------------------------------

/// Ordered two-column table of samples. Row order is generation/upload order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: ColumnSchema,
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(schema: ColumnSchema, samples: Vec<Sample>) -> Self {
        Self { schema, samples }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn brightness(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.brightness)
    }
}

/// A [`Dataset`] with one prediction per row, same order and count.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedDataset {
    pub dataset: Dataset,
    pub predictions: Vec<f64>,
}

impl PredictedDataset {
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// `(sample, prediction)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (&Sample, f64)> + '_ {
        self.dataset
            .samples
            .iter()
            .zip(self.predictions.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Table – what the codec hands back after decoding an upload
// ---------------------------------------------------------------------------

/// A decoded upload. `predictions` is present only when the payload already
/// carried a prediction column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub dataset: Dataset,
    pub predictions: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_follow_schema() {
        assert_eq!(
            ColumnSchema::CANONICAL.predicted_header(),
            ["Brightness", "True Size", "Predictions"]
        );
        assert_eq!(ColumnSchema::GENERIC.dataset_header(), ["inputs", "targets"]);
        assert_eq!(ColumnSchema::default(), ColumnSchema::CANONICAL);
    }

    #[test]
    fn test_predicted_rows_pair_in_order() {
        let dataset = Dataset::new(
            ColumnSchema::CANONICAL,
            vec![Sample::new(0.0, 9.0), Sample::new(1.0, 12.0)],
        );
        let predicted = PredictedDataset {
            dataset,
            predictions: vec![9.5, 11.5],
        };

        let rows: Vec<(f64, f64)> = predicted
            .rows()
            .map(|(s, p)| (s.brightness, p))
            .collect();
        assert_eq!(rows, vec![(0.0, 9.5), (1.0, 11.5)]);
    }
}
