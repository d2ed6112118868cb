use std::sync::Arc;

use crate::chart::Visualizer;
use crate::config::Config;
use crate::data::model::ColumnSchema;
use crate::data::synth::{GroundTruth, Synthesizer};
use crate::predict::{Coefficients, Predictor};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Read-only state shared by every request handler. Cloning is cheap; nothing
/// in here changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,

    /// Generator behind generate-dataset.
    pub synthesizer: Synthesizer,

    /// Frozen coefficients applied by predict.
    pub predictor: Predictor,

    /// Metric and layout for plot.
    pub visualizer: Visualizer,

    /// Header schemas accepted on upload, in preference order.
    pub schemas: Arc<[ColumnSchema]>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_coefficients(config, Coefficients::STAR_SIZE)
    }

    pub fn with_coefficients(config: Config, coefficients: Coefficients) -> Self {
        Self {
            synthesizer: Synthesizer::new(GroundTruth::default(), config.max_samples),
            predictor: Predictor::new(coefficients),
            visualizer: Visualizer::new(coefficients, config.chart_metric),
            schemas: Arc::from(ColumnSchema::KNOWN),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
