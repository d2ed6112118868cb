//! Star Size Predictor backend.
//!
//! Three stateless operations behind one HTTP router:
//!
//! ```text
//!   POST /generate-dataset/  num_stars ──► synth ──► CSV
//!   POST /predict/           CSV ──► loader ──► Predictor ──► CSV + Predictions
//!   POST /plot/              CSV ──► loader ──► Visualizer ──► PNG
//!   GET  /                   liveness
//! ```
//!
//! The model is frozen: `size = 1.982015 * brightness + 9.500380`.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod handlers;
pub mod predict;
pub mod state;

pub use app::build_router;
pub use config::Config;
pub use error::{AppError, AppResult, DataError};
pub use state::AppState;
