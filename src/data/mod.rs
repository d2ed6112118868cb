/// Data layer: core types, CSV codec, and the synthetic generator.
///
/// Architecture:
/// ```text
///   num_stars ──► ┌─────────┐
///                 │  synth   │  noisy linear ground truth → Dataset
///                 └─────────┘
///                      │
///   upload.csv         ▼
///        │        ┌──────────┐
///        └──────► │  loader   │  CSV ⇄ Dataset / PredictedDataset
///                 └──────────┘
///                      │
///                      ▼
///                 ┌──────────┐
///                 │  model    │  Sample, Dataset, ColumnSchema
///                 └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod synth;
