/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  scopeMeasure.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MeasurementTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ MeasurementTable  │  Vec<Measurement>, row order preserved
///   └──────────────────┘
/// ```
pub mod loader;
pub mod model;
