/// Data layer: core types, loading, and coverage statistics.
///
/// Architecture:
/// ```text
///  times.json (file or URL)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → QuoteDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ QuoteDataset │  TimeKey → Vec<Quote>, chronological
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ coverage  │  minutes covered, per-hour counts, CSV listings
///   └──────────┘
/// ```

pub mod coverage;
pub mod loader;
pub mod model;
