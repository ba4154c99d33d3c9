/// Data layer: core types, loading, and windowing.
///
/// Architecture:
/// ```text
///   out (whitespace-delimited text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Vec<f64>>, equal widths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  window   │  last 34 rows → Vec<Triangle>
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod window;
