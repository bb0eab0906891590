/// Data layer: core types, loading, and errors.
///
/// Architecture:
/// ```text
///   road-NYOutgoing.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read lines → parse "x y" pairs
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  parallel xs / ys columns
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
