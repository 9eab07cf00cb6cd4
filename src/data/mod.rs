/// Data layer: record types, loading, filtering and export.
///
/// Architecture:
/// ```text
///  meteorites.txt (tab-delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip header, split lines → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, 12 text fields each
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  mass / year range predicate → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  header + rows → .xlsx
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
