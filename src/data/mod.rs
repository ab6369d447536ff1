/// Data layer: course types, reading, validation, options and querying.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  background read → text (stale reads dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Vec<Course> (all or nothing)
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │ options   │      │  filter   │  controls → ordered view indices
///   └──────────┘      └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod reader;
