//! Data layer: core types, loading, filtering, and serialization.
//!
//! Architecture:
//! ```text
//!  dataset/vgchartz_3d.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → SalesTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ SalesTable │  header + Vec<SalesRecord>
//!   └────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  passes_filter per row → kept indices
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  header + kept rows → _FILTERED csv
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
