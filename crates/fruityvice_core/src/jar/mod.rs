//! Jar state and aggregation.
//!
//! # Responsibility
//! - Hold the ordered multiset of fruits the user has accumulated.
//! - Derive the per-name rollup the chart and list views render.
//!
//! # Invariants
//! - The jar only grows; aggregation is recomputed from it on demand.

pub mod aggregate;
pub mod store;
