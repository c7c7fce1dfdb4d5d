//! Domain model for the fruit catalog.
//!
//! # Responsibility
//! - Define the canonical catalog record shared by grouping, jar and views.
//! - Keep one immutable shape for list, table and chart projections.
//!
//! # Invariants
//! - A `Fruit` is never mutated after decode; collections hold copies only.

pub mod fruit;
