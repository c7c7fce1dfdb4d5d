//! Catalog fetching and lifecycle state.
//!
//! # Responsibility
//! - Define the source seam the catalog is fetched through.
//! - Track the fetch lifecycle behind one explicit state value.
//!
//! # Invariants
//! - Fetch failures never propagate past the store; every failure lands as
//!   an `Error` state with a user-facing message and a retry affordance.

pub mod source;
pub mod store;
