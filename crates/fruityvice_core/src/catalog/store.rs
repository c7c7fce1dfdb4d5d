//! Catalog store state machine.
//!
//! # Responsibility
//! - Track the fetch lifecycle behind a single explicit state value.
//! - Gate concurrent fetches and discard stale fetch outcomes.
//!
//! # Invariants
//! - At most one fetch attempt is active at a time.
//! - Every fetch failure lands as `Error` with a user-facing message.
//! - A retry only starts after the previous outcome has been applied.

use crate::catalog::source::{CatalogSource, FetchResult};
use crate::model::fruit::Fruit;
use log::{info, warn};

/// Request lifecycle for the fetched catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Catalog fetched; holds the records in upstream order.
    Ready(Vec<Fruit>),
    /// Last fetch failed; `message` is ready for display next to retry.
    Error { message: String },
}

/// Handle tying a fetch outcome to the attempt that produced it.
///
/// Outcomes presented with a ticket from a superseded attempt are discarded,
/// so a stale fetch can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u32);

/// Holds the raw catalog list and its request lifecycle status.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
    attempts: u32,
}

impl CatalogStore {
    /// Creates a store in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Returns the fetched records once the catalog is ready.
    pub fn fruits(&self) -> Option<&[Fruit]> {
        match &self.state {
            CatalogState::Ready(fruits) => Some(fruits),
            _ => None,
        }
    }

    /// Number of fetch attempts started so far. Unbounded; every attempt is
    /// user-triggered.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Moves to `Loading` and starts a new attempt.
    ///
    /// # Contract
    /// - Allowed from `Idle` (initial load), `Error` (the retry affordance)
    ///   and `Ready` (an explicit refresh).
    /// - A no-op returning `None` while `Loading`.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if matches!(self.state, CatalogState::Loading) {
            return None;
        }
        self.attempts += 1;
        self.state = CatalogState::Loading;
        info!(
            "event=catalog_fetch_start module=catalog attempt={}",
            self.attempts
        );
        Some(FetchTicket(self.attempts))
    }

    /// Applies a fetch outcome for the attempt named by `ticket`.
    ///
    /// Outcomes from superseded attempts are discarded.
    pub fn apply_outcome(&mut self, ticket: FetchTicket, outcome: FetchResult<Vec<Fruit>>) {
        if ticket.0 != self.attempts {
            warn!(
                "event=catalog_fetch_stale module=catalog attempt={} current={}",
                ticket.0, self.attempts
            );
            return;
        }
        match outcome {
            Ok(fruits) => {
                info!(
                    "event=catalog_fetch_done module=catalog status=ok records={}",
                    fruits.len()
                );
                self.state = CatalogState::Ready(fruits);
            }
            Err(err) => {
                warn!("event=catalog_fetch_done module=catalog status=error kind={err}");
                self.state = CatalogState::Error {
                    message: err.user_message(),
                };
            }
        }
    }

    /// Runs one full fetch cycle against `source`.
    ///
    /// Synchronous convenience for the single-threaded session model: the
    /// ticket plumbing still applies, and the states observed are exactly
    /// `Loading` followed by `Ready` or `Error`.
    pub fn load(&mut self, source: &impl CatalogSource) {
        let Some(ticket) = self.begin_fetch() else {
            return;
        };
        let outcome = source.fetch_catalog();
        self.apply_outcome(ticket, outcome);
    }
}
