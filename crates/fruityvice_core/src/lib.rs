//! Core domain logic for the FRUITYVICE catalog-and-jar UI.
//! This crate is the single source of truth for grouping, aggregation and
//! fetch lifecycle semantics; presenters render what it produces.

pub mod catalog;
pub mod grouping;
pub mod jar;
pub mod logging;
pub mod model;
pub mod session;

pub use catalog::source::{
    CatalogConfig, CatalogSource, FetchError, FetchResult, HttpCatalogSource, DEFAULT_ENDPOINT,
    FETCH_TIMEOUT,
};
pub use catalog::store::{CatalogState, CatalogStore, FetchTicket};
pub use grouping::{group_catalog, FruitGroup, GroupKey, GroupedCatalog, ALL_FRUITS_LABEL};
pub use jar::aggregate::{aggregate_jar, color_for_index, HslColor, JarEntry, JarSummary, PieSlice};
pub use jar::store::JarStore;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::fruit::{Fruit, FruitValidationError, Nutrition};
pub use session::{AppSession, CatalogViewKind};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
