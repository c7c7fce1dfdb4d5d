//! Session controller.
//!
//! # Responsibility
//! - Own catalog, jar and view-selection state for one UI session.
//! - Expose the operations a presenter wires to user actions.
//!
//! # Invariants
//! - Catalog, jar and view state are explicit, independently testable
//!   values, never ambient globals.
//! - Grouped and aggregated views are recomputed on demand from current
//!   state; the session caches no derived data.

use crate::catalog::source::CatalogSource;
use crate::catalog::store::{CatalogState, CatalogStore};
use crate::grouping::{group_catalog, GroupKey, GroupedCatalog};
use crate::jar::aggregate::{aggregate_jar, JarSummary};
use crate::jar::store::JarStore;
use crate::model::fruit::Fruit;
use std::collections::HashSet;

/// Catalog presentation mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogViewKind {
    #[default]
    List,
    Table,
}

/// Top-level state owner for one UI session.
///
/// The jar, search term and grouping selection stay fully interactive while
/// a catalog fetch is pending; nothing here blocks on the fetch outcome.
#[derive(Debug, Default)]
pub struct AppSession {
    catalog: CatalogStore,
    jar: JarStore,
    group_key: GroupKey,
    search_term: String,
    view: CatalogViewKind,
    collapsed: HashSet<String>,
}

impl AppSession {
    /// Creates a session with an idle catalog and an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn jar(&self) -> &JarStore {
        &self.jar
    }

    pub fn group_key(&self) -> GroupKey {
        self.group_key
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn view(&self) -> CatalogViewKind {
        self.view
    }

    /// Selects the grouping dimension for the catalog view.
    pub fn set_group_key(&mut self, key: GroupKey) {
        self.group_key = key;
    }

    /// Sets the case-insensitive name filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Switches between list and table presentation.
    pub fn set_view(&mut self, view: CatalogViewKind) {
        self.view = view;
    }

    /// Flips the collapsed flag for one group label.
    ///
    /// Labels that disappear after regrouping may leave an entry behind;
    /// that matches the original toggle behavior and is harmless.
    pub fn toggle_group_collapsed(&mut self, label: &str) {
        if !self.collapsed.remove(label) {
            self.collapsed.insert(label.to_string());
        }
    }

    pub fn is_group_collapsed(&self, label: &str) -> bool {
        self.collapsed.contains(label)
    }

    /// Starts the initial catalog load.
    pub fn load_catalog(&mut self, source: &impl CatalogSource) {
        self.catalog.load(source);
    }

    /// Retries a failed catalog load. Also serves as an explicit refresh
    /// from `Ready`; a no-op while a fetch is in flight.
    pub fn retry_catalog(&mut self, source: &impl CatalogSource) {
        self.catalog.load(source);
    }

    /// Adds one fruit occurrence to the jar.
    pub fn add_to_jar(&mut self, fruit: Fruit) {
        self.jar.add_one(fruit);
    }

    /// Adds a whole group of fruits to the jar, preserving their order.
    pub fn add_group_to_jar(&mut self, fruits: impl IntoIterator<Item = Fruit>) {
        self.jar.add_many(fruits);
    }

    /// Grouped catalog view for the current selection.
    ///
    /// Returns `None` until the catalog is `Ready`; the presenter shows the
    /// loading or error affordance from `catalog().state()` instead.
    pub fn grouped_view(&self) -> Option<GroupedCatalog> {
        match self.catalog.state() {
            CatalogState::Ready(fruits) => {
                Some(group_catalog(fruits, self.group_key, &self.search_term))
            }
            _ => None,
        }
    }

    /// Aggregated jar view, recomputed from the current jar contents.
    pub fn jar_summary(&self) -> JarSummary {
        aggregate_jar(self.jar.fruits())
    }
}
