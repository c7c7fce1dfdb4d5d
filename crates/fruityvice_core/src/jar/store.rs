//! Jar store.
//!
//! # Responsibility
//! - Hold the ordered sequence of fruits the user has added.
//! - Provide the append-only mutator surface the presenter wires to clicks.
//!
//! # Invariants
//! - `add_one` and `add_many` are the only mutators; nothing removes entries.
//! - Relative order of added fruits is preserved.
//! - Jar contents live for the session only and are never persisted.

use crate::model::fruit::Fruit;
use log::info;

/// Ordered, append-only collection of user-selected fruits.
///
/// Duplicates by name are meaningful: every add is one logical occurrence
/// and each occurrence contributes its calories to the aggregate.
#[derive(Debug, Clone, Default)]
pub struct JarStore {
    fruits: Vec<Fruit>,
}

impl JarStore {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fruit to the end of the jar.
    pub fn add_one(&mut self, fruit: Fruit) {
        info!("event=jar_add module=jar count=1 name={}", fruit.name);
        self.fruits.push(fruit);
    }

    /// Appends all `fruits` after the existing jar contents, preserving
    /// their relative order.
    pub fn add_many(&mut self, fruits: impl IntoIterator<Item = Fruit>) {
        let before = self.fruits.len();
        self.fruits.extend(fruits);
        info!(
            "event=jar_add module=jar count={}",
            self.fruits.len() - before
        );
    }

    /// Jar contents in insertion order.
    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    /// Number of occurrences in the jar, duplicates included.
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
