//! Catalog grouping engine.
//!
//! # Responsibility
//! - Filter the catalog by case-insensitive name search.
//! - Partition filtered fruits into labeled buckets for display.
//!
//! # Invariants
//! - Bucket order follows first encounter in catalog order.
//! - Items keep their original relative order within each bucket.
//! - The multiset union of all buckets equals the filtered input.
//! - Grouping is pure and total; no input panics or errors.

use crate::model::fruit::Fruit;
use serde::{Deserialize, Serialize};

/// Bucket label used when no grouping dimension is selected.
pub const ALL_FRUITS_LABEL: &str = "All Fruits";

/// Dimension used to partition the catalog for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// Single "All Fruits" bucket.
    #[default]
    None,
    Family,
    Order,
    Genus,
}

impl GroupKey {
    /// Returns the grouping dimension value for `fruit`, or `None` for
    /// ungrouped display.
    fn dimension<'a>(&self, fruit: &'a Fruit) -> Option<&'a str> {
        match self {
            Self::None => None,
            Self::Family => Some(fruit.family.as_str()),
            Self::Order => Some(fruit.order.as_str()),
            Self::Genus => Some(fruit.genus.as_str()),
        }
    }
}

/// One labeled bucket of the grouped catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FruitGroup {
    pub label: String,
    pub fruits: Vec<Fruit>,
}

/// Ordered grouped view of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedCatalog {
    groups: Vec<FruitGroup>,
}

impl GroupedCatalog {
    /// Buckets in first-encounter order.
    pub fn groups(&self) -> &[FruitGroup] {
        &self.groups
    }

    /// Looks up one bucket by its label.
    pub fn group(&self, label: &str) -> Option<&FruitGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of fruits across all buckets.
    pub fn fruit_count(&self) -> usize {
        self.groups.iter().map(|group| group.fruits.len()).sum()
    }
}

/// Groups `fruits` for display.
///
/// # Contract
/// - Keeps fruits whose `name` contains `search_term` case-insensitively;
///   an empty term keeps everything.
/// - `GroupKey::None` yields exactly one `"All Fruits"` bucket in catalog
///   order, present even when the filter leaves nothing.
/// - Otherwise buckets are labeled by the dimension value with only its
///   first character uppercased; an empty dimension value is a valid,
///   distinct bucket with an empty label.
pub fn group_catalog(fruits: &[Fruit], key: GroupKey, search_term: &str) -> GroupedCatalog {
    let needle = search_term.to_lowercase();

    let mut grouped = GroupedCatalog::default();
    for fruit in fruits {
        if !needle.is_empty() && !fruit.name.to_lowercase().contains(&needle) {
            continue;
        }
        let label = match key.dimension(fruit) {
            Some(value) => capitalize_first(value),
            None => ALL_FRUITS_LABEL.to_string(),
        };
        match grouped.groups.iter().position(|group| group.label == label) {
            Some(index) => grouped.groups[index].fruits.push(fruit.clone()),
            None => grouped.groups.push(FruitGroup {
                label,
                fruits: vec![fruit.clone()],
            }),
        }
    }

    // The ungrouped view always shows its single bucket, filtered-empty or not.
    if key == GroupKey::None && grouped.groups.is_empty() {
        grouped.groups.push(FruitGroup {
            label: ALL_FRUITS_LABEL.to_string(),
            fruits: Vec::new(),
        });
    }

    grouped
}

/// Uppercases only the first character of `value`; the rest is unchanged.
///
/// Non-alphabetic leading characters have no uppercase mapping and pass
/// through untouched; an empty string stays empty.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
