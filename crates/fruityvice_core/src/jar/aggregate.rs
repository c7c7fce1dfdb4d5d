//! Jar aggregation.
//!
//! # Responsibility
//! - Roll up the jar into per-name calorie totals and occurrence counts.
//! - Assign each distinct name a deterministic display color.
//!
//! # Invariants
//! - Entry order follows first appearance in the jar.
//! - The sum of entry totals equals the jar-wide calorie total.
//! - Aggregation is pure and recomputed from scratch on every call.

use crate::model::fruit::Fruit;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Hue spacing factor for generated colors (golden-ratio conjugate).
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// HSL color assigned to one distinct jar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HslColor {
    /// Hue in degrees, rounded for display.
    pub hue: u16,
    /// Saturation percentage.
    pub saturation: u8,
    /// Lightness percentage.
    pub lightness: u8,
}

impl Display for HslColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Returns the color for the `index`-th distinct name in first-appearance
/// order.
///
/// Golden-ratio hue stepping keeps colors visually distinct for an unbounded
/// number of names without a fixed palette; saturation and lightness cycle
/// through three nearby steps.
pub fn color_for_index(index: usize) -> HslColor {
    let hue = (index as f64 * GOLDEN_RATIO_CONJUGATE * 360.0) % 360.0;
    let step = (index % 3) as u8;
    HslColor {
        hue: hue.round() as u16,
        saturation: 45 + step * 5,
        lightness: 65 + step * 5,
    }
}

/// Per-distinct-name rollup within the jar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JarEntry {
    pub name: String,
    /// Calorie sum over all occurrences of this name.
    pub total_calories: f64,
    /// Number of occurrences of this name.
    pub count: u32,
    pub color: HslColor,
}

/// One slice of the series handed to the pie-chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub title: String,
    pub value: f64,
    pub color: HslColor,
}

/// Aggregated view of the jar.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JarSummary {
    entries: Vec<JarEntry>,
    total_calories: f64,
}

impl JarSummary {
    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[JarEntry] {
        &self.entries
    }

    /// Looks up the rollup for one distinct name.
    pub fn entry(&self, name: &str) -> Option<&JarEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Calorie sum over every jar occurrence, duplicates included.
    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    /// Fraction of total calories contributed by `entry`.
    ///
    /// Returns `0.0` for an empty jar instead of dividing by zero.
    pub fn share_of(&self, entry: &JarEntry) -> f64 {
        if self.total_calories == 0.0 {
            0.0
        } else {
            entry.total_calories / self.total_calories
        }
    }

    /// Chart-ready series, one slice per distinct name.
    pub fn pie_series(&self) -> Vec<PieSlice> {
        self.entries
            .iter()
            .map(|entry| PieSlice {
                title: entry.name.clone(),
                value: entry.total_calories,
                color: entry.color,
            })
            .collect()
    }
}

/// Rolls up `fruits` into per-name entries plus a jar-wide calorie total.
///
/// Colors are keyed by the index of a name's first appearance among the
/// currently-distinct names. Because the set is recomputed from scratch,
/// colors can shift when the distinct-name set changes; the original UI
/// behaves the same way and the quirk is kept deliberately.
pub fn aggregate_jar(fruits: &[Fruit]) -> JarSummary {
    let mut summary = JarSummary::default();
    for fruit in fruits {
        let calories = fruit.nutrition.calories;
        summary.total_calories += calories;
        match summary
            .entries
            .iter()
            .position(|entry| entry.name == fruit.name)
        {
            Some(index) => {
                let entry = &mut summary.entries[index];
                entry.total_calories += calories;
                entry.count += 1;
            }
            None => {
                let color = color_for_index(summary.entries.len());
                summary.entries.push(JarEntry {
                    name: fruit.name.clone(),
                    total_calories: calories,
                    count: 1,
                    color,
                });
            }
        }
    }
    summary
}
