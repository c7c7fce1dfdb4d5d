//! Fruit catalog record.
//!
//! # Responsibility
//! - Define the canonical catalog entry with taxonomy and nutrition fields.
//! - Map upstream wire naming onto stable field names.
//!
//! # Invariants
//! - `name` is the identity key for jar aggregation.
//! - `nutrition.calories` is non-negative and finite for validated records.
//! - A `Fruit` is never mutated once fetched.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Nutrition facts carried on every catalog record.
///
/// Only `calories` participates in jar aggregation; the remaining fields are
/// carried for table display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub protein: f64,
}

/// Canonical catalog entry.
///
/// `name` identifies a fruit for aggregation purposes; `family`, `order` and
/// `genus` are the grouping dimensions. The upstream API has shipped both
/// lowercase and capitalized taxonomy field names, so decoding accepts both
/// spellings while encoding always emits the lowercase form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub name: String,
    /// Upstream catalog identifier. Informational only.
    pub id: u32,
    #[serde(alias = "Family")]
    pub family: String,
    #[serde(alias = "Order")]
    pub order: String,
    #[serde(alias = "Genus")]
    pub genus: String,
    /// Serialized as `nutritions` to match the upstream schema naming.
    #[serde(rename = "nutritions")]
    pub nutrition: Nutrition,
}

impl Fruit {
    /// Checks that this record is acceptable catalog data.
    ///
    /// # Errors
    /// - Returns an error when `calories` is negative or not finite.
    pub fn validate(&self) -> Result<(), FruitValidationError> {
        let calories = self.nutrition.calories;
        if !calories.is_finite() || calories < 0.0 {
            return Err(FruitValidationError::InvalidCalories {
                name: self.name.clone(),
                calories,
            });
        }
        Ok(())
    }
}

/// Validation error for decoded catalog records.
#[derive(Debug, Clone, PartialEq)]
pub enum FruitValidationError {
    /// `calories` must be a non-negative finite number.
    InvalidCalories { name: String, calories: f64 },
}

impl Display for FruitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalories { name, calories } => {
                write!(f, "invalid calories `{calories}` for fruit `{name}`")
            }
        }
    }
}

impl Error for FruitValidationError {}
