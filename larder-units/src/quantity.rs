//! Quantity types - a parsed amount, its normalized form, and its rendering

use std::fmt;
use serde::{Serialize, Deserialize};
use larder_core::{Number, QuantityError};
use crate::{MeasurementCategory, UnitDefinition};
use crate::format::render;
use crate::normalize::normalize;

/// A non-negative amount in a resolved unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: Number,
    unit: UnitDefinition,
}

impl Quantity {
    /// Create a quantity, rejecting negative values
    pub fn new(value: Number, unit: UnitDefinition) -> Result<Self, QuantityError> {
        if value.is_negative() {
            return Err(QuantityError::NegativeQuantity);
        }
        Ok(Quantity { value, unit })
    }

    pub fn value(&self) -> &Number {
        &self.value
    }

    pub fn unit(&self) -> &UnitDefinition {
        &self.unit
    }

    pub fn category(&self) -> MeasurementCategory {
        self.unit.category
    }

    /// Convert to the category's base unit
    pub fn normalize(&self) -> NormalizedQuantity {
        normalize(self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.token)
    }
}

/// A value expressed in its category's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    pub value: Number,
    pub category: MeasurementCategory,
}

impl NormalizedQuantity {
    /// Token of the base unit `value` is expressed in
    pub fn unit_token(&self) -> &'static str {
        self.category.base_token()
    }

    /// Sum two normalized values of the same category.
    ///
    /// Both sides were already rounded by the normalizer; the sum is exact
    /// and is not rounded again. Returns `None` across categories.
    pub fn checked_add(&self, other: &NormalizedQuantity) -> Option<NormalizedQuantity> {
        if self.category != other.category {
            return None;
        }
        Some(NormalizedQuantity {
            value: self.value.add(&other.value),
            category: self.category,
        })
    }
}

impl fmt::Display for NormalizedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit_token())
    }
}

/// What callers store: display text plus the normalized number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendering {
    /// Human-readable text in the unit the user entered, e.g. "1 1/2 cups"
    pub readable: String,
    /// Value in the category's base unit, rounded to 4 significant digits
    pub normalized: Number,
    /// Canonical token of the unit the user entered, e.g. "cup"
    pub unit: String,
}

impl Rendering {
    /// Render a parsed quantity: text from the original value, number from the normalized one
    pub fn of(quantity: &Quantity) -> Rendering {
        let normalized = quantity.normalize();
        Rendering {
            readable: render(quantity.value(), quantity.unit()),
            normalized: normalized.value,
            unit: quantity.unit().token.clone(),
        }
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.readable)
    }
}
