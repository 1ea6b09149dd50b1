//! Measurement categories
//!
//! Every unit belongs to exactly one category and values only ever convert
//! within it. Each category has a single base unit used for normalized values.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of thing a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementCategory {
    /// Base unit: millilitre
    Volume,
    /// Base unit: gram
    Mass,
    /// Base unit: one whole item
    Count,
    /// Base unit: second (preparation and cooking times)
    Time,
}

impl MeasurementCategory {
    /// All categories, in registry order
    pub const ALL: [MeasurementCategory; 4] = [
        MeasurementCategory::Volume,
        MeasurementCategory::Mass,
        MeasurementCategory::Count,
        MeasurementCategory::Time,
    ];

    /// Canonical token of the base unit
    pub fn base_token(&self) -> &'static str {
        match self {
            MeasurementCategory::Volume => "ml",
            MeasurementCategory::Mass => "g",
            MeasurementCategory::Count => "whole",
            MeasurementCategory::Time => "s",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeasurementCategory::Volume => "volume",
            MeasurementCategory::Mass => "mass",
            MeasurementCategory::Count => "count",
            MeasurementCategory::Time => "time",
        }
    }
}

impl fmt::Display for MeasurementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
