//! Unit definitions with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use larder_core::Number;
use crate::MeasurementCategory;

/// A cooking unit: how it is written, what it measures, and how it converts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Canonical token (e.g., "tsp", "g", "cup")
    pub token: String,
    /// Other accepted spellings, matched case-insensitively
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: MeasurementCategory,
    /// Multiply by this to get the category's base unit (value_base = value * factor)
    pub factor: Number,
    /// Display form for exactly one (e.g., "teaspoon")
    pub singular: String,
    /// Display form for everything else (e.g., "teaspoons")
    pub plural: String,
}

impl UnitDefinition {
    /// Create a unit with no extra aliases
    pub fn new(
        token: &str,
        singular: &str,
        plural: &str,
        category: MeasurementCategory,
        factor: Number,
    ) -> Self {
        UnitDefinition {
            token: token.to_string(),
            aliases: Vec::new(),
            category,
            factor,
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    /// Builder: add accepted spellings
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.token == self.category.base_token()
    }

    /// Check if two units measure the same kind of thing
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit to the category's base unit (unrounded)
    pub fn to_base(&self, value: &Number) -> Number {
        value.mul(&self.factor)
    }

    /// Display form for a rendered amount
    pub fn display_form(&self, plural: bool) -> &str {
        if plural {
            &self.plural
        } else {
            &self.singular
        }
    }

    /// Every spelling this unit answers to: token, aliases and both display forms
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.token.as_str())
            .chain(self.aliases.iter().map(|a| a.as_str()))
            .chain([self.singular.as_str(), self.plural.as_str()])
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

/// Problems found while assembling a unit registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("unit has an empty token")]
    EmptyToken,

    /// Same spelling registered for two different units
    #[error("alias '{alias}' is claimed by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    /// `alias` would singularize to a spelling of another unit and never resolve to its own
    #[error("alias '{alias}' of '{unit}' is shadowed by plural stripping onto '{shadowed_by}'")]
    PluralShadow {
        alias: String,
        unit: String,
        shadowed_by: String,
    },

    #[error("unit '{token}' has invalid factor {factor}: must be a positive decimal")]
    InvalidFactor {
        token: String,
        factor: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teaspoon() -> UnitDefinition {
        UnitDefinition::new("tsp", "teaspoon", "teaspoons", MeasurementCategory::Volume,
            Number::from_str("4.92892159375").unwrap())
            .with_aliases(&["tsps", "t."])
    }

    fn millilitre() -> UnitDefinition {
        UnitDefinition::new("ml", "mL", "mL", MeasurementCategory::Volume, Number::from_i64(1))
    }

    fn gram() -> UnitDefinition {
        UnitDefinition::new("g", "g", "g", MeasurementCategory::Mass, Number::from_i64(1))
    }

    #[test]
    fn test_is_base() {
        assert!(millilitre().is_base());
        assert!(gram().is_base());
        assert!(!teaspoon().is_base());
    }

    #[test]
    fn test_compatible_units() {
        assert!(teaspoon().is_compatible(&millilitre()));
        assert!(!teaspoon().is_compatible(&gram()));
    }

    #[test]
    fn test_to_base() {
        let value = teaspoon().to_base(&Number::from_i64(2));
        assert_eq!(value, Number::from_str("9.8578431875").unwrap());
    }

    #[test]
    fn test_display_form() {
        let tsp = teaspoon();
        assert_eq!(tsp.display_form(false), "teaspoon");
        assert_eq!(tsp.display_form(true), "teaspoons");
        assert_eq!(gram().display_form(true), "g");
    }

    #[test]
    fn test_spellings() {
        let binding = teaspoon();
        let spellings: Vec<_> = binding.spellings().collect();
        assert_eq!(spellings, vec!["tsp", "tsps", "t.", "teaspoon", "teaspoons"]);
    }

    #[test]
    fn test_deserialize_from_config() {
        let json = r#"{
            "token": "jigger",
            "aliases": ["shot"],
            "category": "volume",
            "factor": "44.36",
            "singular": "jigger",
            "plural": "jiggers"
        }"#;
        let unit: UnitDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(unit.token, "jigger");
        assert_eq!(unit.category, MeasurementCategory::Volume);
        assert_eq!(unit.factor, Number::from_str("44.36").unwrap());
    }
}
