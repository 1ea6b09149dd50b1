//! Unit registry - the kitchen vocabulary as one flat lookup table

use std::collections::HashMap;
use std::sync::LazyLock;
use larder_core::{Number, QuantityError};
use crate::{MeasurementCategory, UnitDefinition};
use crate::unit::RegistryError;

/// Global unit registry, built from the compiled-in table on first use
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| {
    UnitRegistry::builder()
        .with_builtin()
        .build()
        .expect("built-in unit table is valid")
});

/// Normalize a spelling for lookup: lowercase, no dots, single spaces
pub(crate) fn lookup_key(token: &str) -> String {
    token
        .to_lowercase()
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Registry of all known units
///
/// Read-only once built, so it can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<UnitDefinition>,
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn builder() -> UnitRegistryBuilder {
        UnitRegistryBuilder::default()
    }

    /// Look up a unit by any spelling.
    ///
    /// A trailing "s" is stripped first when the remainder is itself a known
    /// spelling ("cups" -> "cup"); otherwise the exact spelling is tried.
    pub fn get(&self, token: &str) -> Option<&UnitDefinition> {
        let key = lookup_key(token);
        if key.is_empty() {
            return None;
        }

        let singular = key.strip_suffix('s').and_then(|stem| self.index.get(stem));
        singular
            .or_else(|| self.index.get(&key))
            .map(|&i| &self.units[i])
    }

    /// Like [`get`](Self::get), failing with the trimmed token as typed
    pub fn resolve(&self, token: &str) -> Result<&UnitDefinition, QuantityError> {
        match self.get(token) {
            Some(unit) => {
                tracing::trace!(token, unit = %unit.token, "resolved unit");
                Ok(unit)
            }
            None => Err(QuantityError::UnknownUnit(token.trim().to_string())),
        }
    }

    /// All units, in registration order
    pub fn units(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter()
    }

    /// Get all units in a category
    pub fn by_category(&self, category: MeasurementCategory) -> Vec<&UnitDefinition> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// The unit normalized values of `category` are expressed in
    pub fn base_unit(&self, category: MeasurementCategory) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.category == category && u.is_base())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Collects unit definitions and validates them into a [`UnitRegistry`]
#[derive(Debug, Default)]
pub struct UnitRegistryBuilder {
    units: Vec<UnitDefinition>,
    pending_error: Option<RegistryError>,
}

impl UnitRegistryBuilder {
    /// Add the compiled-in kitchen units
    pub fn with_builtin(mut self) -> Self {
        self.register_volume_units();
        self.register_mass_units();
        self.register_count_units();
        self.register_time_units();
        self
    }

    /// Add one unit
    pub fn unit(mut self, unit: UnitDefinition) -> Self {
        self.units.push(unit);
        self
    }

    /// Add units, e.g. ones deserialized from a config file
    pub fn units(mut self, units: impl IntoIterator<Item = UnitDefinition>) -> Self {
        self.units.extend(units);
        self
    }

    /// Validate and index. Fails on empty tokens, non-positive factors,
    /// a spelling shared by two units, or a spelling that plural stripping
    /// would send to another unit.
    pub fn build(self) -> Result<UnitRegistry, RegistryError> {
        if let Some(err) = self.pending_error {
            return Err(err);
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, unit) in self.units.iter().enumerate() {
            if lookup_key(&unit.token).is_empty() {
                return Err(RegistryError::EmptyToken);
            }
            if unit.factor.is_negative() || unit.factor.is_zero() {
                return Err(RegistryError::InvalidFactor {
                    token: unit.token.clone(),
                    factor: unit.factor.to_string(),
                });
            }

            for spelling in unit.spellings() {
                let key = lookup_key(spelling);
                if key.is_empty() {
                    continue;
                }
                match index.get(&key) {
                    Some(&existing) if existing != i => {
                        return Err(RegistryError::DuplicateAlias {
                            alias: key,
                            first: self.units[existing].token.clone(),
                            second: unit.token.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        index.insert(key, i);
                    }
                }
            }
        }

        // Registration order, so the first conflict reported is stable
        for (i, unit) in self.units.iter().enumerate() {
            for spelling in unit.spellings() {
                let key = lookup_key(spelling);
                if let Some(&other) = key.strip_suffix('s').and_then(|stem| index.get(stem)) {
                    if other != i {
                        return Err(RegistryError::PluralShadow {
                            alias: key,
                            unit: unit.token.clone(),
                            shadowed_by: self.units[other].token.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(units = self.units.len(), spellings = index.len(), "unit registry built");

        Ok(UnitRegistry {
            units: self.units,
            index,
        })
    }

    /// Register a built-in unit whose factor is written as a decimal literal
    fn define(
        &mut self,
        token: &str,
        singular: &str,
        plural: &str,
        category: MeasurementCategory,
        factor: &str,
        aliases: &[&str],
    ) {
        match Number::from_str(factor) {
            Ok(factor) => self.units.push(
                UnitDefinition::new(token, singular, plural, category, factor).with_aliases(aliases),
            ),
            Err(_) => {
                self.pending_error.get_or_insert(RegistryError::InvalidFactor {
                    token: token.to_string(),
                    factor: factor.to_string(),
                });
            }
        }
    }

    fn register_volume_units(&mut self) {
        use MeasurementCategory::Volume;

        // Metric
        self.define("ml", "mL", "mL", Volume, "1", &["milliliter", "millilitre", "cc"]);
        self.define("cl", "cL", "cL", Volume, "10", &["centiliter", "centilitre"]);
        self.define("dl", "dL", "dL", Volume, "100", &["deciliter", "decilitre"]);
        self.define("l", "L", "L", Volume, "1000", &["liter", "litre", "ltr"]);

        // US customary
        self.define("tsp", "teaspoon", "teaspoons", Volume, "4.92892159375", &[]);
        self.define("tbsp", "tablespoon", "tablespoons", Volume, "14.78676478125",
            &["tbs", "tbl", "tblsp", "tbsps"]);
        self.define("fl oz", "fluid ounce", "fluid ounces", Volume, "29.5735295625",
            &["floz", "fluid oz"]);
        self.define("cup", "cup", "cups", Volume, "236.5882365", &["c"]);
        self.define("pint", "pint", "pints", Volume, "473.176473", &["pt"]);
        self.define("quart", "quart", "quarts", Volume, "946.352946", &["qt"]);
        self.define("gallon", "gallon", "gallons", Volume, "3785.411784", &["gal"]);
    }

    fn register_mass_units(&mut self) {
        use MeasurementCategory::Mass;

        self.define("mg", "mg", "mg", Mass, "0.001", &["milligram", "milligramme"]);
        self.define("g", "g", "g", Mass, "1", &["gram", "gramme", "gr"]);
        self.define("kg", "kg", "kg", Mass, "1000", &["kilogram", "kilogramme", "kilo"]);
        self.define("oz", "ounce", "ounces", Mass, "28.349523125", &[]);
        self.define("lb", "pound", "pounds", Mass, "453.59237", &[]);
    }

    fn register_count_units(&mut self) {
        use MeasurementCategory::Count;

        self.define("whole", "whole", "whole", Count, "1", &["each", "ea", "item"]);
        self.define("piece", "piece", "pieces", Count, "1", &["pc", "pcs"]);
        self.define("clove", "clove", "cloves", Count, "1", &[]);
        self.define("slice", "slice", "slices", Count, "1", &[]);
        self.define("pinch", "pinch", "pinches", Count, "1", &[]);
        self.define("dash", "dash", "dashes", Count, "1", &[]);
        self.define("can", "can", "cans", Count, "1", &["tin"]);
        self.define("bunch", "bunch", "bunches", Count, "1", &[]);
        self.define("dozen", "dozen", "dozen", Count, "12", &["doz"]);
    }

    fn register_time_units(&mut self) {
        use MeasurementCategory::Time;

        self.define("s", "second", "seconds", Time, "1", &["sec"]);
        self.define("min", "minute", "minutes", Time, "60", &["mins"]);
        self.define("h", "hour", "hours", Time, "3600", &["hr", "hrs"]);
        self.define("day", "day", "days", Time, "86400", &["d"]);
    }
}
