//! The single entry point record-building code calls

use larder_core::{QuantityError, RawValue};
use crate::{Quantity, Rendering};
use crate::parse::parse_quantity_with;
use crate::units::{UnitRegistry, UNITS};

/// Turns raw (value, unit) pairs into [`Rendering`]s against one registry
#[derive(Debug, Clone, Copy)]
pub struct Quantifiable<'r> {
    registry: &'r UnitRegistry,
}

impl Quantifiable<'static> {
    /// Use the built-in unit table
    pub fn new() -> Self {
        Quantifiable { registry: &UNITS }
    }
}

impl Default for Quantifiable<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Quantifiable<'r> {
    /// Use a custom registry, e.g. the built-ins plus configured units
    pub fn with_registry(registry: &'r UnitRegistry) -> Self {
        Quantifiable { registry }
    }

    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    /// Parse without rendering, for callers that scale or aggregate first
    pub fn parse(
        &self,
        raw_value: Option<&RawValue>,
        raw_unit: Option<&str>,
    ) -> Result<Option<Quantity>, QuantityError> {
        parse_quantity_with(self.registry, raw_value, raw_unit)
    }

    /// Parse, normalize and render.
    ///
    /// `Ok(None)` means no quantity was supplied. The readable text always
    /// reflects the unit the user entered; `normalized` is in the base unit.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn build(
        &self,
        raw_value: Option<&RawValue>,
        raw_unit: Option<&str>,
    ) -> Result<Option<Rendering>, QuantityError> {
        let rendering = self.parse(raw_value, raw_unit)?.map(|q| Rendering::of(&q));
        if let Some(r) = &rendering {
            tracing::trace!(readable = %r.readable, normalized = %r.normalized, unit = %r.unit, "built quantity");
        }
        Ok(rendering)
    }
}

/// [`Quantifiable::build`] against the built-in unit table
pub fn build(
    raw_value: Option<&RawValue>,
    raw_unit: Option<&str>,
) -> Result<Option<Rendering>, QuantityError> {
    Quantifiable::new().build(raw_value, raw_unit)
}
