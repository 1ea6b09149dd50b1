//! Recipe scaling
//!
//! Scale parsed quantities by a factor or by serving counts. The unit is
//! kept, so a scaled "1 1/2 cups" renders as "3 cups", not as millilitres.

use larder_core::{Number, QuantityError};
use crate::Quantity;

/// Multiply a quantity by `factor`
pub fn scale(quantity: &Quantity, factor: &Number) -> Result<Quantity, QuantityError> {
    if factor.is_negative() {
        return Err(QuantityError::NegativeQuantity);
    }
    Quantity::new(quantity.value().mul(factor), quantity.unit().clone())
}

/// Scale a quantity written for `from` servings to `to` servings
pub fn scale_servings(
    quantity: &Quantity,
    from: &Number,
    to: &Number,
) -> Result<Quantity, QuantityError> {
    validate_servings(from)?;
    validate_servings(to)?;

    // scaled = amount * (to / from)
    let factor = to.checked_div(from)?;
    scale(quantity, &factor)
}

fn validate_servings(servings: &Number) -> Result<(), QuantityError> {
    if servings.is_negative() || servings.is_zero() {
        return Err(QuantityError::InvalidServings(servings.to_string()));
    }
    Ok(())
}
