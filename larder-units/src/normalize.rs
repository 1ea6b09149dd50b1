//! Conversion to base units
//!
//! The only place normalized values are rounded. Downstream code (sums,
//! storage) works with these values as they are.

use crate::{NormalizedQuantity, Quantity};

/// Significant digits kept in normalized values
pub const NORMALIZED_SIGFIGS: usize = 4;

/// Convert a quantity to its category's base unit, rounded to
/// [`NORMALIZED_SIGFIGS`] significant digits with ties to even.
pub fn normalize(quantity: &Quantity) -> NormalizedQuantity {
    let exact = quantity.unit().to_base(quantity.value());
    NormalizedQuantity {
        value: exact.round_sigfigs(NORMALIZED_SIGFIGS),
        category: quantity.category(),
    }
}
