//! Larder Core - Fundamental types
//!
//! This crate provides the core types used throughout Larder:
//! - `Number`: Arbitrary precision decimal numbers
//! - `RawValue`: Amounts as supplied by callers (number or text)
//! - `QuantityError`: What can go wrong turning raw input into a quantity

mod number;
mod value;
mod error;

pub use number::{Number, NumberError};
pub use value::RawValue;
pub use error::{QuantityError, codes};

