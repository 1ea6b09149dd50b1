//! Larder Units - Cooking quantities
//!
//! Turns the free-form (amount, unit) pairs users type into recipes into a
//! readable string plus a normalized number for aggregation and scaling.
//!
//! Categories and base units:
//! - Volume (ml): tsp, tbsp, fl oz, cup, pint, quart, gallon, ml, cl, dl, l
//! - Mass (g): mg, g, kg, oz, lb
//! - Count (whole): whole, piece, clove, slice, pinch, dash, can, bunch, dozen
//! - Time (s): s, min, h, day
//!
//! ```ignore
//! let r = larder_units::build(Some(&"1 1/2".into()), Some("cups"))?.unwrap();
//! assert_eq!(r.readable, "1 1/2 cups");
//! ```

mod category;
mod unit;
mod units;
mod quantity;
mod parse;
mod normalize;
mod format;
mod quantifiable;
mod scaling;

pub use category::MeasurementCategory;
pub use unit::{UnitDefinition, RegistryError};
pub use units::{UnitRegistry, UnitRegistryBuilder, UNITS};
pub use quantity::{Quantity, NormalizedQuantity, Rendering};
pub use parse::{parse_quantity, parse_quantity_with, parse_amount};
pub use normalize::{normalize, NORMALIZED_SIGFIGS};
pub use format::{render, format_amount};
pub use quantifiable::{Quantifiable, build};
pub use scaling::{scale, scale_servings};
