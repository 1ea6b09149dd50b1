//! Quantity parsing - raw (value, unit) pairs from recipe records

use larder_core::{Number, QuantityError, RawValue};
use crate::Quantity;
use crate::units::{UnitRegistry, UNITS};

/// Parse a raw pair against the built-in registry.
///
/// Returns `Ok(None)` when neither value nor unit is given (blank text
/// counts as not given), which is how recipes say "a pinch of salt"
/// without a formal measurement.
pub fn parse_quantity(
    raw_value: Option<&RawValue>,
    raw_unit: Option<&str>,
) -> Result<Option<Quantity>, QuantityError> {
    parse_quantity_with(&UNITS, raw_value, raw_unit)
}

/// Parse a raw pair against `registry`.
///
/// Checks run in order: both-or-neither, number syntax, sign, unit.
pub fn parse_quantity_with(
    registry: &UnitRegistry,
    raw_value: Option<&RawValue>,
    raw_unit: Option<&str>,
) -> Result<Option<Quantity>, QuantityError> {
    let raw_value = raw_value.filter(|v| !v.is_blank());
    let raw_unit = raw_unit.map(str::trim).filter(|u| !u.is_empty());

    let (raw_value, raw_unit) = match (raw_value, raw_unit) {
        (None, None) => return Ok(None),
        (Some(v), Some(u)) => (v, u),
        _ => return Err(QuantityError::IncompleteQuantity),
    };

    let value = parse_amount(raw_value)?;
    if value.is_negative() {
        return Err(QuantityError::NegativeQuantity);
    }

    let unit = registry.resolve(raw_unit)?;
    Quantity::new(value, unit.clone()).map(Some)
}

/// Parse an amount, keeping its sign
///
/// Supported text formats:
/// - Decimal: "2", "1.5", ".25", "-3"
/// - Fraction: "3/4"
/// - Mixed number: "1 1/2"
pub fn parse_amount(raw: &RawValue) -> Result<Number, QuantityError> {
    match raw {
        RawValue::Number(n) if n.is_finite() => Ok(Number::from_f64(*n)),
        RawValue::Number(n) => Err(QuantityError::InvalidNumber(n.to_string())),
        RawValue::Text(s) => parse_amount_text(s.trim()),
    }
}

fn parse_amount_text(text: &str) -> Result<Number, QuantityError> {
    let invalid = || QuantityError::InvalidNumber(text.to_string());

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let magnitude = match body.split_once(char::is_whitespace) {
        Some((whole, fraction)) => {
            if !is_digits(whole) {
                return Err(invalid());
            }
            let fraction = parse_fraction(fraction.trim()).ok_or_else(invalid)?;
            Number::from_str(whole)?.add(&fraction)
        }
        None if body.contains('/') => parse_fraction(body).ok_or_else(invalid)?,
        None => {
            let decimal = canonical_decimal(body).ok_or_else(invalid)?;
            Number::from_str(&decimal)?
        }
    };

    Ok(if negative { magnitude.neg() } else { magnitude })
}

/// "a/b" with digit-only parts and a non-zero denominator
fn parse_fraction(s: &str) -> Option<Number> {
    let (num, den) = s.split_once('/')?;
    let (num, den) = (num.trim(), den.trim());
    if !is_digits(num) || !is_digits(den) {
        return None;
    }
    Number::from_str(&format!("{}/{}", num, den)).ok()
}

/// Digits with at most one decimal point, rewritten as "int.frac"
fn canonical_decimal(s: &str) -> Option<String> {
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !(int.is_empty() || is_digits(int)) || !(frac.is_empty() || is_digits(frac)) {
        return None;
    }

    let int = if int.is_empty() { "0" } else { int };
    let frac = if frac.is_empty() { "0" } else { frac };
    Some(format!("{}.{}", int, frac))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeasurementCategory;

    fn parse(value: impl Into<RawValue>, unit: &str) -> Result<Option<Quantity>, QuantityError> {
        parse_quantity(Some(&value.into()), Some(unit))
    }

    fn amount(text: &str) -> Result<Number, QuantityError> {
        parse_amount(&RawValue::from(text))
    }

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_absent() {
        assert_eq!(parse_quantity(None, None), Ok(None));
        assert_eq!(parse_quantity(Some(&RawValue::from("  ")), Some("")), Ok(None));
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(parse_quantity(Some(&RawValue::from(2)), None), Err(QuantityError::IncompleteQuantity));
        assert_eq!(parse_quantity(None, Some("cup")), Err(QuantityError::IncompleteQuantity));
        assert_eq!(parse_quantity(Some(&RawValue::from(2)), Some("   ")), Err(QuantityError::IncompleteQuantity));
    }

    #[test]
    fn test_parse_numeric_value() {
        let q = parse(2, "tsp").unwrap().unwrap();
        assert_eq!(q.value(), &Number::from_i64(2));
        assert_eq!(q.unit().token, "tsp");
        assert_eq!(q.category(), MeasurementCategory::Volume);
    }

    #[test]
    fn test_parse_text_value() {
        let q = parse("1.5", "Cups").unwrap().unwrap();
        assert_eq!(q.value(), &num("1.5"));
        assert_eq!(q.unit().token, "cup");
    }

    #[test]
    fn test_amount_formats() {
        assert_eq!(amount("2").unwrap(), Number::from_i64(2));
        assert_eq!(amount("+2").unwrap(), Number::from_i64(2));
        assert_eq!(amount(".25").unwrap(), num("0.25"));
        assert_eq!(amount("3.").unwrap(), Number::from_i64(3));
        assert_eq!(amount(" 0.5 ").unwrap(), num("0.5"));
        assert_eq!(amount("3/4").unwrap(), num("0.75"));
        assert_eq!(amount("1 1/2").unwrap(), num("1.5"));
        assert_eq!(amount("-1").unwrap(), Number::from_i64(-1));
    }

    #[test]
    fn test_invalid_numbers() {
        for text in ["abc", "1.2.3", "1e3", "1/0", "1 1/", "one 1/2", "--1", "1,5", ".", "1/2/3"] {
            assert!(
                matches!(amount(text), Err(QuantityError::InvalidNumber(_))),
                "'{}' should be invalid", text
            );
        }
        assert!(matches!(parse_amount(&RawValue::Number(f64::NAN)), Err(QuantityError::InvalidNumber(_))));
        assert!(matches!(parse_amount(&RawValue::Number(f64::INFINITY)), Err(QuantityError::InvalidNumber(_))));
    }

    #[test]
    fn test_invalid_number_keeps_text() {
        assert_eq!(amount("lots"), Err(QuantityError::InvalidNumber("lots".to_string())));
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse(-1, "cup"), Err(QuantityError::NegativeQuantity));
        assert_eq!(parse("-0.5", "cup"), Err(QuantityError::NegativeQuantity));
        // negative zero is zero
        assert!(parse(-0.0, "cup").unwrap().unwrap().value().is_zero());
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(parse(3, "bogus"), Err(QuantityError::UnknownUnit("bogus".to_string())));
        assert_eq!(parse(3, " Bogus "), Err(QuantityError::UnknownUnit("Bogus".to_string())));
    }

    #[test]
    fn test_number_checked_before_unit() {
        assert!(matches!(parse("abc", "bogus"), Err(QuantityError::InvalidNumber(_))));
        assert_eq!(parse(-2, "bogus"), Err(QuantityError::NegativeQuantity));
    }
}
