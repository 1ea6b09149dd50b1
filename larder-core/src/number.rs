//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for exact decimal arithmetic. Kitchen unit
//! factors such as 4.92892159375 mL per teaspoon are finite decimals, so
//! conversions stay exact until the single rounding step in the normalizer.

use dashu_float::DBig;
use dashu_int::ops::BitTest;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Default precision for calculations (decimal digits)
const DEFAULT_PRECISION: usize = 50;

/// Arbitrary precision decimal number
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Handle rational format "a/b"
        if let Some((num_str, den_str)) = s.split_once('/') {
            let num: DBig = num_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: DBig = den_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            if den == DBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }

            let result = Self::with_work_precision(num) / Self::with_work_precision(den);
            return Ok(Self { inner: result });
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { inner: DBig::ZERO };
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: n / d }
    }

    /// Create from f64 via its shortest round-trip decimal text, so 0.1 stays
    /// 0.1 and 123.45 stays 123.45 rather than the nearest binary value.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() || f.is_infinite() {
            return Self { inner: DBig::ZERO };
        }
        // f64 Display never switches to exponent notation
        Self::from_str(&f.to_string()).unwrap_or(Self { inner: DBig::ZERO })
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }


    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self { inner: -self.inner.clone() }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    // ========== Rounding ==========

    /// Round to `sigfigs` significant digits, ties to even.
    ///
    /// Works on the decimal significand directly, so the result is the same
    /// on every platform and never picks up binary floating-point noise.
    pub fn round_sigfigs(&self, sigfigs: usize) -> Self {
        let sigfigs = sigfigs.max(1);
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        if significand == IBig::ZERO {
            return Self::from_i64(0);
        }

        let digits = significand.to_string().trim_start_matches('-').len();
        if digits <= sigfigs {
            return self.clone();
        }
        Self::drop_digits(significand, exponent, digits - sigfigs)
    }

    /// Round to `places` digits after the decimal point, ties to even
    pub fn round_decimals(&self, places: usize) -> Self {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        if significand == IBig::ZERO {
            return Self::from_i64(0);
        }

        let target = -(places as isize);
        if exponent >= target {
            return self.clone();
        }
        Self::drop_digits(significand, exponent, (target - exponent) as usize)
    }

    /// Remove the last `dropped` decimal digits of `significand * 10^exponent`,
    /// rounding half to even
    fn drop_digits(significand: IBig, exponent: isize, dropped: usize) -> Self {
        let negative = significand < IBig::ZERO;
        let magnitude = if negative { -significand } else { significand };

        let divisor = IBig::from(10u8).pow(dropped);
        let mut kept = &magnitude / &divisor;
        let twice_remainder = (&magnitude % &divisor) * IBig::from(2u8);

        let round_up = match twice_remainder.cmp(&divisor) {
            Ordering::Greater => true,
            Ordering::Equal => &kept % IBig::from(2u8) != IBig::ZERO,
            Ordering::Less => false,
        };
        if round_up {
            kept = kept + IBig::ONE;
        }
        if kept == IBig::ZERO {
            return Self::from_i64(0);
        }

        let kept = if negative { -kept } else { kept };
        let rounded = DBig::from_parts(kept, exponent + dropped as isize);
        Self { inner: Self::with_work_precision(rounded) }
    }

    // ========== Display ==========

    /// Render as a plain decimal string with no exponent and no trailing zeros
    pub fn to_plain_string(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        if significand == IBig::ZERO {
            return "0".to_string();
        }

        let negative = significand < IBig::ZERO;
        let magnitude = if negative { -significand } else { significand };
        let mut digits = magnitude.to_string();
        let mut exponent = exponent;

        while exponent < 0 && digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
            exponent += 1;
        }

        let body = if exponent >= 0 {
            let mut s = digits;
            s.push_str(&"0".repeat(exponent as usize));
            s
        } else {
            let point = exponent.unsigned_abs();
            if digits.len() > point {
                let (whole, frac) = digits.split_at(digits.len() - point);
                format!("{}.{}", whole, frac)
            } else {
                format!("0.{}{}", "0".repeat(point - digits.len()), digits)
            }
        };

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        // Get the representation: significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            match TryInto::<i64>::try_into(significand.clone()) {
                Ok(i) => i as f64,
                Err(_) => return None,
            }
        } else {
            // Significand too large - shift right to fit in 53 bits
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            shifted_i64 as f64 * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None; // Exponent out of f64 range
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}
