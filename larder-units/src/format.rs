//! Fraction rendering - "1 1/2 cups", "3/4 teaspoon", "0.3 cups"
//!
//! Works on f64 because display only needs to be close: amounts typed as
//! decimals (0.33) should still come out as the fraction a cook would write.

use larder_core::Number;
use crate::UnitDefinition;

/// How close to a whole number counts as whole
const WHOLE_EPSILON: f64 = 1e-6;

/// How close to a fraction counts as that fraction
const FRACTION_TOLERANCE: f64 = 1.0 / 64.0;

/// Denominators tried, in priority order; earlier ones win ties
const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];

/// Decimal places kept before handing the amount to f64 formatting; matches
/// `WHOLE_EPSILON` so nothing the formatter distinguishes is lost
const RENDER_PLACES: usize = 6;

/// Render an amount followed by the unit's singular or plural display form
pub fn render(value: &Number, unit: &UnitDefinition) -> String {
    let value = value.round_decimals(RENDER_PLACES);
    let amount = match value.to_f64() {
        Some(v) => format_amount(v),
        // past f64 range: plain decimal at two places
        None => value.round_decimals(2).to_plain_string(),
    };

    let form = unit.display_form(amount != "1");
    if form.is_empty() {
        amount
    } else {
        format!("{} {}", amount, form)
    }
}

/// Render a non-negative amount as a whole number, mixed fraction, or decimal
pub fn format_amount(value: f64) -> String {
    let whole = value.floor();
    let frac = value - whole;

    if frac < WHOLE_EPSILON {
        return format_whole(whole);
    }
    if 1.0 - frac < WHOLE_EPSILON {
        return format_whole(whole + 1.0);
    }

    match closest_fraction(frac) {
        Some((num, den)) if whole == 0.0 => format!("{}/{}", num, den),
        Some((num, den)) => format!("{} {}/{}", format_whole(whole), num, den),
        None => format_decimal(value),
    }
}

fn format_whole(whole: f64) -> String {
    format!("{:.0}", whole)
}

/// Decimal rounded to 2 places without trailing zeros
fn format_decimal(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Closest supported proper fraction to `frac`, reduced
fn closest_fraction(frac: f64) -> Option<(u32, u32)> {
    let mut best: Option<(u32, u32, f64)> = None;

    for den in DENOMINATORS {
        let num = (frac * den as f64).round() as u32;
        if num == 0 || num >= den {
            continue;
        }

        let error = (frac - num as f64 / den as f64).abs();
        if error > FRACTION_TOLERANCE {
            continue;
        }
        if best.map_or(true, |(_, _, best_error)| error < best_error) {
            best = Some((num, den, error));
        }
    }

    best.map(|(num, den, _)| {
        let g = gcd(num, den);
        (num / g, den / g)
    })
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    fn render_in(value: &str, unit: &str) -> String {
        render(&Number::from_str(value).unwrap(), UNITS.get(unit).unwrap())
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(12.0000001), "12");
        assert_eq!(format_amount(2.9999999), "3");
    }

    #[test]
    fn test_halves_thirds_quarters_eighths() {
        assert_eq!(format_amount(1.5), "1 1/2");
        assert_eq!(format_amount(0.5), "1/2");
        assert_eq!(format_amount(0.25), "1/4");
        assert_eq!(format_amount(2.75), "2 3/4");
        assert_eq!(format_amount(0.125), "1/8");
        assert_eq!(format_amount(1.375), "1 3/8");
        assert_eq!(format_amount(0.875), "7/8");
    }

    #[test]
    fn test_imprecise_thirds() {
        assert_eq!(format_amount(0.33), "1/3");
        assert_eq!(format_amount(1.0 / 3.0), "1/3");
        assert_eq!(format_amount(0.67), "2/3");
        assert_eq!(format_amount(2.666), "2 2/3");
    }

    #[test]
    fn test_reduced_to_lowest_terms() {
        // 4/8 and 2/4 both tie with 1/2; the earlier denominator wins
        assert_eq!(format_amount(0.5), "1/2");
        assert_eq!(format_amount(0.75), "3/4");
    }

    #[test]
    fn test_decimal_fallback() {
        assert_eq!(format_amount(0.3), "0.3");
        assert_eq!(format_amount(1.2), "1.2");
        assert_eq!(format_amount(0.05), "0.05");
        assert_eq!(format_amount(2.456), "2.46");
    }

    #[test]
    fn test_render_pluralizes() {
        assert_eq!(render_in("2", "tsp"), "2 teaspoons");
        assert_eq!(render_in("1", "tsp"), "1 teaspoon");
        assert_eq!(render_in("1.5", "cup"), "1 1/2 cups");
        assert_eq!(render_in("0.5", "cup"), "1/2 cups");
        assert_eq!(render_in("3", "pinch"), "3 pinches");
    }

    #[test]
    fn test_render_zero_is_plural() {
        assert_eq!(render_in("0", "cup"), "0 cups");
        assert_eq!(render_in("0", "tbsp"), "0 tablespoons");
    }

    #[test]
    fn test_render_invariant_forms() {
        assert_eq!(render_in("250", "g"), "250 g");
        assert_eq!(render_in("1", "g"), "1 g");
        assert_eq!(render_in("2", "whole"), "2 whole");
    }

    #[test]
    fn test_render_nearly_one_is_singular() {
        assert_eq!(render_in("1.0000001", "cup"), "1 cup");
    }

    #[test]
    fn test_render_below_f64_range_rounds_to_zero() {
        let tiny = format!("0.{}1", "0".repeat(400));
        assert_eq!(render_in(&tiny, "cup"), "0 cups");
        assert_eq!(render_in("0.0000000000000001", "kg"), "0 kg");
    }

    #[test]
    fn test_render_above_f64_range() {
        let zeros = "0".repeat(400);
        assert_eq!(render_in(&format!("25{}", zeros), "g"), format!("25{} g", zeros));
        assert_eq!(render_in(&format!("3{}", zeros), "cup"), format!("3{} cups", zeros));
    }
}
