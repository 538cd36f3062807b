//! Compact human readable rendering of matrix entries and row operation
//! factors. Values are shown as small fractions whenever a denominator up to
//! `max_denominator` reproduces them, and in `%.3g` style notation otherwise.

// below this magnitude a value is a genuine tiny decimal, not a fraction artifact
const TINY: f64 = 1e-16;
const SIGNIFICANT_DIGITS: usize = 3;
const MAX_NUMERATOR: f64 = (i64::MAX / 2) as f64;

pub const DEFAULT_MAX_DENOMINATOR: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionFormatter {
    pub max_denominator: u32,
}

impl Default for FractionFormatter {
    fn default() -> Self {
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl FractionFormatter {
    pub fn new(max_denominator: u32) -> Self {
        Self { max_denominator }
    }

    pub fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { -1 } else { 1 };
        let magnitude = value.abs();
        if magnitude < TINY {
            return general_notation(value, SIGNIFICANT_DIGITS);
        }
        match self.best_fraction(magnitude) {
            Some((numerator, denominator)) => {
                let g = gcd(numerator, denominator);
                let (numerator, denominator) = (sign * numerator / g, denominator / g);
                if denominator == 1 {
                    numerator.to_string()
                } else {
                    format!("{numerator}/{denominator}")
                }
            }
            None => general_notation(value, SIGNIFICANT_DIGITS),
        }
    }

    // Walks denominators upwards and keeps the closest numerator/denominator
    // pair. The first near exact match ends the search, so smaller
    // denominators win ties.
    fn best_fraction(&self, magnitude: f64) -> Option<(i64, i64)> {
        let mut best: Option<(i64, i64)> = None;
        let mut best_error = f64::INFINITY;
        for denominator in 1..=i64::from(self.max_denominator) {
            let scaled = (magnitude * denominator as f64).round();
            if !(1.0..=MAX_NUMERATOR).contains(&scaled) {
                continue;
            }
            let numerator = scaled as i64;
            let error = (magnitude - numerator as f64 / denominator as f64).abs();
            if error < best_error {
                best_error = error;
                best = Some((numerator, denominator));
            }
            if error < TINY {
                break;
            }
        }
        best
    }
}

/// Formats `value` with the default denominator bound of 1000.
pub fn format_value(value: f64) -> String {
    FractionFormatter::default().format(value)
}

pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

// printf("%.*g") compatible: scientific notation when the exponent is below -4
// or not smaller than the precision, trailing zeros removed either way.
fn general_notation(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let significant = significant.max(1);
    let scientific = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (significant as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn simple_fractions() {
        assert_eq!(format_value(0.5), "1/2");
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-0.3333333333), "-1/3");
        assert_eq!(format_value(-1.5), "-3/2");
        assert_eq!(format_value(0.1), "1/10");
        assert_eq!(format_value(-4.0), "-4");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn tiny_values_use_general_notation() {
        assert_eq!(format_value(1e-20), "1e-20");
        assert_eq!(format_value(-2.5e-17), "-2.5e-17");
    }

    #[test]
    fn values_below_every_fraction_fall_back() {
        // round(1e-5 * 1000) == 0 for every denominator
        assert_eq!(format_value(1e-5), "1e-05");
        assert_eq!(format_value(1e20), "1e+20");
    }

    #[test]
    fn irrational_values_get_the_closest_bounded_fraction() {
        assert_eq!(format_value(std::f64::consts::PI), "355/113");
        assert_eq!(FractionFormatter::new(10).format(std::f64::consts::PI), "22/7");
    }

    #[test]
    fn smaller_denominator_wins_a_tie() {
        // 1 and 3/2 are both 1/4 away
        assert_eq!(FractionFormatter::new(2).format(1.25), "1");
        assert_eq!(FractionFormatter::new(2).format(-1.25), "-1");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn general_notation_matches_printf() {
        assert_eq!(general_notation(0.000123456, 3), "0.000123");
        assert_eq!(general_notation(123.456, 3), "123");
        assert_eq!(general_notation(1234.5, 3), "1.23e+03");
        assert_eq!(general_notation(0.5, 3), "0.5");
    }

    #[test]
    fn gcd_of_signed_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(7, 0), 7);
    }
}
