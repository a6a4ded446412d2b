// SPDX-License-Identifier: MPL-2.0
//! Formatting of values with SI prefixes, e.g. `32.123456789 GHz`.
//!
//! Prefixes run from femto (1e-15) to tera (1e12). Values outside that range
//! keep the outermost prefix, so `3e-17 s` prints as `0.03 fs`.

/// Number of supported prefixes, femto through tera.
pub const PREFIX_COUNT: usize = 10;

/// Power of one thousand of the first prefix (femto).
const MIN_POWER: i32 = -5;

/// Significant digits kept when printing the scaled value.
const SIGNIFICANT_DIGITS: usize = 15;

/// Localized prefix symbols and decimal separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiPrefixes {
    symbols: [String; PREFIX_COUNT],
    decimal_separator: String,
}

impl SiPrefixes {
    /// Creates a prefix set. `symbols` runs from femto to tera, with the
    /// empty string at index 5 for "no prefix".
    #[must_use]
    pub fn new(symbols: [String; PREFIX_COUNT], decimal_separator: impl Into<String>) -> Self {
        Self {
            symbols,
            decimal_separator: decimal_separator.into(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self::from_static(["f", "p", "n", "µ", "m", "", "k", "M", "G", "T"], ".")
    }

    #[must_use]
    pub fn russian() -> Self {
        Self::from_static(["ф", "п", "н", "мк", "м", "", "к", "М", "Г", "Т"], ",")
    }

    /// Prefix set for a language tag such as `ru-RU`. Unknown languages get
    /// the English set.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case("ru") {
            Self::russian()
        } else {
            Self::english()
        }
    }

    fn from_static(symbols: [&str; PREFIX_COUNT], decimal_separator: &str) -> Self {
        Self::new(symbols.map(str::to_string), decimal_separator)
    }

    #[must_use]
    pub fn symbols(&self) -> &[String; PREFIX_COUNT] {
        &self.symbols
    }

    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }
}

impl Default for SiPrefixes {
    fn default() -> Self {
        Self::english()
    }
}

/// Formats `value` with the best fitting prefix, or with `fixed_prefix` if it
/// is one of the symbols in `prefixes`.
///
/// `delimiter` goes between number and prefix, and is left out when there is
/// neither a prefix nor a unit.
///
/// ```
/// use navkit::convert::{format_si, SiPrefixes};
///
/// let english = SiPrefixes::english();
/// assert_eq!(format_si(17.1e-6, "m", &english, " ", None), "17.1 µm");
/// assert_eq!(format_si(1500.0, "Hz", &english, " ", Some("")), "1500 Hz");
/// ```
#[must_use]
pub fn format_si(
    value: f64,
    units: &str,
    prefixes: &SiPrefixes,
    delimiter: &str,
    fixed_prefix: Option<&str>,
) -> String {
    let index = fixed_prefix
        .and_then(|symbol| prefixes.position(symbol))
        .unwrap_or_else(|| best_index(value));
    let power = index as i32 + MIN_POWER;
    let prefix = &prefixes.symbols[index];

    let delimiter = if units.is_empty() && prefix.is_empty() {
        ""
    } else {
        delimiter
    };

    let scaled = value / 10f64.powi(power * 3);
    let number = significant(scaled, SIGNIFICANT_DIGITS).replace('.', &prefixes.decimal_separator);
    format!("{number}{delimiter}{prefix}{units}")
}

fn best_index(value: f64) -> usize {
    let power = if value == 0.0 || !value.is_finite() {
        0
    } else {
        (value.abs().log10() / 3.0).floor() as i32
    };
    let max_power = MIN_POWER + PREFIX_COUNT as i32 - 1;
    (power.clamp(MIN_POWER, max_power) - MIN_POWER) as usize
}

/// Prints `value` rounded to `digits` significant digits in plain decimal
/// notation, without trailing zeros.
fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", digits.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let all_digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = all_digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    // Number of digits in front of the decimal point
    let point = exponent + 1;
    let body = if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let point = point as usize;
        if point >= digits.len() {
            format!("{digits}{}", "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };
    format!("{sign}{body}")
}
