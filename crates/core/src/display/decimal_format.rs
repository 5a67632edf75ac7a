use super::locale::Locale;
use crate::constants::{MAX_DISPLAY_FRACTION_DIGITS, MIN_DISPLAY_FRACTION_DIGITS};
use crate::fx::{Amount, Currency};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with the locale's separators, keeping between 2 and 8
/// fractional digits. Digits past the 8th are rounded half away from zero.
pub fn format_decimal(value: Decimal, locale: Locale) -> String {
    format_decimal_with_digits(
        value,
        locale,
        MIN_DISPLAY_FRACTION_DIGITS,
        MAX_DISPLAY_FRACTION_DIGITS,
    )
}

pub fn format_decimal_with_digits(
    value: Decimal,
    locale: Locale,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
) -> String {
    let rounded =
        value.round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    // The sign follows the value, so tiny negatives read "-0,00".
    let negative = value.is_sign_negative() && !value.is_zero();

    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction_digits as usize {
        fraction.push('0');
    }

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(integer, locale.group_separator()));
    if !fraction.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(&fraction);
    }
    out
}

/// Formats a conversion result. Values beyond the decimal range keep their
/// integer digits and show the minimum fraction.
pub fn format_amount(value: Amount, locale: Locale) -> String {
    match value {
        Amount::Exact(value) => format_decimal(value, locale),
        Amount::Approximate(value) => match Decimal::from_f64(value) {
            Some(value) => format_decimal(value, locale),
            None => format_float(value, locale),
        },
    }
}

fn format_float(value: f64, locale: Locale) -> String {
    let integer = if value.abs() < 1.0 {
        "0".to_string()
    } else {
        float_integer_digits(value.abs())
    };

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, locale.group_separator()));
    out.push(locale.decimal_separator());
    out.push_str(&"0".repeat(MIN_DISPLAY_FRACTION_DIGITS as usize));
    out
}

/// Integer digits of a float of at least 1, from its shortest round-trip form.
fn float_integer_digits(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let len = exponent.parse::<usize>().unwrap_or(0) + 1;

    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < len {
        digits.push_str(&"0".repeat(len - digits.len()));
    } else {
        digits.truncate(len);
    }
    digits
}

/// `"₿ 1 BTC = Ξ 0,0525 ETH"`
pub fn format_rate_line(from: Currency, to: Currency, rate: Decimal, locale: Locale) -> String {
    format!(
        "{} 1 {} = {} {} {}",
        from.symbol(),
        from.code(),
        to.symbol(),
        format_decimal(rate, locale),
        to.code()
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
