//! Amounts typed into the widget and the values conversion produces.
//!
//! The amount field never reports an error. The longest leading numeric
//! prefix is used (`"12abc"` is 12) and anything without one is zero.
//! Numbers that fit a `Decimal` stay exact; larger (or finer) ones are kept as
//! `f64` so they still convert instead of vanishing.

use log::debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A quantity of some currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    /// Fits the decimal range; arithmetic is exact up to 28 digits.
    Exact(Decimal),
    /// Outside the decimal range; carried as a finite float.
    Approximate(f64),
}

impl Amount {
    pub const ZERO: Amount = Amount::Exact(Decimal::ZERO);

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Exact(d) => Some(*d),
            Amount::Approximate(_) => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Amount::Exact(d) => d.to_f64().unwrap_or(0.0),
            Amount::Approximate(f) => *f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Amount::Exact(d) => d.is_zero(),
            Amount::Approximate(f) => *f == 0.0,
        }
    }

    /// Wraps a float, preferring the exact form when the value fits.
    pub(crate) fn from_float(value: f64) -> Option<Amount> {
        if !value.is_finite() {
            return None;
        }
        Some(match Decimal::from_f64(value) {
            Some(d) => Amount::Exact(d),
            None => Amount::Approximate(value),
        })
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl PartialEq<Decimal> for Amount {
    fn eq(&self, other: &Decimal) -> bool {
        self.as_decimal() == Some(*other)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Exact(d) => write!(f, "{}", d),
            Amount::Approximate(v) => write!(f, "{:e}", v),
        }
    }
}

/// Parses `input` as an amount, degrading to zero when no number can be read.
pub fn parse_amount(input: &str) -> Amount {
    let Some(literal) = NumericLiteral::scan(input) else {
        if !input.trim().is_empty() {
            debug!("Amount '{}' is not a number, using 0", input);
        }
        return Amount::ZERO;
    };

    if let Some(value) = literal.to_decimal() {
        return Amount::Exact(value);
    }

    match literal.text.parse::<f64>().ok().and_then(Amount::from_float) {
        Some(value) => value,
        None => {
            debug!("Amount '{}' is not a finite number, using 0", input);
            Amount::ZERO
        }
    }
}

/// The pieces of a number found at the start of the input.
#[derive(Debug, PartialEq, Eq)]
struct NumericLiteral<'a> {
    text: &'a str,
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> NumericLiteral<'a> {
    fn scan(input: &'a str) -> Option<Self> {
        let s = input.trim_start();
        let bytes = s.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let integer_start = pos;
        pos += count_digits(&bytes[pos..]);
        let integer = &s[integer_start..pos];

        let mut fraction = "";
        if bytes.get(pos) == Some(&b'.') {
            let fraction_start = pos + 1;
            let fraction_len = count_digits(&bytes[fraction_start..]);
            fraction = &s[fraction_start..fraction_start + fraction_len];
            pos = fraction_start + fraction_len;
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        // An exponent only counts when at least one digit follows the marker.
        let mut exponent = None;
        if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
            let mut exp_pos = pos + 1;
            let exp_start = exp_pos;
            if matches!(bytes.get(exp_pos), Some(b'-') | Some(b'+')) {
                exp_pos += 1;
            }
            let exp_digits = count_digits(&bytes[exp_pos..]);
            if exp_digits > 0 {
                exponent = Some(&s[exp_start..exp_pos + exp_digits]);
                pos = exp_pos + exp_digits;
            }
        }

        Some(Self {
            text: &s[..pos],
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    fn to_decimal(&self) -> Option<Decimal> {
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let mantissa = if self.fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, self.fraction)
        };

        let value = match self.exponent {
            Some(exp) => {
                let exp = exp.strip_prefix('+').unwrap_or(exp);
                Decimal::from_scientific(&format!("{}e{}", mantissa, exp)).ok()?
            }
            None => Decimal::from_str(&mantissa).ok()?,
        };

        Some(if self.negative { -value } else { value })
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
