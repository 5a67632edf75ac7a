//! Locale-aware rendering of amounts and exchange rates.

mod decimal_format;
mod locale;

pub use decimal_format::{
    format_amount, format_decimal, format_decimal_with_digits, format_rate_line,
};
pub use locale::Locale;
