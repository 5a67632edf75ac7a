//! FX (Foreign Exchange) module - currencies, the fixed rate table and conversion.

mod amount;
mod currency;
mod currency_converter;
mod rate_table;

pub use amount::{parse_amount, Amount};
pub use currency::Currency;
pub use currency_converter::{convert, CurrencyConverter};
pub use rate_table::RateTable;
