//! Crypto Calculator Core - currencies, rates, conversion and the widget view model.
//!
//! This crate is pure and synchronous. It holds no I/O; the server crate
//! renders what it computes.

pub mod calculator;
pub mod constants;
pub mod display;
pub mod errors;
pub mod fx;

pub use calculator::{Calculator, ConversionSnapshot, SwapAnimation};
pub use display::Locale;
pub use fx::{convert, Amount, Currency, CurrencyConverter, RateTable};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
