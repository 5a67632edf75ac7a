//! Core error types for the crypto calculator.
//!
//! Conversion itself never fails: unparseable amounts degrade to zero. The
//! errors here only surface when text from outside the widget (query strings,
//! configuration) has to be turned into one of the closed domain types.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Locale '{0}' is not supported")]
    UnsupportedLocale(String),
}
