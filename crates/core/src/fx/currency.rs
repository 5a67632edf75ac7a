use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of currencies the calculator converts between.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Btc,
    Eth,
    Usd,
    Brl,
}

impl Currency {
    /// All currencies in display order.
    pub const ALL: [Currency; 4] = [Currency::Btc, Currency::Eth, Currency::Usd, Currency::Brl];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Btc => "₿",
            Currency::Eth => "Ξ",
            Currency::Usd => "$",
            Currency::Brl => "R$",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Btc => "Bitcoin",
            Currency::Eth => "Ethereum",
            Currency::Usd => "US Dollar",
            Currency::Brl => "Real Brasileiro",
        }
    }

    /// Position in the rate table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Currency::Btc => 0,
            Currency::Eth => 1,
            Currency::Usd => 2,
            Currency::Brl => 3,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnsupportedCurrency(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("btc".parse::<Currency>().unwrap(), Currency::Btc);
        assert_eq!(" Eth ".parse::<Currency>().unwrap(), Currency::Eth);
        assert_eq!("BRL".parse::<Currency>().unwrap(), Currency::Brl);
    }

    #[test]
    fn test_parse_rejects_codes_outside_the_set() {
        let err = "DOGE".parse::<Currency>().unwrap_err();
        assert_eq!(err, Error::UnsupportedCurrency("DOGE".to_string()));
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for currency in Currency::ALL {
            assert_eq!(currency.to_string().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_serializes_as_upper_case_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"BRL\"").unwrap();
        assert_eq!(parsed, Currency::Brl);
    }

    #[test]
    fn test_indexes_are_distinct() {
        let mut seen = [false; 4];
        for currency in Currency::ALL {
            assert!(!seen[currency.index()]);
            seen[currency.index()] = true;
        }
    }
}
