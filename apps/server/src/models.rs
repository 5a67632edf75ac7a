use cryptocalc_core::{constants::DEFAULT_AMOUNT, Amount, ConversionSnapshot, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiResult;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub name: String,
    /// Value of one BTC in this currency.
    #[schema(value_type = f64)]
    pub rate: Decimal,
}

impl CurrencyInfo {
    pub fn new(currency: Currency, rate: Decimal) -> Self {
        Self {
            code: currency.code().to_string(),
            symbol: currency.symbol().to_string(),
            name: currency.name().to_string(),
            rate,
        }
    }
}

/// Widget state as carried in a query string. Missing fields fall back to
/// the initial state (1 BTC to USD).
#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ConvertQuery {
    pub fn selection(self) -> ApiResult<Selection> {
        Selection::parse(self.amount, self.from, self.to)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
}

impl SwapRequest {
    pub fn selection(self) -> ApiResult<Selection> {
        Selection::parse(
            Some(self.amount),
            Some(self.from_currency),
            Some(self.to_currency),
        )
    }
}

/// Validated amount and currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl Selection {
    fn parse(amount: Option<String>, from: Option<String>, to: Option<String>) -> ApiResult<Self> {
        let from = match from {
            Some(code) => code.parse::<Currency>()?,
            None => Currency::Btc,
        };
        let to = match to {
            Some(code) => code.parse::<Currency>()?,
            None => Currency::Usd,
        };
        Ok(Self {
            amount: amount.unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
            from,
            to,
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
    pub from_currency_name: String,
    pub to_currency_name: String,
    #[schema(value_type = f64)]
    pub result: Amount,
    pub formatted_result: String,
    #[schema(value_type = f64)]
    pub unit_rate: Decimal,
    pub formatted_unit_rate: String,
    pub rate_line: String,
    pub locale: String,
    pub is_animating: bool,
}

impl From<ConversionSnapshot> for ConversionResponse {
    fn from(s: ConversionSnapshot) -> Self {
        Self {
            amount: s.amount,
            from_currency: s.from_currency.code().to_string(),
            to_currency: s.to_currency.code().to_string(),
            from_currency_name: s.from_currency_name,
            to_currency_name: s.to_currency_name,
            result: s.result,
            formatted_result: s.formatted_result,
            unit_rate: s.unit_rate,
            formatted_unit_rate: s.formatted_unit_rate,
            rate_line: s.rate_line,
            locale: s.locale.tag().to_string(),
            is_animating: s.is_animating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use cryptocalc_core::Error as CoreError;

    #[test]
    fn test_missing_fields_fall_back_to_initial_state() {
        let selection = ConvertQuery::default().selection().unwrap();
        assert_eq!(
            selection,
            Selection {
                amount: "1".to_string(),
                from: Currency::Btc,
                to: Currency::Usd,
            }
        );
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let query = ConvertQuery {
            amount: Some("1".to_string()),
            from: Some("XRP".to_string()),
            to: None,
        };
        match query.selection() {
            Err(ApiError::Core(CoreError::UnsupportedCurrency(code))) => assert_eq!(code, "XRP"),
            other => panic!("expected unsupported currency, got {:?}", other),
        }
    }

    #[test]
    fn test_swap_request_keeps_amount_text() {
        let request = SwapRequest {
            amount: "abc".to_string(),
            from_currency: "eth".to_string(),
            to_currency: "brl".to_string(),
        };
        let selection = request.selection().unwrap();
        assert_eq!(selection.amount, "abc");
        assert_eq!(selection.from, Currency::Eth);
        assert_eq!(selection.to, Currency::Brl);
    }
}
