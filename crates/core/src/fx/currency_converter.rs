use super::amount::{parse_amount, Amount};
use super::currency::Currency;
use super::rate_table::RateTable;
use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Converts amounts between currencies by routing through the base unit of a
/// [`RateTable`].
///
/// Converting never fails. Unparseable text is worth zero. Values too large
/// for exact decimal arithmetic are converted in floating point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyConverter {
    rates: RateTable,
}

impl CurrencyConverter {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Converts the free-text `amount` from one currency to another.
    pub fn convert(&self, amount: &str, from: Currency, to: Currency) -> Amount {
        self.convert_amount(parse_amount(amount), from, to)
    }

    /// `amount / rate[from] * rate[to]`, returning the amount untouched when
    /// both sides are the same currency.
    pub fn convert_amount(
        &self,
        amount: impl Into<Amount>,
        from: Currency,
        to: Currency,
    ) -> Amount {
        let amount = amount.into();
        if from == to {
            return amount;
        }

        if let Amount::Exact(value) = amount {
            let converted = value
                .checked_div(self.rates.rate(from))
                .and_then(|base_value| base_value.checked_mul(self.rates.rate(to)));
            if let Some(converted) = converted {
                return Amount::Exact(converted);
            }
        }

        let from_rate = self.rates.rate(from).to_f64().unwrap_or(0.0);
        let to_rate = self.rates.rate(to).to_f64().unwrap_or(0.0);
        match Amount::from_float(amount.to_f64() / from_rate * to_rate) {
            Some(value) => value,
            None => {
                warn!(
                    "Conversion of {} {} -> {} is not finite, using 0",
                    amount, from, to
                );
                Amount::ZERO
            }
        }
    }

    /// Price of one unit of `from` expressed in `to`.
    pub fn unit_rate(&self, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return Decimal::ONE;
        }
        self.rates
            .rate(to)
            .checked_div(self.rates.rate(from))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Converts `amount` with the simulated rate table.
pub fn convert(amount: &str, from: Currency, to: Currency) -> Amount {
    CurrencyConverter::default().convert(amount, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Amount, expected: Decimal, tolerance: Decimal) {
        let actual = actual.as_decimal().expect("exact result");
        let diff = (actual - expected).abs();
        assert!(
            diff <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    fn assert_relative(actual: Amount, expected: f64) {
        let actual = actual.to_f64();
        assert!(
            ((actual - expected) / expected).abs() < 1e-12,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_btc_to_usd() {
        assert_eq!(convert("1", Currency::Btc, Currency::Usd), dec!(0.000024));
    }

    #[test]
    fn test_usd_to_btc_yields_large_magnitude() {
        let result = convert("100", Currency::Usd, Currency::Btc);
        assert_close(result, dec!(4166666.66666667), dec!(0.00000001));
        assert_eq!(result.as_decimal().map(|d| d.round_dp(2)), Some(dec!(4166666.67)));
    }

    #[test]
    fn test_eth_to_brl() {
        let result = convert("1", Currency::Eth, Currency::Brl);
        assert_close(result, dec!(0.002257), dec!(0.000001));
    }

    #[test]
    fn test_same_currency_is_identity() {
        for currency in Currency::ALL {
            assert_eq!(convert("0.1234", currency, currency), dec!(0.1234));
            assert_eq!(
                convert("1e30", currency, currency),
                Amount::Approximate(1e30)
            );
        }
    }

    #[test]
    fn test_invalid_input_is_zero() {
        for from in Currency::ALL {
            for to in Currency::ALL {
                assert_eq!(convert("", from, to), Amount::ZERO);
                assert_eq!(convert("abc", from, to), Amount::ZERO);
            }
        }
    }

    #[test]
    fn test_round_trip_returns_original_amount() {
        let converter = CurrencyConverter::default();
        let amount = dec!(12.5);
        for from in Currency::ALL {
            for to in Currency::ALL {
                let there = converter.convert_amount(amount, from, to);
                let back = converter.convert_amount(there, to, from);
                assert_close(back, amount, dec!(0.0000000001));
            }
        }
    }

    #[test]
    fn test_unit_rate() {
        let converter = CurrencyConverter::default();
        assert_eq!(converter.unit_rate(Currency::Btc, Currency::Eth), dec!(0.0525));
        assert_eq!(converter.unit_rate(Currency::Usd, Currency::Usd), Decimal::ONE);
        let usd_brl = converter.unit_rate(Currency::Usd, Currency::Brl);
        assert!((usd_brl - dec!(4.9375)).abs() <= dec!(0.0000000001));
    }

    #[test]
    fn test_decimal_overflow_falls_back_to_float() {
        let result = convert("1e26", Currency::Usd, Currency::Btc);
        assert!(matches!(result, Amount::Approximate(_)));
        assert_relative(result, 1e26 / 0.000024);

        let converter = CurrencyConverter::default();
        let result = converter.convert_amount(Decimal::MAX, Currency::Usd, Currency::Btc);
        assert_relative(result, Decimal::MAX.to_f64().unwrap() / 0.000024);
    }

    #[test]
    fn test_amount_beyond_decimal_range_still_converts() {
        let result = convert("1e30", Currency::Btc, Currency::Usd);
        assert!(!result.is_zero());
        assert_relative(result, 2.4e25);
    }

    #[test]
    fn test_float_round_trip_returns_original_amount() {
        let converter = CurrencyConverter::default();
        let there = converter.convert("1e26", Currency::Usd, Currency::Btc);
        let back = converter.convert_amount(there, Currency::Btc, Currency::Usd);
        assert_relative(back, 1e26);
    }

    #[test]
    fn test_non_finite_conversion_degrades_to_zero() {
        let converter = CurrencyConverter::default();
        let result =
            converter.convert_amount(Amount::Approximate(f64::MAX), Currency::Usd, Currency::Btc);
        assert_eq!(result, Amount::ZERO);
    }
}
