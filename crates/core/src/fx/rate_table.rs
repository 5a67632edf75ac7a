use super::currency::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Value of one unit of BTC expressed in each currency.
///
/// BTC is the base unit: its entry is always one and every conversion is routed
/// through it, so the table holds one entry per currency instead of one per pair.
/// The table is fixed once built; there is no way to mutate an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    rates: [Decimal; 4],
}

impl RateTable {
    /// Currency every rate is anchored to.
    pub const BASE: Currency = Currency::Btc;

    /// The demonstration rates shipped with the widget. These are not live
    /// market prices.
    pub fn simulated() -> Self {
        let mut rates = [Decimal::ZERO; 4];
        rates[Currency::Btc.index()] = Decimal::ONE;
        rates[Currency::Eth.index()] = dec!(0.0525);
        rates[Currency::Usd.index()] = dec!(0.000024);
        rates[Currency::Brl.index()] = dec!(0.0001185);
        Self { rates }
    }

    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates[currency.index()]
    }

    /// Rates in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Currency, Decimal)> + '_ {
        Currency::ALL.into_iter().map(|c| (c, self.rate(c)))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::simulated()
    }
}
