use super::swap_animation::SwapAnimation;
use crate::constants::DEFAULT_AMOUNT;
use crate::display::{format_amount, format_decimal, format_rate_line, Locale};
use crate::fx::{Amount, Currency, CurrencyConverter, RateTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// View model behind the conversion widget.
///
/// Every mutation recomputes `result` before returning, so the displayed
/// result always matches the current amount and currency selection.
#[derive(Debug, Clone)]
pub struct Calculator {
    converter: CurrencyConverter,
    amount: String,
    from_currency: Currency,
    to_currency: Currency,
    result: Amount,
    animation: SwapAnimation,
}

impl Calculator {
    /// Starts from one BTC converted to USD.
    pub fn new(rates: RateTable) -> Self {
        Self::with_selection(rates, DEFAULT_AMOUNT, Currency::Btc, Currency::Usd)
    }

    pub fn with_selection(
        rates: RateTable,
        amount: impl Into<String>,
        from_currency: Currency,
        to_currency: Currency,
    ) -> Self {
        let mut calculator = Self {
            converter: CurrencyConverter::new(rates),
            amount: amount.into(),
            from_currency,
            to_currency,
            result: Amount::ZERO,
            animation: SwapAnimation::default(),
        };
        calculator.recalculate();
        calculator
    }

    pub fn with_animation(mut self, animation: SwapAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn from_currency(&self) -> Currency {
        self.from_currency
    }

    pub fn to_currency(&self) -> Currency {
        self.to_currency
    }

    pub fn result(&self) -> Amount {
        self.result
    }

    pub fn unit_rate(&self) -> Decimal {
        self.converter.unit_rate(self.from_currency, self.to_currency)
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.recalculate();
    }

    pub fn set_from_currency(&mut self, currency: Currency) {
        self.from_currency = currency;
        self.recalculate();
    }

    pub fn set_to_currency(&mut self, currency: Currency) {
        self.to_currency = currency;
        self.recalculate();
    }

    /// Exchanges the two currencies right away and starts the button rotation.
    pub fn swap(&mut self, now: Instant) {
        std::mem::swap(&mut self.from_currency, &mut self.to_currency);
        self.recalculate();
        self.animation.start(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_active(now)
    }

    pub fn finish_animation(&mut self) {
        self.animation.finish();
    }

    pub fn snapshot(&self, locale: Locale, now: Instant) -> ConversionSnapshot {
        let unit_rate = self.unit_rate();
        ConversionSnapshot {
            amount: self.amount.clone(),
            from_currency: self.from_currency,
            to_currency: self.to_currency,
            from_currency_name: self.from_currency.name().to_string(),
            to_currency_name: self.to_currency.name().to_string(),
            result: self.result,
            formatted_result: format_amount(self.result, locale),
            unit_rate,
            formatted_unit_rate: format_decimal(unit_rate, locale),
            rate_line: format_rate_line(self.from_currency, self.to_currency, unit_rate, locale),
            locale,
            is_animating: self.is_animating(now),
        }
    }

    fn recalculate(&mut self) {
        self.result = self
            .converter
            .convert(&self.amount, self.from_currency, self.to_currency);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(RateTable::simulated())
    }
}

/// Everything the widget shows for one state of the calculator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSnapshot {
    pub amount: String,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub from_currency_name: String,
    pub to_currency_name: String,
    pub result: Amount,
    pub formatted_result: String,
    pub unit_rate: Decimal,
    pub formatted_unit_rate: String,
    pub rate_line: String,
    pub locale: Locale,
    pub is_animating: bool,
}
