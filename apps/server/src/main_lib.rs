use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use cryptocalc_core::{Calculator, ConversionSnapshot, Currency, Locale, RateTable, SwapAnimation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Read-only state shared by every request. Each request builds its own
/// [`Calculator`] from it, so nothing here is ever mutated.
pub struct AppState {
    pub rates: RateTable,
    pub locale: Locale,
    pub swap_animation: Duration,
}

impl AppState {
    pub fn calculator(&self, amount: String, from: Currency, to: Currency) -> Calculator {
        Calculator::with_selection(self.rates, amount, from, to)
            .with_animation(SwapAnimation::new(self.swap_animation))
    }

    pub fn snapshot(&self, calculator: &Calculator) -> ConversionSnapshot {
        calculator.snapshot(self.locale, Instant::now())
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("CC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let rates = RateTable::simulated();
    for (currency, rate) in rates.entries() {
        tracing::debug!("Rate for {}: {} per {}", currency, rate, RateTable::BASE);
    }
    tracing::info!(
        "Rendering amounts for locale {} with a {}ms swap animation",
        config.locale,
        config.swap_animation.as_millis()
    );
    Arc::new(AppState {
        rates,
        locale: config.locale,
        swap_animation: config.swap_animation,
    })
}
