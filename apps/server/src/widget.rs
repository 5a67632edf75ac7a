//! Server-rendered conversion widget.
//!
//! The page is a plain GET form: the query string carries the amount and the
//! two currencies, and a `swap` parameter swaps them before rendering. Every
//! field change resubmits the form, so the result shown always matches the
//! inputs.

use std::sync::Arc;
use std::time::Instant;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use cryptocalc_core::{Calculator, Currency};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState, models::ConvertQuery};

#[derive(Deserialize, Debug, Default)]
pub struct WidgetQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub swap: Option<String>,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "index.html")]
pub struct WidgetTemplate {
    pub lang: &'static str,
    pub amount: String,
    pub from_options: Vec<CurrencyOption>,
    pub to_options: Vec<CurrencyOption>,
    pub from_currency_name: String,
    pub to_currency_name: String,
    pub formatted_result: String,
    pub rate_from: String,
    pub rate_to: String,
    pub is_animating: bool,
    pub animation_ms: u128,
}

pub struct CurrencyOption {
    pub code: &'static str,
    pub symbol: &'static str,
    pub selected: bool,
}

impl CurrencyOption {
    fn all(selected: Currency) -> Vec<Self> {
        Currency::ALL
            .into_iter()
            .map(|c| Self {
                code: c.code(),
                symbol: c.symbol(),
                selected: c == selected,
            })
            .collect()
    }
}

impl WidgetTemplate {
    fn from_calculator(state: &AppState, calculator: &Calculator, now: Instant) -> Self {
        let snapshot = calculator.snapshot(state.locale, now);
        let from = snapshot.from_currency;
        let to = snapshot.to_currency;
        Self {
            lang: state.locale.tag(),
            from_options: CurrencyOption::all(from),
            to_options: CurrencyOption::all(to),
            from_currency_name: snapshot.from_currency_name,
            to_currency_name: snapshot.to_currency_name,
            formatted_result: snapshot.formatted_result,
            rate_from: format!("{} 1 {}", from.symbol(), from.code()),
            rate_to: format!(
                "{} {} {}",
                to.symbol(),
                snapshot.formatted_unit_rate,
                to.code()
            ),
            is_animating: snapshot.is_animating,
            animation_ms: state.swap_animation.as_millis(),
            amount: snapshot.amount,
        }
    }
}

pub async fn widget_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WidgetQuery>,
) -> ApiResult<impl IntoResponse> {
    let WidgetQuery {
        amount,
        from,
        to,
        swap,
    } = query;
    let selection = ConvertQuery { amount, from, to }.selection()?;
    let mut calculator = state.calculator(selection.amount, selection.from, selection.to);

    let now = Instant::now();
    if swap.is_some() {
        calculator.swap(now);
    }

    Ok(WidgetTemplate::from_calculator(&state, &calculator, now))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(widget_page))
}
