use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{main_lib::AppState, models::CurrencyInfo};

#[utoipa::path(get, path = "/api/v1/currencies", responses((status = 200, body = [CurrencyInfo])))]
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> Json<Vec<CurrencyInfo>> {
    let currencies = state
        .rates
        .entries()
        .map(|(currency, rate)| CurrencyInfo::new(currency, rate))
        .collect();
    Json(currencies)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currencies", get(list_currencies))
}
