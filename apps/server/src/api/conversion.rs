use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ConversionResponse, ConvertQuery, SwapRequest},
};

#[utoipa::path(
    get,
    path = "/api/v1/convert",
    params(ConvertQuery),
    responses((status = 200, body = ConversionResponse), (status = 400, description = "Unsupported currency"))
)]
pub async fn convert_amount(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
) -> ApiResult<Json<ConversionResponse>> {
    let selection = query.selection()?;
    let calculator = state.calculator(selection.amount, selection.from, selection.to);
    Ok(Json(state.snapshot(&calculator).into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/calculator/swap",
    request_body = SwapRequest,
    responses((status = 200, body = ConversionResponse), (status = 400, description = "Unsupported currency"))
)]
pub async fn swap_currencies(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SwapRequest>,
) -> ApiResult<Json<ConversionResponse>> {
    let selection = payload.selection()?;
    let mut calculator = state.calculator(selection.amount, selection.from, selection.to);
    let now = Instant::now();
    calculator.swap(now);
    tracing::debug!(
        "Swapped to {} -> {}",
        calculator.from_currency(),
        calculator.to_currency()
    );
    Ok(Json(calculator.snapshot(state.locale, now).into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/convert", get(convert_amount))
        .route("/calculator/swap", post(swap_currencies))
}
