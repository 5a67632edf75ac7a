use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cryptocalc_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::UnsupportedCurrency(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::UnsupportedLocale(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            },
        };
        tracing::debug!("Request rejected: {}", msg);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
