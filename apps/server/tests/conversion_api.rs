use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use cryptocalc_core::Locale;
use cryptocalc_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with_locale(locale: Locale) -> Router {
    let config = Config {
        locale,
        ..Config::default()
    };
    app_router(build_state(&config), &config)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn lists_the_four_currencies_in_order() {
    let (status, body) = get_json(app_with_locale(Locale::PtBr), "/api/v1/currencies").await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["BTC", "ETH", "USD", "BRL"]);
    assert_eq!(body[0]["rate"], json!(1.0));
    assert_eq!(body[3]["name"], "Real Brasileiro");
    assert_eq!(body[3]["symbol"], "R$");
}

#[tokio::test]
async fn converts_btc_to_usd() {
    let (status, body) = get_json(
        app_with_locale(Locale::PtBr),
        "/api/v1/convert?amount=1&from=BTC&to=USD",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formattedResult"], "0,000024");
    assert_eq!(body["rateLine"], "₿ 1 BTC = $ 0,000024 USD");
    assert_eq!(body["fromCurrencyName"], "Bitcoin");
    assert_eq!(body["toCurrencyName"], "US Dollar");
    assert_eq!(body["isAnimating"], false);
}

#[tokio::test]
async fn converts_usd_to_btc_without_truncating() {
    let (_, body) = get_json(
        app_with_locale(Locale::EnUs),
        "/api/v1/convert?amount=100&from=usd&to=btc",
    )
    .await;
    assert_eq!(body["formattedResult"], "4,166,666.66666667");
    let result = body["result"].as_f64().unwrap();
    assert!((result - 4_166_666.666_666_67).abs() < 1e-6);
    assert_eq!(body["locale"], "en-US");
}

#[tokio::test]
async fn converts_eth_to_brl() {
    let (_, body) = get_json(
        app_with_locale(Locale::PtBr),
        "/api/v1/convert?amount=1&from=ETH&to=BRL",
    )
    .await;
    let result = body["result"].as_f64().unwrap();
    assert!((result - 0.002257).abs() < 1e-6);
    assert_eq!(body["formattedResult"], "0,00225714");
}

#[tokio::test]
async fn amount_past_decimal_range_is_not_zeroed() {
    let (status, body) = get_json(
        app_with_locale(Locale::PtBr),
        "/api/v1/convert?amount=1e26&from=USD&to=BTC",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let result = body["result"].as_f64().unwrap();
    assert!((result / (1e26 / 0.000024) - 1.0).abs() < 1e-9);
    assert_ne!(body["formattedResult"], "0,00");

    let (_, body) = get_json(
        app_with_locale(Locale::EnUs),
        "/api/v1/convert?amount=1e30&from=BTC&to=USD",
    )
    .await;
    let result = body["result"].as_f64().unwrap();
    assert!((result / 2.4e25 - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn invalid_amount_converts_to_zero() {
    for amount in ["", "abc"] {
        let uri = format!("/api/v1/convert?amount={}&from=ETH&to=USD", amount);
        let (status, body) = get_json(app_with_locale(Locale::PtBr), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["formattedResult"], "0,00");
    }
}

#[tokio::test]
async fn missing_parameters_use_initial_state() {
    let (_, body) = get_json(app_with_locale(Locale::PtBr), "/api/v1/convert").await;
    assert_eq!(body["amount"], "1");
    assert_eq!(body["fromCurrency"], "BTC");
    assert_eq!(body["toCurrency"], "USD");
}

#[tokio::test]
async fn unknown_currency_is_bad_request() {
    let (status, body) = get_json(
        app_with_locale(Locale::PtBr),
        "/api/v1/convert?amount=1&from=DOGE&to=USD",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Currency 'DOGE' is not supported");
}

#[tokio::test]
async fn swap_exchanges_currencies_and_animates() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/calculator/swap")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"amount": "1", "fromCurrency": "BTC", "toCurrency": "ETH"}).to_string(),
        ))
        .unwrap();
    let (status, body) = send(app_with_locale(Locale::PtBr), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fromCurrency"], "ETH");
    assert_eq!(body["toCurrency"], "BTC");
    assert_eq!(body["rateLine"], "Ξ 1 ETH = ₿ 19,04761905 BTC");
    assert_eq!(body["isAnimating"], true);
}
