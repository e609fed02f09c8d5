use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use billing_service::{
    http::{self, ErrorMessage},
    store::Stores,
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    http::router(AppState::new(Stores::in_memory()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_error(app: &Router, method: &str, uri: &str, body: Option<Value>) -> ErrorMessage {
    let (_, bytes) = send(app, method, uri, body).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Meter{load=3, minBill=500}, supplier "Ramesh", tier [0,100] at 3 per unit.
async fn seed(app: &Router) -> (i64, i64) {
    let (status, meter) = send_json(
        app,
        "POST",
        "/api/meters",
        Some(json!({ "loadAmount": 3, "minBillAmount": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, supplier) = send_json(
        app,
        "POST",
        "/api/suppliers",
        Some(json!({ "name": "Ramesh", "supplierType": "Urban" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send_json(
        app,
        "POST",
        "/api/price-per-unit",
        Some(json!({ "unitRangeLower": 0, "unitRangeUpper": 100, "price": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (meter["id"].as_i64().unwrap(), supplier["id"].as_i64().unwrap())
}

fn customer_body(meter_id: i64, supplier_id: i64, connection_date: &str, current: f64) -> Value {
    json!({
        "name": "Rahul",
        "address": "Gurugram",
        "connectionDate": connection_date,
        "lastReading": 100,
        "currentReading": current,
        "meterId": meter_id,
        "supplierId": supplier_id
    })
}

#[tokio::test]
async fn customer_bill_is_consumption_times_tier_price_plus_minimum() {
    let app = app();
    let (meter_id, supplier_id) = seed(&app).await;

    let (status, customer) = send_json(
        &app,
        "POST",
        "/api/customers",
        Some(customer_body(meter_id, supplier_id, "2024-01-01", 150.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(customer["name"], "Rahul");
    assert_eq!(customer["connectionDate"], "2024-01-01");
    assert_eq!(customer["billAmount"].as_f64(), Some(650.0));
    assert_eq!(customer["meterId"].as_i64(), Some(meter_id));

    let id = customer["id"].as_i64().unwrap();
    let (status, bill) = send_json(&app, "GET", &format!("/api/customers/{id}/bill"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bill.as_f64(), Some(650.0));
}

#[tokio::test]
async fn customer_with_only_a_name_is_a_validation_error() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/customers", Some(json!({ "name": "Rahul" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let err = send_error(&app, "POST", "/api/customers", Some(json!({ "name": "Rahul" }))).await;
    assert_eq!(
        err,
        ErrorMessage {
            status: 400,
            message: "Validation error".to_string(),
            details: "uri=/api/customers".to_string(),
        }
    );
}

#[tokio::test]
async fn deleting_an_unknown_meter_is_not_found() {
    let app = app();

    let (status, _) = send(&app, "DELETE", "/api/meters/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let err = send_error(&app, "DELETE", "/api/meters/42", None).await;
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Meter not found with id : '42'");
    assert_eq!(err.details, "uri=/api/meters/42");
}

#[tokio::test]
async fn customer_with_unknown_meter_is_not_found_and_not_stored() {
    let app = app();
    let (_, supplier_id) = seed(&app).await;

    let err = send_error(
        &app,
        "POST",
        "/api/customers",
        Some(customer_body(77, supplier_id, "2024-01-01", 150.0)),
    )
    .await;
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Meter not found with id : '77'");

    let (status, customers) = send_json(&app, "GET", "/api/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customers, json!([]));
}

#[tokio::test]
async fn update_keeps_connection_date_and_recomputes_bill() {
    let app = app();
    let (meter_id, supplier_id) = seed(&app).await;

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/customers",
        Some(customer_body(meter_id, supplier_id, "2024-01-01", 150.0)),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/customers/{id}"),
        Some(customer_body(meter_id, supplier_id, "2031-12-31", 200.0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["connectionDate"], "2024-01-01");
    assert_eq!(updated["billAmount"].as_f64(), Some(800.0));

    let (_, fetched) = send_json(&app, "GET", &format!("/api/customers/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn consumption_outside_every_tier_is_not_found() {
    let app = app();
    let (meter_id, supplier_id) = seed(&app).await;

    let err = send_error(
        &app,
        "POST",
        "/api/customers",
        Some(customer_body(meter_id, supplier_id, "2024-01-01", 250.5)),
    )
    .await;
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Price per unit not found with unit consumed : '150.5'");
}

#[tokio::test]
async fn deleted_supplier_can_no_longer_be_fetched() {
    let app = app();
    let (_, supplier_id) = seed(&app).await;
    let uri = format!("/api/suppliers/{supplier_id}");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn price_tiers_can_be_listed_and_replaced() {
    let app = app();
    seed(&app).await;

    let (status, tiers) = send_json(&app, "GET", "/api/price-per-unit", None).await;
    assert_eq!(status, StatusCode::OK);
    let id = tiers[0]["id"].as_i64().unwrap();
    assert_eq!(tiers[0]["unitRangeUpper"], 100);

    let (status, tier) = send_json(
        &app,
        "PUT",
        &format!("/api/price-per-unit/{id}"),
        Some(json!({ "unitRangeLower": 0, "unitRangeUpper": 500, "price": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tier["id"].as_i64(), Some(id));
    assert_eq!(tier["price"].as_f64(), Some(2.5));
}

#[tokio::test]
async fn malformed_bodies_and_ids_are_bad_requests() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/meters")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/meters",
        Some(json!({ "loadAmount": "three", "minBillAmount": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let err = send_error(&app, "GET", "/api/meters/abc", None).await;
    assert_eq!(err.status, 400);
    assert_eq!(err.details, "uri=/api/meters/abc");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
