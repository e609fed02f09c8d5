use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use billing_client::domain::Customer;

use super::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
};
use crate::{dto::CustomerDto, service::CustomerService};

pub fn routes(service: CustomerService) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(fetch).put(update).delete(remove))
        .route("/:id/bill", get(bill))
        .with_state(service)
}

async fn list(State(service): State<CustomerService>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = service.list().await?;
    tracing::debug!(count = customers.len(), "listed customers");
    Ok(Json(customers))
}

async fn fetch(
    State(service): State<CustomerService>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(service.get(id).await?))
}

async fn create(
    State(service): State<CustomerService>,
    ApiJson(dto): ApiJson<CustomerDto>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update(
    State(service): State<CustomerService>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<CustomerDto>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(service.update(id, dto).await?))
}

async fn remove(
    State(service): State<CustomerService>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::OK)
}

async fn bill(
    State(service): State<CustomerService>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<f64>, ApiError> {
    Ok(Json(service.bill(id).await?))
}
