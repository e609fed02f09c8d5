//! Handlers shared by meters, suppliers and price tiers.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
};
use crate::service::{RecordService, Resource};

pub fn routes<T>(service: RecordService<T>) -> Router
where
    T: Resource + Serialize,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route("/:id", get(fetch::<T>).put(update::<T>).delete(remove::<T>))
        .with_state(service)
}

async fn list<T>(State(service): State<RecordService<T>>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Resource + Serialize,
{
    let records = service.list().await?;
    tracing::debug!(resource = T::RESOURCE, count = records.len(), "listed records");
    Ok(Json(records))
}

async fn fetch<T>(
    State(service): State<RecordService<T>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<T>, ApiError>
where
    T: Resource + Serialize,
{
    Ok(Json(service.get(id).await?))
}

async fn create<T>(
    State(service): State<RecordService<T>>,
    ApiJson(dto): ApiJson<T::Dto>,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Resource + Serialize,
{
    let record = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update<T>(
    State(service): State<RecordService<T>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<T::Dto>,
) -> Result<Json<T>, ApiError>
where
    T: Resource + Serialize,
{
    Ok(Json(service.update(id, dto).await?))
}

async fn remove<T>(
    State(service): State<RecordService<T>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError>
where
    T: Resource + Serialize,
{
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
