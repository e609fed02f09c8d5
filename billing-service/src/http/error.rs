//! The single place where service errors become HTTP responses.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub status: u16,
    pub message: String,
    /// Request description, `uri=<path>`.
    pub details: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn validation() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match &err {
            BillingError::NotFound { .. } => {
                tracing::debug!(error = %err, "resource not found");
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            BillingError::Validation(violations) => {
                tracing::debug!(?violations, "request failed validation");
                Self::validation()
            }
            BillingError::Store(e) => {
                tracing::error!(error = %e, "unhandled store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "rejected request body");
        Self::validation()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "rejected path parameter");
        Self::validation()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::counter!("http_errors_total", "status" => self.status.as_u16().to_string())
            .increment(1);

        let body = ErrorMessage {
            status: self.status.as_u16(),
            message: self.message,
            details: String::new(),
        };

        let mut response = (self.status, Json(body.clone())).into_response();
        // Picked up by `attach_request_details`, which knows the request path.
        response.extensions_mut().insert(body);
        response
    }
}

/// Fill `details` of error bodies with the path of the request that failed.
pub async fn attach_request_details(request: Request, next: Next) -> Response {
    let details = format!("uri={}", request.uri().path());
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorMessage>() {
        Some(mut body) => {
            body.details = details;
            (response.status(), Json(body)).into_response()
        }
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let err: ApiError = BillingError::not_found_by_id("Customer", 5).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Customer not found with id : '5'");
    }

    #[test]
    fn validation_maps_to_400_with_generic_message() {
        let err: ApiError = BillingError::Validation(vec!["name can't be empty".into()]).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Validation error");
    }

    #[test]
    fn store_failure_maps_to_500_with_fault_message() {
        let store = StoreError::Backend(anyhow::anyhow!("connection refused"));
        let err: ApiError = BillingError::Store(store).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("connection refused"));
    }
}
