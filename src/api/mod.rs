use crate::core::errors::InferenceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

pub mod chat;

/// Any origin may call the API, with any method and headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[derive(Debug)]
pub struct ApiError(pub InferenceError);

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        let message = match self.0 {
            InferenceError::BackendUnavailable(_) => "inference backend is unavailable",
            InferenceError::BackendError(_) => "inference backend failed to generate a reply",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
