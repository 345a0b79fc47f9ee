use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use crate::gateways::GatewayError;

/// Body returned for every failure that is not a missing field.
pub const SERVER_ERROR_MESSAGE: &str = "Sunucu hatası";

#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("Eksik alan: {0}")]
    MissingField(&'static str),

    #[error("request is not multipart form data: {0}")]
    Rejection(#[from] MultipartRejection),

    #[error("malformed form data: {0}")]
    Parse(#[from] MultipartError),

    #[error("failed to format submission time: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("failed to dispatch message: {0}")]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ReserveError {
    fn into_response(self) -> Response {
        if let ReserveError::MissingField(field) = &self {
            warn!("Rejected reservation with missing field: {}", field);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            ).into_response();
        }

        error!("Reservation failed due to: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": SERVER_ERROR_MESSAGE })),
        ).into_response()
    }
}
