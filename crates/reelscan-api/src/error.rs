//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use reelscan_models::NormalizedPoint;

use crate::camera::CameraError;
use crate::detector::DetectorError;
use crate::store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Nonstandard status for a perforation-detection miss. The setup UI
/// dispatches on exactly this code to tell a miss apart from real errors.
const STATUS_DETECTION_FAILED: u16 = 420;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Detection miss; the response echoes the seed point so the caller can
    /// tell a failed autodetect from a failed manual seed.
    #[error("Could not detect perforation hole")]
    DetectionFailed { seed: NormalizedPoint },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DetectionFailed { .. } => StatusCode::from_u16(STATUS_DETECTION_FAILED)
                .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            ApiError::Internal(_) | ApiError::Camera(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::DuplicateName(_)) => StatusCode::CONFLICT,
        }
    }
}

impl From<DetectorError> for ApiError {
    fn from(err: DetectorError) -> Self {
        match err {
            DetectorError::NotFound { seed } => ApiError::DetectionFailed { seed },
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // a detection miss echoes the seed, not an error message
        if let ApiError::DetectionFailed { seed } = &self {
            return (status, Json(*seed)).into_response();
        }

        // Don't expose internal error details in production
        let msg = match &self {
            ApiError::Internal(_) | ApiError::Camera(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { msg })).into_response()
    }
}
