//! Camera preview handler.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ApiResult;
use crate::state::AppState;

/// The current preview frame as PNG.
pub async fn get_preview(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let frame = state.camera.preview_frame().await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], frame))
}
