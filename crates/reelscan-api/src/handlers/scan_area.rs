//! Scan-area handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use reelscan_geometry::scan_area_to_rect;
use reelscan_models::ScanArea;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The stored scan area. 404 until a perforation has been located, since a
/// scan area is meaningless without its reference.
pub async fn get_scan_area(State(state): State<AppState>) -> ApiResult<Json<ScanArea>> {
    if state.store.perf_location().await.is_none() {
        return Err(ApiError::not_found("No perforation location set"));
    }

    state
        .store
        .scan_area()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Scan area not set"))
}

/// Store a scan area.
///
/// The area must be non-degenerate and, converted against the stored
/// perforation, resolve to a rectangle inside the frame — the interactive
/// editor's clamping guarantees both, so a violation means a broken caller.
pub async fn put_scan_area(
    State(state): State<AppState>,
    Json(scan_area): Json<ScanArea>,
) -> ApiResult<StatusCode> {
    if !scan_area.is_valid() {
        return Err(ApiError::validation("Scan area size must be non-negative"));
    }

    let perf = state
        .store
        .perf_location()
        .await
        .ok_or_else(|| ApiError::not_found("No perforation location set"))?;

    let rect = scan_area_to_rect(&scan_area, &perf);
    if !rect.in_frame() {
        return Err(ApiError::validation("Scan area extends outside the frame"));
    }

    state.store.set_scan_area(scan_area).await;
    Ok(StatusCode::NO_CONTENT)
}
