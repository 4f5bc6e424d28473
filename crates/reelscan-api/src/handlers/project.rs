//! Project management handlers.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use reelscan_models::{ProjectId, ProjectPathEntry};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Id → name map of all projects on the device.
pub async fn get_all_projects(
    State(state): State<AppState>,
) -> Json<HashMap<ProjectId, String>> {
    Json(state.store.all_projects().await)
}

/// Name of the currently loaded project.
pub async fn get_name(State(state): State<AppState>) -> Json<String> {
    Json(state.store.name().await)
}

/// Rename query payload. The name travels as a query parameter, not a body.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Rename the current project.
pub async fn put_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<String>> {
    let name = query.name.unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::bad_request("Name parameter is empty"));
    }

    let saved = state.store.set_name(name).await?;
    info!(name = %saved, "Project renamed");
    Ok(Json(saved))
}

/// Numeric id of the currently loaded project.
pub async fn get_id(State(state): State<AppState>) -> Json<ProjectId> {
    Json(state.store.id().await)
}

/// All storage-path entries of the current project.
pub async fn get_all_paths(
    State(state): State<AppState>,
) -> Json<HashMap<String, ProjectPathEntry>> {
    Json(state.store.all_paths().await)
}

/// Upsert one storage-path entry; the stored entry comes back with its
/// `${var}` template expanded.
pub async fn put_path(
    State(state): State<AppState>,
    Json(entry): Json<ProjectPathEntry>,
) -> ApiResult<Json<ProjectPathEntry>> {
    if entry.name.is_empty() {
        return Err(ApiError::validation("Path entry name must not be empty"));
    }
    Ok(Json(state.store.upsert_path(entry).await))
}
