//! Film format and film data handlers.

use axum::extract::State;
use axum::Json;

use reelscan_models::{FilmData, FilmFormat};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The built-in film format catalogue.
pub async fn get_film_formats() -> Json<Vec<FilmFormat>> {
    Json(FilmFormat::builtin())
}

pub async fn get_film_data(State(state): State<AppState>) -> Json<FilmData> {
    Json(state.store.film_data().await)
}

pub async fn put_film_data(
    State(state): State<AppState>,
    Json(data): Json<FilmData>,
) -> ApiResult<Json<FilmData>> {
    if !data.fps.is_finite() || data.fps <= 0.0 {
        return Err(ApiError::validation("Frame rate must be positive"));
    }
    Ok(Json(state.store.set_film_data(data).await))
}
