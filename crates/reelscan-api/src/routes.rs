//! API routes.

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::camera::get_preview;
use crate::handlers::film::{get_film_data, get_film_formats, put_film_data};
use crate::handlers::health::health;
use crate::handlers::perforation::{detect_perforation, get_perf_location, put_perf_location};
use crate::handlers::project::{
    get_all_paths, get_all_projects, get_id, get_name, put_name, put_path,
};
use crate::handlers::scan_area::{get_scan_area, put_scan_area};
use crate::middleware::{cors_layer, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let project_routes = Router::new()
        .route("/projects/all", get(get_all_projects))
        .route("/project/name", get(get_name))
        .route("/project/name", put(put_name))
        .route("/project/id", get(get_id))
        .route("/project/allpaths", get(get_all_paths))
        .route("/project/path", put(put_path));

    let film_routes = Router::new()
        .route("/filmformats", get(get_film_formats))
        .route("/project/filmdata", get(get_film_data))
        .route("/project/filmdata", put(put_film_data));

    let perforation_routes = Router::new()
        .route("/project/perf/location", get(get_perf_location))
        .route("/project/perf/location", put(put_perf_location))
        .route("/project/perf/detect", post(detect_perforation))
        .route("/project/scanarea", get(get_scan_area))
        .route("/project/scanarea", put(put_scan_area));

    let camera_routes = Router::new().route("/camera/preview", get(get_preview));

    let api_routes = Router::new()
        .merge(project_routes)
        .merge(film_routes)
        .merge(perforation_routes)
        .merge(camera_routes);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
