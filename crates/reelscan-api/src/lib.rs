//! Axum HTTP setup API for the ReelScan device.
//!
//! This crate provides:
//! - The project/film/perforation/scan-area REST contract of the setup UI
//! - Injected collaborators behind traits: [`store::ProjectStore`],
//!   [`detector::PerforationDetector`], [`camera::PreviewCamera`]
//! - Fixture implementations wired up by the development server binary

pub mod camera;
pub mod config;
pub mod detector;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use camera::{CameraError, PreviewCamera, SyntheticCamera};
pub use config::ApiConfig;
pub use detector::{DetectorError, FixtureDetector, PerforationDetector};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
pub use store::{InMemoryProjectStore, ProjectStore, StoreError};
