//! Application state.

use std::sync::Arc;

use crate::camera::{PreviewCamera, SyntheticCamera};
use crate::config::ApiConfig;
use crate::detector::{FixtureDetector, PerforationDetector};
use crate::store::{InMemoryProjectStore, ProjectStore};

/// Shared application state: config plus the injected collaborators.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<dyn ProjectStore>,
    pub detector: Arc<dyn PerforationDetector>,
    pub camera: Arc<dyn PreviewCamera>,
}

impl AppState {
    /// Create state from explicit collaborators.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn ProjectStore>,
        detector: Arc<dyn PerforationDetector>,
        camera: Arc<dyn PreviewCamera>,
    ) -> Self {
        Self {
            config,
            store,
            detector,
            camera,
        }
    }

    /// State wired with the fixture collaborators, used by the development
    /// server binary and the API tests.
    pub fn fixture(config: ApiConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryProjectStore::fixture()),
            Arc::new(FixtureDetector::default()),
            Arc::new(SyntheticCamera::default()),
        )
    }
}
