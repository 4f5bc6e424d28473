//! Perforation detection seam.
//!
//! Detection itself is an opaque device-side operation (image processing on
//! the camera feed); the API only needs something that answers a seed point
//! with a location or a miss. The fixture implementation reproduces the
//! acceptance behavior of the device: an automatic search always finds the
//! hole, a manual seed only when it points into the film edge region around
//! the hole.

use async_trait::async_trait;
use thiserror::Error;

use reelscan_models::{NormalizedPoint, PerforationLocation};

/// Perforation location used by the fixture detector and the synthetic
/// camera, matching the frame geometry of Super8 stock.
pub const FIXTURE_PERFORATION: PerforationLocation = PerforationLocation {
    top_edge: 0.4,
    bottom_edge: 0.6,
    inner_edge: 0.22,
    outer_edge: 0.1,
};

#[derive(Debug, Error)]
pub enum DetectorError {
    /// No hole found at or near the seed point.
    #[error("Could not detect perforation hole")]
    NotFound { seed: NormalizedPoint },
}

/// Detection seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PerforationDetector: Send + Sync {
    /// Locate the sprocket hole. `NormalizedPoint::AUTO_DETECT` requests a
    /// full-frame search; any other point seeds the search near that
    /// location.
    async fn detect(&self, seed: NormalizedPoint)
        -> Result<PerforationLocation, DetectorError>;
}

/// Fixture detector answering with one fixed location.
pub struct FixtureDetector {
    location: PerforationLocation,
    /// Left margin of the manual-seed acceptance window
    min_seed_x: f64,
}

impl FixtureDetector {
    pub fn new(location: PerforationLocation) -> Self {
        Self {
            location,
            min_seed_x: 0.1,
        }
    }
}

impl Default for FixtureDetector {
    fn default() -> Self {
        Self::new(FIXTURE_PERFORATION)
    }
}

#[async_trait]
impl PerforationDetector for FixtureDetector {
    async fn detect(
        &self,
        seed: NormalizedPoint,
    ) -> Result<PerforationLocation, DetectorError> {
        if seed.is_auto_detect() {
            return Ok(self.location);
        }

        // manual seeds must point into the film edge next to the hole
        let hit = seed.x > self.min_seed_x
            && seed.x < self.location.inner_edge
            && seed.y > self.location.top_edge
            && seed.y < self.location.bottom_edge;

        if hit {
            Ok(self.location)
        } else {
            Err(DetectorError::NotFound { seed })
        }
    }
}
