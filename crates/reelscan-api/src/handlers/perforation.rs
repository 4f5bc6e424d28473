//! Perforation location and detection handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use validator::Validate;

use reelscan_geometry::{rect_to_scan_area, scan_area_to_rect};
use reelscan_models::{NormalizedPoint, PerforationLocation, Rect, RefDelta, ScanArea, Size};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Scan-area defaults applied when a perforation is (re)located: the frame
/// starts 0.3 above the reference point and covers 0.6 x 0.5 of the image.
const DEFAULT_REF_DELTA: RefDelta = RefDelta { dx: 0.0, dy: -0.3 };
const DEFAULT_AREA_SIZE: Size = Size {
    width: 0.6,
    height: 0.5,
};

/// Derive the default scan area for a freshly located perforation.
///
/// The default offset/size can stick out of the frame for holes near the
/// frame border; the rect is clamped into [0,1] and converted back, so the
/// stored area is always in-frame.
fn default_scan_area(perf: &PerforationLocation) -> ScanArea {
    let seed = ScanArea::new(DEFAULT_REF_DELTA, DEFAULT_AREA_SIZE);
    let rect = scan_area_to_rect(&seed, perf);

    let clamped = Rect {
        top: rect.top.clamp(0.0, 1.0),
        bottom: rect.bottom.clamp(0.0, 1.0),
        left: rect.left.clamp(0.0, 1.0),
        right: rect.right.clamp(0.0, 1.0),
    };

    rect_to_scan_area(&clamped, perf)
}

/// The stored perforation location.
pub async fn get_perf_location(
    State(state): State<AppState>,
) -> ApiResult<Json<PerforationLocation>> {
    state
        .store
        .perf_location()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Perforation location not set"))
}

/// Store a perforation location and derive its default scan area.
pub async fn put_perf_location(
    State(state): State<AppState>,
    Json(location): Json<PerforationLocation>,
) -> ApiResult<StatusCode> {
    location.validate()?;
    if !location.is_valid() {
        return Err(ApiError::validation(
            "Perforation edges must be vertically ordered",
        ));
    }

    state
        .store
        .set_perforation(location, default_scan_area(&location))
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Run perforation detection and store the result.
pub async fn detect_perforation(
    State(state): State<AppState>,
    Json(seed): Json<NormalizedPoint>,
) -> ApiResult<Json<PerforationLocation>> {
    if !seed.in_bounds() {
        return Err(ApiError::validation("Seed point outside the frame"));
    }

    let location = state.detector.detect(seed).await?;
    info!(
        auto = seed.is_auto_detect(),
        inner_edge = location.inner_edge,
        "Perforation detected"
    );

    state
        .store
        .set_perforation(location, default_scan_area(&location))
        .await;

    Ok(Json(location))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::camera::SyntheticCamera;
    use crate::config::ApiConfig;
    use crate::detector::{DetectorError, MockPerforationDetector, FIXTURE_PERFORATION};
    use crate::store::InMemoryProjectStore;

    fn state_with_detector(detector: MockPerforationDetector) -> AppState {
        AppState::new(
            ApiConfig::default(),
            Arc::new(InMemoryProjectStore::fixture()),
            Arc::new(detector),
            Arc::new(SyntheticCamera::default()),
        )
    }

    #[test]
    fn test_default_scan_area_is_in_frame() {
        // hole close to the bottom border: the default area must clamp
        let perf = PerforationLocation::new(0.85, 0.95, 0.1, 0.02);
        let area = default_scan_area(&perf);

        let rect = scan_area_to_rect(&area, &perf);
        assert!(rect.in_frame());
        assert!(!area.is_degenerate());

        // a comfortably centered hole keeps the nominal defaults
        let centered = PerforationLocation::new(0.4, 0.6, 0.22, 0.1);
        let nominal = default_scan_area(&centered);
        assert!((nominal.ref_delta.dy - (-0.3)).abs() < 1e-12);
        assert!((nominal.size.width - 0.6).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_detect_miss_maps_to_detection_failed() {
        let mut detector = MockPerforationDetector::new();
        detector
            .expect_detect()
            .returning(|seed| Err(DetectorError::NotFound { seed }));

        let state = state_with_detector(detector);
        let seed = NormalizedPoint::new(0.9, 0.9);

        let err = detect_perforation(State(state.clone()), Json(seed))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::DetectionFailed { seed: s } if s == seed));

        // nothing stored on a miss
        assert!(state.store.perf_location().await.is_none());
    }

    #[tokio::test]
    async fn test_detect_success_stores_location_and_default_area() {
        let mut detector = MockPerforationDetector::new();
        detector
            .expect_detect()
            .returning(|_| Ok(FIXTURE_PERFORATION));

        let state = state_with_detector(detector);
        let Json(location) =
            detect_perforation(State(state.clone()), Json(NormalizedPoint::AUTO_DETECT))
                .await
                .unwrap();

        assert_eq!(location, FIXTURE_PERFORATION);
        assert_eq!(state.store.perf_location().await, Some(FIXTURE_PERFORATION));

        let area = state.store.scan_area().await.unwrap();
        assert!(scan_area_to_rect(&area, &FIXTURE_PERFORATION).in_frame());
    }

    #[tokio::test]
    async fn test_out_of_bounds_seed_rejected_without_detector_call() {
        // no expectation set: a detector call would panic the test
        let state = state_with_detector(MockPerforationDetector::new());

        let err = detect_perforation(State(state), Json(NormalizedPoint::new(1.5, 0.5)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
