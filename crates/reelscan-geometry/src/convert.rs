//! Bidirectional conversion between scan areas and rectangles.
//!
//! All four operations are pure and stateless; any number of calls may run
//! concurrently without coordination.

use thiserror::Error;

use reelscan_models::{PerforationLocation, Rect, RefDelta, ScanArea, Size};

/// Geometry conversion errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A scale dimension was zero or non-finite, so the inverse mapping is
    /// not defined.
    #[error("Degenerate scale {width}x{height}: both dimensions must be finite and non-zero")]
    DegenerateScale { width: f64, height: f64 },
}

/// Convert a scan area to an absolute rectangle in the same normalized
/// basis.
///
/// The rectangle's top-left corner is the perforation reference point plus
/// `ref_delta`; width and height follow from `size`. Pure arithmetic, no
/// error conditions.
pub fn scan_area_to_rect(scan_area: &ScanArea, perf: &PerforationLocation) -> Rect {
    let r = perf.reference_point();

    let top = r.y + scan_area.ref_delta.dy;
    let left = r.x + scan_area.ref_delta.dx;
    let bottom = top + scan_area.size.height;
    let right = left + scan_area.size.width;

    Rect {
        top,
        bottom,
        left,
        right,
    }
}

/// Convert a scan area to a pixel rectangle for a display surface of the
/// given pixel size.
///
/// Equivalent to [`scan_area_to_rect`] with each coordinate multiplied by
/// the matching scale dimension (`top`/`bottom` by `scale.height`,
/// `left`/`right` by `scale.width`). `scale` is the current pixel size of
/// the displayed image, already accounting for device pixel ratio.
pub fn scan_area_to_scaled_rect(
    scan_area: &ScanArea,
    perf: &PerforationLocation,
    scale: Size,
) -> Rect {
    let r = scan_area_to_rect(scan_area, perf);

    Rect {
        top: r.top * scale.height,
        bottom: r.bottom * scale.height,
        left: r.left * scale.width,
        right: r.right * scale.width,
    }
}

/// Convert an absolute normalized rectangle back to a scan area relative to
/// the given perforation.
///
/// Exact inverse of [`scan_area_to_rect`] for the same perforation. Edge
/// ordering is NOT validated: a rectangle with crossed edges produces a
/// negative size, which denotes a degenerate area. Interactive callers clamp
/// before converting.
pub fn rect_to_scan_area(rect: &Rect, perf: &PerforationLocation) -> ScanArea {
    let r = perf.reference_point();

    ScanArea {
        ref_delta: RefDelta {
            dx: rect.left - r.x,
            dy: rect.top - r.y,
        },
        size: Size {
            width: rect.right - rect.left,
            height: rect.bottom - rect.top,
        },
    }
}

/// Convert a pixel rectangle back to a scan area.
///
/// Inverse of [`scan_area_to_scaled_rect`]: divides each coordinate by the
/// matching scale dimension, then applies [`rect_to_scan_area`]. A zero or
/// non-finite scale dimension is rejected rather than producing NaN/inf
/// deltas.
pub fn scaled_rect_to_scan_area(
    rect: &Rect,
    perf: &PerforationLocation,
    scale: Size,
) -> Result<ScanArea, GeometryError> {
    if !scale.is_scalable() {
        return Err(GeometryError::DegenerateScale {
            width: scale.width,
            height: scale.height,
        });
    }

    let normalized = Rect {
        top: rect.top / scale.height,
        bottom: rect.bottom / scale.height,
        left: rect.left / scale.width,
        right: rect.right / scale.width,
    };

    Ok(rect_to_scan_area(&normalized, perf))
}
