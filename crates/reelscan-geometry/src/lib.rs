//! Scan-area geometry for the ReelScan setup stack.
//!
//! Provides deterministic, reversible conversion between the
//! perforation-relative [`ScanArea`](reelscan_models::ScanArea) wire format
//! and absolute [`Rect`](reelscan_models::Rect)s used for rendering and
//! interactive dragging, at arbitrary display scale and device-pixel-ratio.
//!
//! # Key Concepts
//!
//! ## Reference point
//! Every scan area is anchored at the perforation reference point: the
//! hole's inner edge at its vertical center. All conversions factor through
//! [`PerforationLocation::reference_point`](reelscan_models::PerforationLocation::reference_point),
//! so the anchor definition lives in exactly one place.
//!
//! ## Scale as a separate step
//! A scan area stays normalized; pixel scale is applied as a separate
//! multiplicative step. The same stored area therefore renders at any
//! display resolution (including high-DPI canvases) without re-deriving
//! geometry.
//!
//! ## Dragging
//! Interactive edge dragging is a policy on top of the converter: the
//! [`drag`] module hit-tests handles and clamps candidate rectangles; the
//! converter itself trusts its input and never clamps.

pub mod convert;
pub mod drag;

pub use convert::{
    rect_to_scan_area, scaled_rect_to_scan_area, scan_area_to_rect, scan_area_to_scaled_rect,
    GeometryError,
};
pub use drag::{hit_test, DragPolicy, Edge, Grab};
