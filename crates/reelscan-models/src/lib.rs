//! Shared data models for the ReelScan setup stack.
//!
//! This crate provides Serde-serializable types for:
//! - Normalized geometry primitives (points, sizes, rectangles)
//! - Perforation locations and perforation-relative scan areas
//! - Film stock metadata and the built-in format catalogue
//! - Project storage-path entries

pub mod film;
pub mod perforation;
pub mod point;
pub mod project;
pub mod rect;
pub mod scan_area;

// Re-export common types
pub use film::{FilmData, FilmFormat, FilmFormatKey, FilmFormatParseError};
pub use perforation::PerforationLocation;
pub use point::NormalizedPoint;
pub use project::{resolve_path_template, ProjectId, ProjectPathEntry};
pub use rect::{Rect, Size};
pub use scan_area::{RefDelta, ScanArea};
