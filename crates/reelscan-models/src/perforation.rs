use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::point::NormalizedPoint;

/// Bounding box of a detected sprocket hole, in normalized coordinates.
///
/// `inner_edge`/`outer_edge` are horizontal (x) bounds, `top_edge`/
/// `bottom_edge` vertical (y) bounds, all as fractions of frame width and
/// height. The inner edge is the side facing the image area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PerforationLocation {
    /// Upper y bound of the hole (0.0 = frame top)
    #[validate(range(min = 0.0, max = 1.0))]
    pub top_edge: f64,
    /// Lower y bound of the hole
    #[validate(range(min = 0.0, max = 1.0))]
    pub bottom_edge: f64,
    /// X bound on the image side of the hole
    #[validate(range(min = 0.0, max = 1.0))]
    pub inner_edge: f64,
    /// X bound on the film-edge side of the hole
    #[validate(range(min = 0.0, max = 1.0))]
    pub outer_edge: f64,
}

impl PerforationLocation {
    /// Create a new perforation location.
    pub fn new(top_edge: f64, bottom_edge: f64, inner_edge: f64, outer_edge: f64) -> Self {
        Self {
            top_edge,
            bottom_edge,
            inner_edge,
            outer_edge,
        }
    }

    /// The anchor point scan areas are offset from: the inner edge at the
    /// vertical center of the hole.
    ///
    /// This is the single place the anchor is derived; it is never stored,
    /// so a redetected perforation cannot drift from a stale copy.
    pub fn reference_point(&self) -> NormalizedPoint {
        NormalizedPoint {
            x: self.inner_edge,
            y: (self.top_edge + self.bottom_edge) / 2.0,
        }
    }

    /// Check that all edges are in range and vertically ordered.
    pub fn is_valid(&self) -> bool {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        in_range(self.top_edge)
            && in_range(self.bottom_edge)
            && in_range(self.inner_edge)
            && in_range(self.outer_edge)
            && self.top_edge <= self.bottom_edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point() {
        let perf = PerforationLocation::new(0.4, 0.6, 0.22, 0.1);
        let r = perf.reference_point();
        assert!((r.x - 0.22).abs() < 1e-12);
        assert!((r.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reference_point_ignores_outer_edge() {
        let a = PerforationLocation::new(0.4, 0.6, 0.22, 0.1);
        let b = PerforationLocation::new(0.4, 0.6, 0.22, 0.95);
        assert_eq!(a.reference_point(), b.reference_point());
    }

    #[test]
    fn test_is_valid() {
        assert!(PerforationLocation::new(0.4, 0.6, 0.22, 0.1).is_valid());
        // inverted vertical bounds
        assert!(!PerforationLocation::new(0.6, 0.4, 0.22, 0.1).is_valid());
        // out of range
        assert!(!PerforationLocation::new(0.4, 1.2, 0.22, 0.1).is_valid());
    }

    #[test]
    fn test_wire_format() {
        let perf = PerforationLocation::new(0.4, 0.6, 0.22, 0.1);
        let json = serde_json::to_value(&perf).unwrap();
        assert_eq!(json["top_edge"], 0.4);
        assert_eq!(json["bottom_edge"], 0.6);
        assert_eq!(json["inner_edge"], 0.22);
        assert_eq!(json["outer_edge"], 0.1);
    }
}
