use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rect::Size;

/// Offset of a scan area's top-left corner from the perforation reference
/// point, in normalized coordinates. `dy` is usually negative (the frame
/// starts above the reference point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RefDelta {
    pub dx: f64,
    pub dy: f64,
}

impl RefDelta {
    /// Create a new reference delta.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// The rectangular region of each frame captured during scanning, expressed
/// relative to the perforation reference point.
///
/// This is the wire format exchanged with the device. The reference point is
/// NOT part of it; it is always recomputed from the perforation location the
/// area belongs to (derived-reference model).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanArea {
    /// Offset from the reference point to the top-left corner
    pub ref_delta: RefDelta,
    /// Normalized width/height of the area
    pub size: Size,
}

impl ScanArea {
    /// Create a new scan area from delta and size.
    pub fn new(ref_delta: RefDelta, size: Size) -> Self {
        Self { ref_delta, size }
    }

    /// Check the stored size is non-negative.
    ///
    /// A degenerate (zero-area) scan area passes; negative sizes denote an
    /// invalid area that callers should have clamped away.
    pub fn is_valid(&self) -> bool {
        self.size.width >= 0.0 && self.size.height >= 0.0
    }

    /// Whether the area has zero (or negative) extent on either axis.
    ///
    /// Degenerate areas are representable but never produced by interactive
    /// resizing, which clamps before converting.
    pub fn is_degenerate(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let sa = ScanArea::new(RefDelta::new(0.1, -0.35), Size::new(0.6, 0.7));
        let json = serde_json::to_value(sa).unwrap();
        assert_eq!(json["ref_delta"]["dx"], 0.1);
        assert_eq!(json["ref_delta"]["dy"], -0.35);
        assert_eq!(json["size"]["width"], 0.6);
        assert_eq!(json["size"]["height"], 0.7);

        let parsed: ScanArea = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sa);
    }

    #[test]
    fn test_validity() {
        assert!(ScanArea::new(RefDelta::new(-0.2, -0.3), Size::new(0.5, 0.5)).is_valid());
        assert!(ScanArea::new(RefDelta::new(0.0, 0.0), Size::new(0.0, 0.5)).is_valid());
        assert!(!ScanArea::new(RefDelta::new(0.0, 0.0), Size::new(-0.1, 0.5)).is_valid());
    }

    #[test]
    fn test_degenerate() {
        assert!(!ScanArea::new(RefDelta::new(0.0, 0.0), Size::new(0.5, 0.5)).is_degenerate());
        assert!(ScanArea::new(RefDelta::new(0.0, 0.0), Size::new(0.0, 0.5)).is_degenerate());
        assert!(ScanArea::new(RefDelta::new(0.0, 0.0), Size::new(0.5, -0.1)).is_degenerate());
    }
}
