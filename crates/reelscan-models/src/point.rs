use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in normalized image coordinates (0.0 to 1.0 on each axis).
///
/// Used for pointer positions and perforation-detection seed points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedPoint {
    /// X coordinate (0.0 = left, 1.0 = right)
    pub x: f64,
    /// Y coordinate (0.0 = top, 1.0 = bottom)
    pub y: f64,
}

impl NormalizedPoint {
    /// Reserved detection seed meaning "full automatic detection".
    ///
    /// Any other in-bounds point asks the detector to search near that
    /// location instead.
    pub const AUTO_DETECT: NormalizedPoint = NormalizedPoint { x: 0.0, y: 0.0 };

    /// Create a new normalized point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this point is the automatic-detection sentinel.
    pub fn is_auto_detect(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Check if the point lies within the normalized frame.
    pub fn in_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detect_sentinel() {
        assert!(NormalizedPoint::AUTO_DETECT.is_auto_detect());
        assert!(!NormalizedPoint::new(0.5, 0.5).is_auto_detect());
        assert!(!NormalizedPoint::new(0.0, 0.1).is_auto_detect());
    }

    #[test]
    fn test_in_bounds() {
        assert!(NormalizedPoint::new(0.0, 0.0).in_bounds());
        assert!(NormalizedPoint::new(1.0, 1.0).in_bounds());
        assert!(!NormalizedPoint::new(-0.01, 0.5).in_bounds());
        assert!(!NormalizedPoint::new(0.5, 1.01).in_bounds());
    }

    #[test]
    fn test_serialization() {
        let p = NormalizedPoint::new(0.25, 0.75);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":0.25,"y":0.75}"#);

        let parsed: NormalizedPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}
