use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D extent, either normalized (1.0 = full frame) or in pixels.
///
/// The pixel form is used as the scale factor when converting normalized
/// geometry to canvas/screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    ///
    /// A size failing this check must not be used as a division scale.
    pub fn is_scalable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle in absolute coordinates.
///
/// Coordinates are normalized or pixel-scaled depending on the caller;
/// the struct itself carries no basis information.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Horizontal extent. Negative when `right < left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent. Negative when `bottom < top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the edges are ordered (`left <= right`, `top <= bottom`).
    pub fn is_ordered(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Whether the rectangle lies entirely within the normalized frame.
    pub fn in_frame(&self) -> bool {
        self.top >= 0.0 && self.left >= 0.0 && self.bottom <= 1.0 && self.right <= 1.0
    }

    /// Whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_scalable() {
        assert!(Size::new(1920.0, 1080.0).is_scalable());
        assert!(!Size::new(0.0, 1080.0).is_scalable());
        assert!(!Size::new(1920.0, 0.0).is_scalable());
        assert!(!Size::new(f64::NAN, 1080.0).is_scalable());
        assert!(!Size::new(f64::INFINITY, 1080.0).is_scalable());
        assert!(!Size::new(-1.0, 1080.0).is_scalable());
    }

    #[test]
    fn test_rect_extents() {
        let r = Rect::new(0.1, 0.7, 0.2, 0.5);
        assert!((r.width() - 0.3).abs() < 1e-12);
        assert!((r.height() - 0.6).abs() < 1e-12);
        assert!(r.is_ordered());
        assert!(r.in_frame());
    }

    #[test]
    fn test_rect_degenerate() {
        // Crossed edges are representable but flagged as unordered
        let r = Rect::new(0.5, 0.2, 0.6, 0.3);
        assert!(r.width() < 0.0);
        assert!(r.height() < 0.0);
        assert!(!r.is_ordered());
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.1, 0.7, 0.2, 0.5);
        assert!(r.contains(0.3, 0.4));
        assert!(r.contains(0.2, 0.1)); // corner, edges inclusive
        assert!(!r.contains(0.19, 0.4));
        assert!(!r.contains(0.3, 0.71));
    }

    #[test]
    fn test_rect_in_frame() {
        assert!(Rect::new(0.0, 1.0, 0.0, 1.0).in_frame());
        assert!(!Rect::new(-0.1, 0.5, 0.0, 0.5).in_frame());
        assert!(!Rect::new(0.0, 0.5, 0.0, 1.2).in_frame());
    }
}
