//! Edge-drag interaction policy.
//!
//! Dragging one edge of the scan-area rectangle is a UI concern layered on
//! top of the converter: this module hit-tests the drag handles and turns
//! pointer movement into a clamped candidate [`Rect`], which the caller then
//! hands to [`rect_to_scan_area`](crate::convert::rect_to_scan_area). All
//! values are in the normalized [0,1] basis.

use reelscan_models::{NormalizedPoint, Rect};

/// One edge of the scan-area rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// An active edge grab: which edge is being dragged and the offset from the
/// pointer to the edge at grab time.
///
/// Applying the offset during the drag keeps the edge from jumping to the
/// pointer position on the first movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub edge: Edge,
    /// Edge coordinate minus pointer coordinate along the drag axis
    pub offset: f64,
}

/// Find the drag handle under the pointer.
///
/// Each edge owns a `handle_size`-thick band directly outside it, spanning
/// the rectangle's extent on the perpendicular axis. Horizontal bands win
/// over vertical ones when the pointer sits in a corner overlap, matching
/// the check order of the interactive editor.
pub fn hit_test(rect: &Rect, pointer: NormalizedPoint, handle_size: f64) -> Option<Grab> {
    let p = pointer;

    if p.x >= rect.left && p.x <= rect.right {
        if p.y >= rect.top - handle_size && p.y <= rect.top {
            return Some(Grab {
                edge: Edge::Top,
                offset: rect.top - p.y,
            });
        }
        if p.y >= rect.bottom && p.y <= rect.bottom + handle_size {
            return Some(Grab {
                edge: Edge::Bottom,
                offset: rect.bottom - p.y,
            });
        }
    } else if p.y >= rect.top && p.y <= rect.bottom {
        if p.x >= rect.left - handle_size && p.x <= rect.left {
            return Some(Grab {
                edge: Edge::Left,
                offset: rect.left - p.x,
            });
        }
        if p.x >= rect.right && p.x <= rect.right + handle_size {
            return Some(Grab {
                edge: Edge::Right,
                offset: rect.right - p.x,
            });
        }
    }

    None
}

/// Clamping rules for interactive edge drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPolicy {
    /// Minimum distance every edge keeps from the frame border
    pub pad_outer: f64,
    /// Minimum distance between opposite edges (smallest scan-area size)
    pub pad_inner: f64,
}

impl Default for DragPolicy {
    fn default() -> Self {
        Self {
            pad_outer: 0.01,
            pad_inner: 0.01,
        }
    }
}

/// Lenient clamp. The bounds can invert when a mirrored edge is pinned at
/// the frame border (`lower > upper`); `f64::clamp` would panic there, this
/// resolves the conflict in favor of the lower bound.
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

impl DragPolicy {
    /// Move the grabbed edge to the pointer position and clamp.
    ///
    /// The moved edge never crosses the opposite edge closer than
    /// `pad_inner` and never leaves `[pad_outer, 1 - pad_outer]`. With
    /// `mirror` (shift-drag) the opposite edge moves in tandem to preserve
    /// the rectangle's size, clamped to the same outer region; the grabbed
    /// edge is then clamped against the mirrored result, so a mirrored drag
    /// may still shrink the rectangle at the frame border.
    pub fn drag_edge(
        &self,
        rect: &Rect,
        grab: &Grab,
        pointer: NormalizedPoint,
        mirror: bool,
    ) -> Rect {
        let mut out = *rect;

        let pos_x = pointer.x + grab.offset;
        let pos_y = pointer.y + grab.offset;

        let width = rect.width();
        let height = rect.height();

        let lo = self.pad_outer;
        let hi = 1.0 - self.pad_outer;

        match grab.edge {
            Edge::Top => {
                if mirror {
                    out.bottom = clamp(pos_y + height, lo, hi);
                }
                out.top = clamp(pos_y, lo, out.bottom - self.pad_inner);
            }
            Edge::Bottom => {
                if mirror {
                    out.top = clamp(pos_y - height, lo, hi);
                }
                out.bottom = clamp(pos_y, out.top + self.pad_inner, hi);
            }
            Edge::Left => {
                if mirror {
                    out.right = clamp(pos_x + width, lo, hi);
                }
                out.left = clamp(pos_x, lo, out.right - self.pad_inner);
            }
            Edge::Right => {
                if mirror {
                    out.left = clamp(pos_x - width, lo, hi);
                }
                out.right = clamp(pos_x, out.left + self.pad_inner, hi);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANDLE: f64 = 0.05;

    fn rect() -> Rect {
        Rect::new(0.2, 0.8, 0.3, 0.7)
    }

    #[test]
    fn test_hit_each_edge() {
        let r = rect();

        let top = hit_test(&r, NormalizedPoint::new(0.5, 0.18), HANDLE).unwrap();
        assert_eq!(top.edge, Edge::Top);
        assert!((top.offset - 0.02).abs() < 1e-12);

        let bottom = hit_test(&r, NormalizedPoint::new(0.5, 0.83), HANDLE).unwrap();
        assert_eq!(bottom.edge, Edge::Bottom);
        assert!((bottom.offset + 0.03).abs() < 1e-12);

        let left = hit_test(&r, NormalizedPoint::new(0.27, 0.5), HANDLE).unwrap();
        assert_eq!(left.edge, Edge::Left);

        let right = hit_test(&r, NormalizedPoint::new(0.73, 0.5), HANDLE).unwrap();
        assert_eq!(right.edge, Edge::Right);
    }

    #[test]
    fn test_hit_misses() {
        let r = rect();
        // interior
        assert!(hit_test(&r, NormalizedPoint::new(0.5, 0.5), HANDLE).is_none());
        // beyond the handle band
        assert!(hit_test(&r, NormalizedPoint::new(0.5, 0.1), HANDLE).is_none());
        // outside the perpendicular extent
        assert!(hit_test(&r, NormalizedPoint::new(0.1, 0.18), HANDLE).is_none());
    }

    #[test]
    fn test_drag_moves_edge_with_grab_offset() {
        let policy = DragPolicy::default();
        let grab = Grab {
            edge: Edge::Top,
            offset: 0.02,
        };

        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(0.5, 0.38), false);
        assert!((out.top - 0.4).abs() < 1e-12);
        // other edges untouched
        assert_eq!(out.bottom, 0.8);
        assert_eq!(out.left, 0.3);
        assert_eq!(out.right, 0.7);
    }

    #[test]
    fn test_drag_respects_inner_padding() {
        let policy = DragPolicy::default();
        let grab = Grab {
            edge: Edge::Top,
            offset: 0.0,
        };

        // try to push the top edge past the bottom edge
        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(0.5, 0.95), false);
        assert!((out.top - (0.8 - policy.pad_inner)).abs() < 1e-12);
        assert!(out.is_ordered());
    }

    #[test]
    fn test_drag_respects_outer_padding() {
        let policy = DragPolicy::default();

        let grab = Grab {
            edge: Edge::Left,
            offset: 0.0,
        };
        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(-0.4, 0.5), false);
        assert!((out.left - policy.pad_outer).abs() < 1e-12);

        let grab = Grab {
            edge: Edge::Right,
            offset: 0.0,
        };
        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(1.4, 0.5), false);
        assert!((out.right - (1.0 - policy.pad_outer)).abs() < 1e-12);
    }

    #[test]
    fn test_mirrored_drag_preserves_size() {
        let policy = DragPolicy::default();
        let grab = Grab {
            edge: Edge::Left,
            offset: 0.0,
        };

        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(0.4, 0.5), true);
        assert!((out.left - 0.4).abs() < 1e-12);
        assert!((out.right - 0.8).abs() < 1e-12);
        assert!((out.width() - rect().width()).abs() < 1e-12);
    }

    #[test]
    fn test_mirrored_drag_clamps_at_border() {
        let policy = DragPolicy::default();
        let grab = Grab {
            edge: Edge::Right,
            offset: 0.0,
        };

        // push right edge far out; mirrored left edge follows but both clamp
        let out = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(1.5, 0.5), true);
        assert!((out.right - (1.0 - policy.pad_outer)).abs() < 1e-12);
        assert!((out.left - (1.5 - rect().width()).clamp(0.0, 1.0 - policy.pad_outer)).abs() < 1e-9);
        assert!(out.is_ordered());
    }

    #[test]
    fn test_drag_output_feeds_converter() {
        use crate::convert::{rect_to_scan_area, scan_area_to_rect};
        use reelscan_models::PerforationLocation;

        let policy = DragPolicy::default();
        let perf = PerforationLocation::new(0.4, 0.6, 0.22, 0.1);
        let grab = Grab {
            edge: Edge::Bottom,
            offset: 0.0,
        };

        let dragged = policy.drag_edge(&rect(), &grab, NormalizedPoint::new(0.5, 0.9), false);
        let sa = rect_to_scan_area(&dragged, &perf);
        assert!(sa.is_valid());
        // converting back reproduces the dragged rect
        let back = scan_area_to_rect(&sa, &perf);
        assert!((back.bottom - dragged.bottom).abs() < 1e-9);
    }
}
