//! Camera preview seam.
//!
//! The real device streams frames from its capture camera; the trait only
//! exposes "give me the current frame as PNG". The synthetic implementation
//! renders a film-frame test image so the setup UI has something to align
//! against during development.

use std::io::Cursor;

use async_trait::async_trait;
use image::{GrayImage, ImageFormat};
use thiserror::Error;

use reelscan_models::PerforationLocation;

use crate::detector::FIXTURE_PERFORATION;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Failed to encode preview frame: {0}")]
    Encode(#[from] image::ImageError),
}

/// Preview frame source.
#[async_trait]
pub trait PreviewCamera: Send + Sync {
    /// The current preview frame, PNG-encoded.
    async fn preview_frame(&self) -> Result<Vec<u8>, CameraError>;
}

/// Renders a synthetic film frame: dark film base on the left, a bright
/// perforation hole, and a lighter image area right of the hole's inner
/// edge. The hole position matches the detector fixture so the preview and
/// detection results line up.
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    perforation: PerforationLocation,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32, perforation: PerforationLocation) -> Self {
        Self {
            width,
            height,
            perforation,
        }
    }

    fn render(&self) -> GrayImage {
        let perf = self.perforation;
        let w = self.width as f64;
        let h = self.height as f64;

        GrayImage::from_fn(self.width, self.height, |x, y| {
            let nx = x as f64 / w;
            let ny = y as f64 / h;

            let in_hole = nx >= perf.outer_edge
                && nx <= perf.inner_edge
                && ny >= perf.top_edge
                && ny <= perf.bottom_edge;

            if in_hole {
                image::Luma([235u8]) // light shining through the hole
            } else if nx > perf.inner_edge {
                image::Luma([120u8]) // exposed image area
            } else {
                image::Luma([50u8]) // film base
            }
        })
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new(640, 480, FIXTURE_PERFORATION)
    }
}

#[async_trait]
impl PreviewCamera for SyntheticCamera {
    async fn preview_frame(&self) -> Result<Vec<u8>, CameraError> {
        let frame = self.render();

        let mut buf = Vec::new();
        frame.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_is_png() {
        let camera = SyntheticCamera::default();
        let bytes = camera.preview_frame().await.unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 640);
        assert_eq!(decoded.height(), 480);
    }

    #[test]
    fn test_render_marks_hole_and_image_area() {
        let camera = SyntheticCamera::default();
        let frame = camera.render();

        // center of the fixture hole: x in (0.1, 0.22), y in (0.4, 0.6)
        assert_eq!(frame.get_pixel(102, 240).0[0], 235);
        // image area
        assert_eq!(frame.get_pixel(320, 240).0[0], 120);
        // film base left of the hole
        assert_eq!(frame.get_pixel(10, 240).0[0], 50);
    }
}
