//! Typed HTTP client for the ReelScan device setup API.
//!
//! This crate provides:
//! - [`SetupClient`] — one method per device endpoint, typed against
//!   `reelscan-models`
//! - [`ScanAreaWriter`] — debounced persistence of scan-area edits while a
//!   drag is in progress
//! - Typed errors separating transport failures from API error responses
//!   and detection misses

pub mod client;
pub mod error;
pub mod writer;

pub use client::SetupClient;
pub use error::{ClientError, ClientResult, DetectError};
pub use writer::ScanAreaWriter;
