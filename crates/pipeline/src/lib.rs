//! Capture-side pipeline.
//!
//! Pulls frames of hand observations from a [`FrameSource`], turns each
//! into a finger total and hands it to the rate-limited publisher, one
//! frame at a time.

pub mod capture;
pub mod config;
pub mod source;

pub use capture::{run_capture_loop, CaptureSummary};
pub use config::{CaptureConfig, SourceLocation};
pub use source::{open_source, Frame, FrameSource, JsonLinesSource, SourceError};
