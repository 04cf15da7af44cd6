//! Image ingestion pipeline
//!
//! validate → transform → blob store → URL. The record that references the
//! image is written by the caller, and only after the URL exists.

mod pipeline;
mod state;

pub use pipeline::{ImagePipeline, UploadFailure, UploadOutcome, UploadRequest};
pub use state::{InvalidTransition, UploadState, UploadTracker};

/// Upload size cap (5MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Folder used when the form does not name one
pub const DEFAULT_FOLDER: &str = "images";
