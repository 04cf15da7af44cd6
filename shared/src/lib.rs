//! Shared types for the café menu
//!
//! Domain records, request payloads, error codes and the display rules
//! (price labels, announcement visibility) used by the menu server and its
//! clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
