//! Error types and result alias for the hidsynth crate.
use std::result::Result as StdResult;

use thiserror::Error;

/// Crate-local `Result` alias using the synthesis error type.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while synthesizing or posting events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure creating a CoreGraphics event source.
    #[error("Failed to create CGEventSource")]
    EventSource,
    /// Failure creating a CoreGraphics event.
    #[error("Failed to create CGEvent")]
    EventCreate,
    /// A required permission is missing.
    #[error("Permission denied: {0}")]
    PermissionDenied(&'static str),
    /// The current cursor location could not be read.
    #[error("Failed to read cursor location")]
    CursorLocation,
    /// Warping the cursor failed with the given CGError code.
    #[error("Failed to warp cursor: CGError {0}")]
    Warp(i32),
    /// Event synthesis is only available on macOS.
    #[error("Input synthesis is only supported on macOS")]
    Unsupported,
}
