//! Custom error types for the application.
//!
//! - [`BindError`] - Acquiring page elements and registering listeners
//! - [`ReadError`] - Reading a dropped file into a data URI
//! - [`PreviewError`] - Building or filling a preview thumbnail
//! - [`ConfigError`] - Parsing the page's element id override
//!
//! None of these reach the user: callers log them to the console and skip.

use thiserror::Error;

/// Errors raised while binding a controller to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Browser document not available
    #[error("Browser document not available")]
    NoDocument,
    /// No element with the configured id
    #[error("Element #{0} not found")]
    MissingElement(String),
    /// Element exists but has the wrong type
    #[error("Element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },
    /// `addEventListener` threw
    #[error("Failed to register {0} listener")]
    ListenerFailed(&'static str),
}

/// Errors raised while reading a dropped file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The blob read promise rejected
    #[error("File read rejected: {0}")]
    Rejected(String),
    /// The read resolved to something other than an ArrayBuffer
    #[error("File read did not produce a buffer")]
    NotABuffer,
}

/// Errors raised while rendering a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// Creating or attaching the image element failed
    #[error("Failed to create thumbnail: {0}")]
    Thumbnail(String),
    /// The file could not be read
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The override block is not valid JSON for [`crate::config::ElementIds`]
    #[error("Invalid config: {0}")]
    Parse(String),
}
