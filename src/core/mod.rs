//! Core widget logic, independent of the DOM bindings.
//!
//! - [`payload`] - Selecting image files from a drag payload
//! - [`modal`] - Modal visibility transitions
//! - [`error`] - Error types

pub mod error;
pub mod modal;
pub mod payload;

pub use payload::{accept_images, PayloadFile, PayloadItem};
