//! Utility modules for DOM access and file encoding.
//!
//! Provides:
//! - [`dom`] - Element lookup and page-lifetime event listeners
//! - [`data_uri`] - Data URI encoding and async file reads

pub mod data_uri;
pub mod dom;
