//! Dashboard widgets for the browser.
//!
//! Binds two independent controllers to elements already present in the
//! host page:
//!
//! - [`components::DropZoneController`] - previews dropped images as thumbnails
//! - [`components::ModalController`] - opens and dismisses a modal dialog

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{start, PageContext};
