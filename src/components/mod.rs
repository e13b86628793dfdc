//! DOM controllers bound to existing page elements.
//!
//! - [`DropZoneController`] - Image drag-and-drop previews
//! - [`ModalController`] - Modal dialog show/hide

pub mod dropzone;
pub mod modal;

pub use dropzone::DropZoneController;
pub use modal::ModalController;
