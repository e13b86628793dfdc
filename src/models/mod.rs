//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ItemKind`], [`DropSummary`] - Drag payload entries and drop results
//! - [`ModalVisibility`], [`ClickTarget`] - Modal dialog state

mod modal;
mod payload;

pub use modal::{ClickTarget, ModalVisibility};
pub use payload::{DropSummary, ItemKind};
