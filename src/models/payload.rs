//! Drag payload types.

/// Kind of a drag payload entry, as reported by `DataTransferItem.kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A file entry
    File,
    /// Plain or other string data
    String,
}

impl ItemKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "file" => Self::File,
            _ => Self::String,
        }
    }
}

/// Counts describing one handled drop, for console diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropSummary {
    /// Entries present in the payload
    pub offered: u32,
    /// Entries inspected (capped)
    pub considered: u32,
    /// Image files handed to the preview
    pub accepted: u32,
}

impl DropSummary {
    pub fn skipped(&self) -> u32 {
        self.offered - self.accepted
    }
}
