//! Drop payload filtering.
//!
//! Picks the image files out of a drag payload. The filter is generic over
//! [`PayloadItem`] so the selection rules hold for any payload source; the
//! browser's `DataTransferItem`/`File` pair is one implementation.

use crate::config::{IMAGE_MIME_PREFIX, MAX_DROP_ITEMS};
use crate::models::ItemKind;

/// A file obtained from a payload entry.
pub trait PayloadFile {
    /// MIME type reported for the file (may be empty).
    fn mime_type(&self) -> String;
}

/// One entry of a drag payload.
pub trait PayloadItem {
    type File: PayloadFile;

    fn kind(&self) -> ItemKind;

    /// The entry's file, if it has one.
    fn as_file(&self) -> Option<Self::File>;
}

/// Whether a MIME type names an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// Select the image files among the first [`MAX_DROP_ITEMS`] entries.
///
/// Entries past the cap are never inspected. Non-file entries, entries
/// without a file and non-image files are skipped silently.
pub fn accept_images<I>(items: impl IntoIterator<Item = I>) -> Vec<I::File>
where
    I: PayloadItem,
{
    items
        .into_iter()
        .take(MAX_DROP_ITEMS as usize)
        .filter(|item| item.kind() == ItemKind::File)
        .filter_map(|item| item.as_file())
        .filter(|file| is_image_mime(&file.mime_type()))
        .collect()
}

// ============================================================================
// Browser payload
// ============================================================================

impl PayloadFile for web_sys::File {
    fn mime_type(&self) -> String {
        self.type_()
    }
}

impl PayloadItem for web_sys::DataTransferItem {
    type File = web_sys::File;

    fn kind(&self) -> ItemKind {
        ItemKind::from_kind(&web_sys::DataTransferItem::kind(self))
    }

    fn as_file(&self) -> Option<web_sys::File> {
        self.get_as_file().ok().flatten()
    }
}

/// Iterate over the entries of a browser item list.
pub fn list_items(
    list: &web_sys::DataTransferItemList,
) -> impl Iterator<Item = web_sys::DataTransferItem> + '_ {
    (0..list.length()).filter_map(move |i| list.get(i))
}
