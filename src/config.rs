//! Application configuration.
//!
//! Centralizes the constants used by the drop zone and modal controllers,
//! plus the element id table that can be overridden from the host page.

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Drop Zone
// =============================================================================

/// Maximum number of payload entries inspected per drop.
pub const MAX_DROP_ITEMS: u32 = 2;

/// MIME prefix a dropped file must carry to be previewed.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// CSS marker class added to every preview thumbnail.
pub const THUMBNAIL_CLASS: &str = "obj";

/// Property on the thumbnail element that references its source file.
pub const THUMBNAIL_FILE_PROPERTY: &str = "file";

/// MIME type used in data URIs when the browser reports none.
pub const FALLBACK_MIME: &str = "application/octet-stream";

// =============================================================================
// Modal
// =============================================================================

/// Inline `display` value of a visible modal overlay.
pub const MODAL_DISPLAY_VISIBLE: &str = "block";

/// Inline `display` value of a hidden modal overlay.
pub const MODAL_DISPLAY_HIDDEN: &str = "none";

// =============================================================================
// Element Ids
// =============================================================================

/// Id of the optional `<script type="application/json">` block that
/// overrides [`ElementIds`].
pub const CONFIG_ELEMENT_ID: &str = "dashui-config";

/// Default element ids, matching the dashboard page markup.
pub mod default_ids {
    pub const PREVIEW: &str = "uploadPreview";
    pub const DROP_TARGET: &str = "dropZone";
    pub const TRIGGER: &str = "addUser";
    pub const OVERLAY: &str = "userModal";
    pub const CLOSE_BUTTON: &str = "userModalClose";
    pub const WRAPPER: &str = "userModalWrapper";
}

/// DOM ids of every element the controllers bind to.
///
/// Fields missing from a JSON override keep their default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    /// Container receiving thumbnail elements.
    pub preview: String,
    /// Element receiving drag-over and drop events.
    pub drop_target: String,
    /// Button that opens the modal.
    pub trigger: String,
    /// Modal overlay whose display style is toggled.
    pub overlay: String,
    /// Modal close button.
    pub close_button: String,
    /// Modal content wrapper.
    pub wrapper: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            preview: default_ids::PREVIEW.to_string(),
            drop_target: default_ids::DROP_TARGET.to_string(),
            trigger: default_ids::TRIGGER.to_string(),
            overlay: default_ids::OVERLAY.to_string(),
            close_button: default_ids::CLOSE_BUTTON.to_string(),
            wrapper: default_ids::WRAPPER.to_string(),
        }
    }
}

impl ElementIds {
    /// Parse an override table from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load ids from the page's config block, falling back to defaults.
    ///
    /// A malformed block is logged and ignored.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(ids) => ids,
            Err(e) => {
                leptos::logging::warn!("{}; using default element ids", e);
                Self::default()
            }
        }
    }
}
