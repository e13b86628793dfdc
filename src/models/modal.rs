//! Modal dialog state types.

use crate::config::{MODAL_DISPLAY_HIDDEN, MODAL_DISPLAY_VISIBLE};

/// Visibility of the modal overlay, stored as its inline `display` style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    /// Overlay hidden (`display: none`)
    #[default]
    Hidden,
    /// Overlay shown
    Visible,
}

impl ModalVisibility {
    /// Read the state from an inline `display` value.
    ///
    /// Anything other than `none` counts as visible.
    pub fn from_display(display: &str) -> Self {
        if display.trim() == MODAL_DISPLAY_HIDDEN {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    /// Inline `display` value representing this state.
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Hidden => MODAL_DISPLAY_HIDDEN,
            Self::Visible => MODAL_DISPLAY_VISIBLE,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Which modal roles a clicked element plays.
///
/// Flags are independent: one element may fill several roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub overlay: bool,
    pub close_button: bool,
    pub wrapper: bool,
    pub trigger: bool,
}

impl ClickTarget {
    /// A click on something the modal does not know about.
    pub const UNRELATED: Self = Self {
        overlay: false,
        close_button: false,
        wrapper: false,
        trigger: false,
    };

    /// Whether the target is one of the dismissing roles.
    pub fn is_dismissal_area(self) -> bool {
        self.overlay || self.close_button || self.wrapper
    }
}
