//! Root application module.
//!
//! Holds the [`PageContext`] shared by both controllers and the start-up
//! routine that binds them to the host page.

use std::rc::Rc;

use leptos::logging::{log, warn};
use web_sys::{Document, Element, HtmlElement};

use crate::components::{DropZoneController, ModalController};
use crate::config::ElementIds;
use crate::core::error::BindError;
use crate::utils::dom;

// ============================================================================
// Element Handles
// ============================================================================

/// Elements used by the drop zone.
#[derive(Clone, Debug)]
pub struct DropZoneElements {
    pub drop_target: Element,
    pub preview: Element,
}

/// Elements used by the modal.
#[derive(Clone, Debug)]
pub struct ModalElements {
    pub overlay: HtmlElement,
    pub trigger: Element,
    pub close_button: Element,
    pub wrapper: Element,
}

// ============================================================================
// PageContext
// ============================================================================

/// Element handles for both controllers, looked up once.
///
/// Each controller's handles are resolved as a group. A group with a
/// missing element holds the lookup error, so the other controller can
/// still bind.
#[derive(Clone, Debug)]
pub struct PageContext {
    pub document: Document,
    pub ids: ElementIds,
    pub drop_zone: Result<DropZoneElements, BindError>,
    pub modal: Result<ModalElements, BindError>,
}

impl PageContext {
    /// Look up every configured element in `document`.
    pub fn acquire(document: Document, ids: ElementIds) -> Self {
        let drop_zone = Self::acquire_drop_zone(&document, &ids);
        let modal = Self::acquire_modal(&document, &ids);
        Self {
            document,
            ids,
            drop_zone,
            modal,
        }
    }

    /// Context for the current page, with ids from the page's config block.
    pub fn from_page() -> Result<Self, BindError> {
        let document = dom::document().ok_or(BindError::NoDocument)?;
        let ids = ElementIds::load(&document);
        Ok(Self::acquire(document, ids))
    }

    fn acquire_drop_zone(
        document: &Document,
        ids: &ElementIds,
    ) -> Result<DropZoneElements, BindError> {
        Ok(DropZoneElements {
            drop_target: dom::element_by_id(document, &ids.drop_target)?,
            preview: dom::element_by_id(document, &ids.preview)?,
        })
    }

    fn acquire_modal(document: &Document, ids: &ElementIds) -> Result<ModalElements, BindError> {
        Ok(ModalElements {
            overlay: dom::html_element_by_id(document, &ids.overlay)?,
            trigger: dom::element_by_id(document, &ids.trigger)?,
            close_button: dom::element_by_id(document, &ids.close_button)?,
            wrapper: dom::element_by_id(document, &ids.wrapper)?,
        })
    }

    pub fn element(&self, id: &str) -> Result<Element, BindError> {
        dom::element_by_id(&self.document, id)
    }

    pub fn html_element(&self, id: &str) -> Result<HtmlElement, BindError> {
        dom::html_element_by_id(&self.document, id)
    }
}

// ============================================================================
// Start-up
// ============================================================================

/// Controllers bound by [`bind`]; `None` where binding failed.
pub struct BoundControllers {
    pub drop_zone: Option<Rc<DropZoneController>>,
    pub modal: Option<Rc<ModalController>>,
}

/// Bind both controllers independently, logging each outcome.
pub fn bind(ctx: &PageContext) -> BoundControllers {
    let drop_zone = match DropZoneController::bind(ctx) {
        Ok(controller) => {
            log!("dashui: drop zone bound to #{}", ctx.ids.drop_target);
            Some(controller)
        }
        Err(e) => {
            warn!("dashui: drop zone not bound: {}", e);
            None
        }
    };

    let modal = match ModalController::bind(ctx) {
        Ok(controller) => {
            log!("dashui: modal bound to #{}", ctx.ids.overlay);
            Some(controller)
        }
        Err(e) => {
            warn!("dashui: modal not bound: {}", e);
            None
        }
    };

    BoundControllers { drop_zone, modal }
}

/// Bind both controllers to the current page.
///
/// A page hosting only one of the widgets still gets that widget. Failures
/// are logged, never shown.
pub fn start() {
    match PageContext::from_page() {
        Ok(ctx) => {
            bind(&ctx);
        }
        Err(e) => warn!("dashui: {}", e),
    }
}
