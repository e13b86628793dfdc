//! Modal dialog controller.
//!
//! The trigger button shows the overlay. Any click on the window that lands
//! on the overlay backdrop, the close button or the content wrapper hides
//! it again, unless that element is also the trigger. The trigger's own
//! click bubbles to the window right after opening, which is why it is
//! excluded.

use std::rc::Rc;

use leptos::logging::warn;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::app::{ModalElements, PageContext};
use crate::core::error::BindError;
use crate::core::modal;
use crate::models::{ClickTarget, ModalVisibility};
use crate::utils::dom;

/// Show/hide handlers for one modal overlay.
pub struct ModalController {
    overlay: HtmlElement,
    trigger: Element,
    close_button: Element,
    wrapper: Element,
}

impl ModalController {
    /// Take the modal's handles and put the overlay in its hidden state.
    pub fn new(ctx: &PageContext) -> Result<Self, BindError> {
        let ModalElements {
            overlay,
            trigger,
            close_button,
            wrapper,
        } = ctx.modal.clone()?;
        let controller = Self {
            overlay,
            trigger,
            close_button,
            wrapper,
        };
        controller.set_visibility(ModalVisibility::Hidden);
        Ok(controller)
    }

    /// Register the trigger and window click listeners.
    pub fn bind(ctx: &PageContext) -> Result<Rc<Self>, BindError> {
        let controller = Rc::new(Self::new(ctx)?);
        let window = dom::window().ok_or(BindError::NoWindow)?;

        let this = Rc::clone(&controller);
        dom::listen(&controller.trigger, "click", move |_| this.open_modal())?;

        let this = Rc::clone(&controller);
        dom::listen(&window, "click", move |event| {
            this.close_on_outside_click(&event);
        })?;

        Ok(controller)
    }

    /// Current state, read from the overlay's inline style.
    pub fn visibility(&self) -> ModalVisibility {
        let display = self
            .overlay
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        ModalVisibility::from_display(&display)
    }

    fn set_visibility(&self, state: ModalVisibility) {
        if let Err(e) = self
            .overlay
            .style()
            .set_property("display", state.display_value())
        {
            warn!("modal: failed to set display: {:?}", e);
        }
    }

    pub fn open_modal(&self) {
        self.set_visibility(modal::on_trigger_click(self.visibility()));
    }

    /// Hide the modal if `event` qualifies as a dismissing click.
    pub fn close_on_outside_click(&self, event: &Event) {
        let current = self.visibility();
        let next = modal::on_window_click(self.classify(event.target().as_ref()), current);
        if next != current {
            self.set_visibility(next);
        }
    }

    /// Match a click target against the modal's elements.
    pub fn classify(&self, target: Option<&EventTarget>) -> ClickTarget {
        ClickTarget {
            overlay: dom::is_same_target(target, &self.overlay),
            close_button: dom::is_same_target(target, &self.close_button),
            wrapper: dom::is_same_target(target, &self.wrapper),
            trigger: dom::is_same_target(target, &self.trigger),
        }
    }
}
