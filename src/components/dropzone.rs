//! Image drop zone with thumbnail previews.
//!
//! Dropping files on the drop target previews up to two of them as `<img>`
//! thumbnails inside the preview container. Each thumbnail is attached
//! before its image data is read; the read runs as its own local task and
//! fills in `src` whenever it finishes, so thumbnails from one drop may
//! load in any order. A failed read leaves its thumbnail empty.

use std::rc::Rc;

use js_sys::Reflect;
use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Element, Event, File, HtmlImageElement};

use crate::app::{DropZoneElements, PageContext};
use crate::config::{MAX_DROP_ITEMS, THUMBNAIL_CLASS, THUMBNAIL_FILE_PROPERTY};
use crate::core::error::{BindError, PreviewError};
use crate::core::payload::{accept_images, list_items};
use crate::models::DropSummary;
use crate::utils::{data_uri, dom};

/// Drag-and-drop handlers bound to a drop target and preview container.
pub struct DropZoneController {
    document: web_sys::Document,
    drop_target: Element,
    preview: Element,
}

impl DropZoneController {
    /// Take the drop target and preview container from the context.
    pub fn new(ctx: &PageContext) -> Result<Self, BindError> {
        let DropZoneElements {
            drop_target,
            preview,
        } = ctx.drop_zone.clone()?;
        Ok(Self {
            document: ctx.document.clone(),
            drop_target,
            preview,
        })
    }

    /// Register `dragover` and `drop` listeners.
    pub fn bind(ctx: &PageContext) -> Result<Rc<Self>, BindError> {
        let controller = Rc::new(Self::new(ctx)?);

        dom::listen(&controller.drop_target, "dragover", |event| {
            Self::on_drag_over(&event);
        })?;

        let this = Rc::clone(&controller);
        dom::listen(&controller.drop_target, "drop", move |event| {
            this.on_drop(&event);
        })?;

        Ok(controller)
    }

    /// Keep the browser from opening the dragged file.
    pub fn on_drag_over(event: &Event) {
        event.prevent_default();
    }

    /// Preview the image files among the first entries of a drop.
    pub fn on_drop(&self, event: &Event) -> DropSummary {
        event.prevent_default();

        let Some(items) = event
            .dyn_ref::<DragEvent>()
            .and_then(|e| e.data_transfer())
            .map(|dt| dt.items())
        else {
            return DropSummary::default();
        };

        let offered = items.length();
        let files = accept_images(list_items(&items));
        let summary = DropSummary {
            offered,
            considered: offered.min(MAX_DROP_ITEMS),
            accepted: files.len() as u32,
        };

        log!(
            "drop: {} offered, {} considered, {} accepted, {} skipped",
            summary.offered,
            summary.considered,
            summary.accepted,
            summary.skipped()
        );

        self.preview_image(&files);
        summary
    }

    /// Attach a thumbnail per file and start reading each one.
    ///
    /// Returns the attached thumbnails; their `src` is filled in later.
    pub fn preview_image(&self, files: &[File]) -> Vec<HtmlImageElement> {
        let mut thumbnails = Vec::with_capacity(files.len());

        for file in files {
            let thumbnail = match self.attach_thumbnail(file) {
                Ok(thumbnail) => thumbnail,
                Err(e) => {
                    warn!("{}: {}", file.name(), e);
                    continue;
                }
            };

            let task_thumbnail = thumbnail.clone();
            let task_file = file.clone();
            spawn_local(async move {
                if let Err(e) = load_thumbnail(&task_thumbnail, &task_file).await {
                    warn!("{}: {}", task_file.name(), e);
                }
            });

            thumbnails.push(thumbnail);
        }

        thumbnails
    }

    /// Create an empty thumbnail for `file` and append it to the preview.
    fn attach_thumbnail(&self, file: &File) -> Result<HtmlImageElement, PreviewError> {
        let js_err = |e: wasm_bindgen::JsValue| {
            PreviewError::Thumbnail(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
        };

        let img = self
            .document
            .create_element("img")
            .map_err(js_err)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| PreviewError::Thumbnail("not an image element".to_string()))?;

        img.class_list().add_1(THUMBNAIL_CLASS).map_err(js_err)?;
        Reflect::set(&img, &THUMBNAIL_FILE_PROPERTY.into(), file).map_err(js_err)?;
        self.preview.append_child(&img).map_err(js_err)?;

        Ok(img)
    }
}

/// Read `file` and set it as the thumbnail's source.
///
/// Touches only `thumbnail`, so concurrent loads need no coordination.
pub async fn load_thumbnail(
    thumbnail: &HtmlImageElement,
    file: &File,
) -> Result<(), PreviewError> {
    let uri = data_uri::read_file(file).await?;
    thumbnail.set_src(&uri);
    Ok(())
}
