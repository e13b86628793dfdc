//! Data URI encoding and asynchronous file reads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::config::FALLBACK_MIME;
use crate::core::error::ReadError;

/// Encode bytes as a base64 data URI (`data:<mime>;base64,<payload>`).
///
/// An empty MIME type is written as `application/octet-stream`, the same
/// as the browser's own `readAsDataURL`.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read a file's contents and encode them as a data URI.
pub async fn read_file(file: &File) -> Result<String, ReadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ReadError::Rejected(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?
        .dyn_into::<ArrayBuffer>()
        .map_err(|_| ReadError::NotABuffer)?;

    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(encode(&file.type_(), &bytes))
}
