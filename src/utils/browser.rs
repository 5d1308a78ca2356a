//! Thin wrappers over browser APIs used by forms and uploads.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::utils::image::SelectedImage;

/// Show a blocking `window.alert`
pub fn blocking_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::warn!("No window for alert: {}", message),
    }
}

/// Wrap bytes in a `Blob` with the given MIME type
pub fn bytes_to_blob(data: &[u8], mime_type: &str) -> Result<web_sys::Blob, String> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&uint8_array);

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(mime_type);

    web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &blob_options)
        .map_err(|e| format!("Failed to create Blob: {:?}", e))
}

fn file_input(input_id: &str) -> Result<HtmlInputElement, String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    document
        .get_element_by_id(input_id)
        .ok_or("Input not found")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Not an input element".to_string())
}

/// Name, MIME type and size of the file currently picked in `input_id`
pub fn selected_file_info(input_id: &str) -> Result<Option<(String, String, u64)>, String> {
    let input = file_input(input_id)?;
    let file = input.files().and_then(|list| list.get(0));

    Ok(file.map(|f| (f.name(), f.type_(), f.size() as u64)))
}

/// Read the file currently picked in `input_id` into memory
pub async fn read_selected_image(input_id: &str) -> Result<SelectedImage, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let input = file_input(input_id)?;
    let file_list = input.files().ok_or("No files")?;
    let file = file_list.get(0).ok_or("No file selected")?;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file")?;
    let array_buffer: ArrayBuffer = array_buffer.dyn_into().map_err(|_| "Not an ArrayBuffer")?;

    Ok(SelectedImage {
        name: file.name(),
        mime_type: file.type_(),
        data: Uint8Array::new(&array_buffer).to_vec(),
    })
}

/// Reset a file input so picking the same file again fires `onchange`
pub fn clear_file_input(input_id: &str) {
    if let Ok(input) = file_input(input_id) {
        input.set_value("");
    }
}
