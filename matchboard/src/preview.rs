//! Image previews for file inputs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pagedom::{Element, find_element_mut};

/// A file picked in a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// `data:` URL for a file's contents. Unknown types are sent as
/// `application/octet-stream`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Point the `<input_id>_preview` element at the selected file, or back at
/// its `data-default` image when the selection was cleared. Returns false
/// if there is no preview element.
pub fn update_file_preview(root: &mut Element, input_id: &str, file: Option<&SelectedFile>) -> bool {
    let preview_id = format!("{input_id}_preview");
    let Some(preview) = find_element_mut(root, &preview_id) else {
        return false;
    };

    match file {
        Some(file) => {
            log::trace!("[preview] {} -> {} ({} bytes)", preview_id, file.name, file.bytes.len());
            preview.set_attr("src", data_url(&file.mime, &file.bytes));
        }
        None => match preview.get_attr("data-default").map(str::to_string) {
            Some(default) => preview.set_attr("src", default),
            None => {
                preview.remove_attr("src");
            }
        },
    }
    true
}
