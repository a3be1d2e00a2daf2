//! Preview Modal Component
//!
//! Full-size view of a single uploaded image.

use dioxus::prelude::*;
use imagegrid_core::UploadFile;

/// Preview Modal
///
/// Clicking the backdrop or the close button dismisses it; clicks on the
/// image itself are swallowed.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(file) = preview() {
///         PreviewModal {
///             file,
///             on_close: move |_| preview.set(None),
///         }
///     }
/// }
/// ```
#[component]
pub fn PreviewModal(
    /// The image to show
    file: UploadFile,
    /// Callback when the modal is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let title = file.name.clone().unwrap_or_else(|| "Preview".to_string());
    let details = describe(&file);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content preview-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close-btn",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body",
                    img { class: "preview-modal__image", src: "{file.url}", alt: "{title}" }
                    if !details.is_empty() {
                        p { class: "preview-modal__details", "{details}" }
                    }
                }
            }
        }
    }
}

/// "image/png · 12.3 KB" style summary of whatever metadata is known
fn describe(file: &UploadFile) -> String {
    let mut parts = Vec::new();
    if let Some(mime) = &file.file_type {
        parts.push(mime.clone());
    }
    if let Some(size) = file.size {
        parts.push(format_size(size));
    }
    parts.join(" \u{00B7} ")
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
