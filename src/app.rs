use dioxus::prelude::*;
use imagegrid_core::{UploadFile, UploadStatus};
use imagegrid_ui::{FormScope, ImageUpload, ImgPreviewEvent, RemoveEvent};
use rfd::FileDialog;

use crate::context::{settings, DemoSettings};
use crate::gallery::PreviewModal;
use crate::theme::GLOBAL_STYLES;
use crate::upload::{
    admit_picks, apply_upload, pick_allowed, prepare, progress_steps, remove_at, IMAGE_EXTENSIONS,
    PROGRESS_STEP, PROGRESS_TICK,
};

/// Root application component.
///
/// Owns the file list and upload state; the grid only renders it.
#[component]
pub fn App() -> Element {
    let settings: DemoSettings = use_hook(settings);

    let mut files = use_signal(Vec::<UploadFile>::new);
    let mut loading_file = use_signal(|| Option::<UploadFile>::None);
    let mut percent = use_signal(|| 0.0_f64);
    let mut preview = use_signal(|| Option::<UploadFile>::None);
    let mut error = use_signal(|| Option::<String>::None);
    // set from the picker opening until its last upload lands
    let mut busy = use_signal(|| false);
    let mut form_disabled = use_signal(|| settings.disabled);

    let multiple = settings.multiple;
    let max = settings.max;

    let handle_pick = move |_evt: MouseEvent| {
        if !pick_allowed(*busy.peek(), multiple, max, files.peek().len()) {
            tracing::debug!("Picker open, upload in flight or grid full; ignoring click");
            return;
        }
        busy.set(true);
        error.set(None);

        spawn(async move {
            // File picker blocks, so keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                let dialog = FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Select Image");
                if multiple {
                    dialog.pick_files().unwrap_or_default()
                } else {
                    dialog.pick_file().into_iter().collect::<Vec<_>>()
                }
            })
            .await;

            let picks = match picked {
                Ok(picks) => admit_picks(picks, multiple, max, files.peek().len()),
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    error.set(Some(format!("File picker error: {}", e)));
                    busy.set(false);
                    return;
                }
            };

            for path in picks {
                let file = match prepare(path.clone()).await {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("Failed to read {:?}: {:#}", path, e);
                        error.set(Some(format!("Failed to load image: {:#}", e)));
                        continue;
                    }
                };

                loading_file.set(Some(file.clone().with_status(UploadStatus::Progress)));
                for step in progress_steps(PROGRESS_STEP) {
                    percent.set(step);
                    tokio::time::sleep(PROGRESS_TICK).await;
                }

                let mut done = file.with_status(UploadStatus::Success);
                done.percent = Some(100.0);
                tracing::info!(name = ?done.name, size = ?done.size, "Upload finished");
                apply_upload(&mut files.write(), done, multiple);

                loading_file.set(None);
                percent.set(0.0);
            }
            busy.set(false);
        });
    };

    let handle_remove = move |evt: RemoveEvent| {
        if remove_at(&mut files.write(), evt.index).is_some() {
            tracing::info!(index = evt.index, "Removed image");
        }
    };

    let handle_preview = move |evt: ImgPreviewEvent| {
        preview.set(Some(evt.file));
    };

    let count = files.read().len();
    let limit = match (multiple, max) {
        (false, _) => "1".to_string(),
        (true, None | Some(0)) => "\u{221E}".to_string(),
        (true, Some(max)) => max.to_string(),
    };

    rsx! {
        style { {GLOBAL_STYLES} }

        main { class: "gallery",
            header { class: "gallery__header",
                h1 { class: "page-title", "Image Upload Grid" }
                p { class: "gallery__count", "{count} / {limit}" }
                label { class: "gallery__toggle",
                    input {
                        r#type: "checkbox",
                        checked: form_disabled(),
                        onchange: move |e| form_disabled.set(e.checked()),
                    }
                    " disabled"
                }
            }

            FormScope { disabled: form_disabled(),
                ImageUpload {
                    files: files(),
                    loading_file: loading_file(),
                    percent: percent(),
                    show_upload_progress: settings.show_upload_progress,
                    placeholder: settings.placeholder.clone(),
                    multiple,
                    max,
                    config: settings.config.clone(),
                    onclick: handle_pick,
                    on_remove: handle_remove,
                    on_img_preview: handle_preview,
                }
            }

            if let Some(err) = error() {
                div { class: "gallery__error", "\u{26A0} {err}" }
            }

            if let Some(file) = preview() {
                PreviewModal {
                    file,
                    on_close: move |_| preview.set(None),
                }
            }
        }
    }
}
