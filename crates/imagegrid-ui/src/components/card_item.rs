//! Card Item Component
//!
//! One uploaded image in the grid: the thumbnail plus a hover mask carrying
//! the preview and remove actions.

use dioxus::prelude::*;
use imagegrid_core::{mask_click_forwards, GridConfig, UploadFile};

use super::icons::IconSet;

/// Payload of the remove action
#[derive(Clone)]
pub struct RemoveEvent {
    /// The originating click, already stopped from propagating
    pub event: MouseEvent,
    /// The file whose remove action was clicked
    pub file: UploadFile,
    /// Its position in the grid
    pub index: usize,
}

/// Payload of the preview action
#[derive(Clone)]
pub struct ImgPreviewEvent {
    /// The originating click, already stopped from propagating
    pub event: MouseEvent,
    /// The file to preview
    pub file: UploadFile,
}

/// Properties for the CardItem component
#[derive(Clone, PartialEq, Props)]
pub struct CardItemProps {
    /// The file shown by this tile
    pub file: UploadFile,
    /// Position of the file in the grid
    pub index: usize,
    /// Whether the grid currently shows its trigger tile
    pub show_trigger: bool,
    /// Hides the remove action
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub config: GridConfig,
    #[props(default)]
    pub icons: IconSet,
    /// Mask click, forwarded only when there is no trigger tile
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub on_remove: Option<EventHandler<RemoveEvent>>,
    #[props(default)]
    pub on_img_preview: Option<EventHandler<ImgPreviewEvent>>,
}

/// A thumbnail tile with preview and remove actions
///
/// # Design Notes
///
/// - Actions stop propagation so the mask's own click does not also fire
/// - The remove action and its divider are not rendered while disabled
/// - Clicking the mask re-triggers an upload only when no trigger tile is
///   visible (the single-slot case)
#[component]
pub fn CardItem(props: CardItemProps) -> Element {
    let config = &props.config;
    let item_class = format!(
        "{} {}",
        config.element_class("card-item"),
        config.background_class()
    );
    let content_class = format!(
        "{} {}",
        config.element_class("card-content"),
        config.element_class("card-box")
    );
    let image_class = config.element_class("card-image");
    let mask_class = config.element_class("card-mask");
    let mask_item_class = config.element_class("card-mask-item");
    let divider_class = config.element_class("card-mask-item-divider");

    let url = props.file.url.clone();
    let alt = props.file.name.clone().unwrap_or_default();
    let index = props.index;
    let show_trigger = props.show_trigger;

    let onclick = props.onclick;
    let on_remove = props.on_remove;
    let on_img_preview = props.on_img_preview;
    let preview_file = props.file.clone();
    let remove_file = props.file.clone();

    rsx! {
        li { class: "{item_class}",
            div { class: "{content_class}",
                img { class: "{image_class}", src: "{url}", alt: "{alt}" }
                div {
                    class: "{mask_class}",
                    onclick: move |evt: MouseEvent| {
                        if !mask_click_forwards(show_trigger) {
                            return;
                        }
                        tracing::debug!(index, "Mask click re-triggers upload");
                        if let Some(handler) = &onclick {
                            handler.call(evt);
                        }
                    },
                    span {
                        class: "{mask_item_class}",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            tracing::debug!(index, "Preview requested");
                            if let Some(handler) = &on_img_preview {
                                handler.call(ImgPreviewEvent {
                                    event: evt,
                                    file: preview_file.clone(),
                                });
                            }
                        },
                        {props.icons.browse()}
                    }
                    if !props.disabled {
                        span { class: "{divider_class}" }
                        span {
                            class: "{mask_item_class}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                tracing::debug!(index, "Remove requested");
                                if let Some(handler) = &on_remove {
                                    handler.call(RemoveEvent {
                                        event: evt,
                                        file: remove_file.clone(),
                                        index,
                                    });
                                }
                            },
                            {props.icons.delete()}
                        }
                    }
                }
            }
        }
    }
}
