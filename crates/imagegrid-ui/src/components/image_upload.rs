//! Image Upload Grid Component
//!
//! Renders the caller's files as thumbnail tiles followed by an optional
//! trigger tile for adding more.

use dioxus::prelude::*;
use imagegrid_core::{should_show_trigger, GridConfig, UploadFile, UploadLocale};

use super::card_item::{CardItem, ImgPreviewEvent, RemoveEvent};
use super::form::use_form_disabled;
use super::icons::IconSet;
use super::upload_trigger::UploadTrigger;

/// Properties for the ImageUpload component
#[derive(Clone, PartialEq, Props)]
pub struct ImageUploadProps {
    /// Uploaded files, in display order
    #[props(default)]
    pub files: Vec<UploadFile>,
    /// File currently being uploaded, if any
    #[props(default)]
    pub loading_file: Option<UploadFile>,
    /// Per-instance text overrides
    #[props(default)]
    pub locale: Option<UploadLocale>,
    /// Upload progress of `loading_file`, 0-100
    #[props(default)]
    pub percent: f64,
    #[props(default = true)]
    pub show_upload_progress: bool,
    /// Prompt on the idle trigger tile
    #[props(default)]
    pub placeholder: Option<String>,
    /// Accept more than one file
    #[props(default = false)]
    pub multiple: bool,
    /// Upper bound on files when `multiple`; `None` or 0 is unbounded
    #[props(default)]
    pub max: Option<usize>,
    #[props(default = false)]
    pub disabled: bool,
    /// Class names and fallback texts
    #[props(default)]
    pub config: GridConfig,
    /// Add / delete / browse icons
    #[props(default)]
    pub icons: IconSet,
    /// Upload trigger (trigger tile, or mask click without a trigger)
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub on_remove: Option<EventHandler<RemoveEvent>>,
    #[props(default)]
    pub on_img_preview: Option<EventHandler<ImgPreviewEvent>>,
}

/// Grid of uploaded images plus an "add image" tile
///
/// # Design Notes
///
/// - Tiles render in the order of `files`; the trigger tile is always last
/// - The trigger disappears once `max` files are present (multiple), or
///   once the single slot is filled
/// - `disabled` (or a disabled enclosing form) hides remove actions
///
/// # Example
///
/// ```rust,ignore
/// let mut files = use_signal(Vec::<UploadFile>::new);
///
/// rsx! {
///     ImageUpload {
///         files: files(),
///         multiple: true,
///         max: Some(4),
///         onclick: move |_| pick_files(),
///         on_remove: move |e: RemoveEvent| {
///             files.write().remove(e.index);
///         },
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(props: ImageUploadProps) -> Element {
    let disabled = use_form_disabled(props.disabled);
    let show_trigger = should_show_trigger(props.multiple, props.max, &props.files);
    let card_class = props.config.element_class("card");

    rsx! {
        ul { class: "{card_class}",
            for (index, file) in props.files.iter().enumerate() {
                CardItem {
                    key: "{index}",
                    file: file.clone(),
                    index,
                    show_trigger,
                    disabled,
                    config: props.config.clone(),
                    icons: props.icons.clone(),
                    onclick: props.onclick,
                    on_remove: props.on_remove,
                    on_img_preview: props.on_img_preview,
                }
            }
            if show_trigger {
                UploadTrigger {
                    loading_file: props.loading_file.clone(),
                    percent: props.percent,
                    show_upload_progress: props.show_upload_progress,
                    placeholder: props.placeholder.clone(),
                    locale: props.locale.clone(),
                    disabled,
                    config: props.config.clone(),
                    icons: props.icons.clone(),
                    onclick: props.onclick,
                }
            }
        }
    }
}
