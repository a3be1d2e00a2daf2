//! Upload Trigger Component
//!
//! The trailing "add image" tile. Idle it shows the add icon and a prompt;
//! while a file uploads it shows a spinner and the capped percentage.

use dioxus::prelude::*;
use imagegrid_core::locale::{idle_caption, progress_caption};
use imagegrid_core::{GridConfig, TriggerState, UploadFile, UploadLocale};

use super::icons::IconSet;
use super::loading::Loading;

/// Properties for the UploadTrigger component
#[derive(Clone, PartialEq, Props)]
pub struct UploadTriggerProps {
    /// File currently being uploaded, if any
    #[props(default)]
    pub loading_file: Option<UploadFile>,
    /// Upload progress, 0-100
    #[props(default)]
    pub percent: f64,
    /// Show the progress state while `loading_file` is in flight
    #[props(default = true)]
    pub show_upload_progress: bool,
    /// Prompt overriding every locale text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Per-instance text overrides
    #[props(default)]
    pub locale: Option<UploadLocale>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub config: GridConfig,
    #[props(default)]
    pub icons: IconSet,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// The "add image" tile
#[component]
pub fn UploadTrigger(props: UploadTriggerProps) -> Element {
    let config = &props.config;
    let mut item_class = format!(
        "{} {}",
        config.element_class("card-item"),
        config.background_class()
    );
    if props.disabled {
        item_class.push(' ');
        item_class.push_str(&config.disabled_class());
    }
    let container_class = format!(
        "{} {}",
        config.element_class("card-container"),
        config.element_class("card-box")
    );
    let size_class = config.size_s_class();

    let state = TriggerState::resolve(props.show_upload_progress, props.loading_file.as_ref());
    let caption = match state {
        TriggerState::Progress => progress_caption(
            props.locale.as_ref(),
            &config.global_upload_text,
            props.percent,
        ),
        TriggerState::Idle => idle_caption(
            props.placeholder.as_deref(),
            props.locale.as_ref(),
            &config.global_upload_text,
        )
        .to_string(),
    };

    let disabled = props.disabled;
    let onclick = props.onclick;

    rsx! {
        li {
            class: "{item_class}",
            "aria-disabled": if disabled { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                if disabled {
                    return;
                }
                tracing::debug!("Trigger clicked");
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if state.is_progress() {
                div { class: "{container_class}",
                    Loading { class_prefix: config.class_prefix.clone() }
                    p { "{caption}" }
                }
            } else {
                div { class: "{container_class}",
                    {props.icons.add()}
                    p { class: "{size_class}", "{caption}" }
                }
            }
        }
    }
}
