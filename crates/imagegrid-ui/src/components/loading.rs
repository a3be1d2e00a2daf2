//! Loading indicator
//!
//! A spinner with optional caption, shown on the trigger tile while a file
//! is uploading.

use dioxus::prelude::*;

/// Properties for the Loading component
#[derive(Clone, PartialEq, Props)]
pub struct LoadingProps {
    /// Class prefix, e.g. "t" gives `t-loading`
    #[props(default = "t".to_string())]
    pub class_prefix: String,
    /// Optional caption rendered under the spinner
    #[props(default)]
    pub text: Option<String>,
}

/// Spinner with optional caption
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Loading { text: Some("Uploading 40%".to_string()) }
/// }
/// ```
#[component]
pub fn Loading(props: LoadingProps) -> Element {
    let prefix = &props.class_prefix;

    rsx! {
        div {
            class: "{prefix}-loading",
            role: "progressbar",
            div { class: "{prefix}-loading__spinner" }
            if let Some(text) = &props.text {
                div { class: "{prefix}-loading__text", "{text}" }
            }
        }
    }
}
