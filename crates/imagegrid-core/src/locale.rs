//! Per-instance locale overrides and caption resolution.
//!
//! Texts fall through in priority order and empty strings count as unset, so
//! a caller clearing a field gets the next text rather than a blank caption.

use serde::{Deserialize, Serialize};

use crate::config::GlobalUploadText;
use crate::trigger::display_percent;

/// Progress texts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressLocale {
    pub uploading_text: Option<String>,
}

/// Trigger prompts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerUploadText {
    pub image: Option<String>,
}

/// Texts a single grid instance may override
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLocale {
    pub progress: Option<ProgressLocale>,
    pub trigger_upload_text: Option<TriggerUploadText>,
}

impl UploadLocale {
    /// Locale overriding only the trigger prompt
    pub fn with_image_text(text: impl Into<String>) -> Self {
        Self {
            trigger_upload_text: Some(TriggerUploadText {
                image: Some(text.into()),
            }),
            ..Default::default()
        }
    }

    /// Locale overriding only the uploading text
    pub fn with_uploading_text(text: impl Into<String>) -> Self {
        Self {
            progress: Some(ProgressLocale {
                uploading_text: Some(text.into()),
            }),
            ..Default::default()
        }
    }

    fn uploading_text(&self) -> Option<&str> {
        self.progress.as_ref()?.uploading_text.as_deref()
    }

    fn image_text(&self) -> Option<&str> {
        self.trigger_upload_text.as_ref()?.image.as_deref()
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Prompt on the idle trigger: placeholder, then locale, then global text
pub fn idle_caption<'a>(
    placeholder: Option<&'a str>,
    locale: Option<&'a UploadLocale>,
    global: &'a GlobalUploadText,
) -> &'a str {
    non_empty(placeholder)
        .or_else(|| non_empty(locale.and_then(UploadLocale::image_text)))
        .unwrap_or(global.image.as_str())
}

/// "Uploading" label: locale, then global text
pub fn uploading_text<'a>(
    locale: Option<&'a UploadLocale>,
    global: &'a GlobalUploadText,
) -> &'a str {
    non_empty(locale.and_then(UploadLocale::uploading_text))
        .unwrap_or(global.uploading_text.as_str())
}

/// Full progress caption, e.g. "Uploading 42%"
pub fn progress_caption(
    locale: Option<&UploadLocale>,
    global: &GlobalUploadText,
    percent: f64,
) -> String {
    format!("{} {}%", uploading_text(locale, global), display_percent(percent))
}
