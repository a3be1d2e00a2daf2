//! Launch settings for the gallery.
//!
//! Parsed from the command line in `main` before the window opens, then read
//! by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! context::init_settings(settings);
//!
//! // In App
//! let settings = use_hook(context::settings);
//! ```

use std::sync::OnceLock;

use imagegrid_core::GridConfig;

/// Global settings, set once from command line args
static SETTINGS: OnceLock<DemoSettings> = OnceLock::new();

/// How the gallery's grid is configured
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSettings {
    pub config: GridConfig,
    pub multiple: bool,
    pub max: Option<usize>,
    pub disabled: bool,
    pub placeholder: Option<String>,
    pub show_upload_progress: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            config: GridConfig::default(),
            multiple: false,
            max: None,
            disabled: false,
            placeholder: None,
            show_upload_progress: true,
        }
    }
}

/// Store the launch settings. Later calls are ignored.
pub fn init_settings(settings: DemoSettings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("Settings already initialized");
    }
}

/// Launch settings, or defaults when `init_settings` was never called
pub fn settings() -> DemoSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}
