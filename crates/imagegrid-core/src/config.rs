//! Grid configuration
//!
//! Class names and default texts shared by every grid instance. Passed to the
//! widget explicitly instead of being looked up from ambient state.
//!
//! ```json
//! {
//!   "class_prefix": "t",
//!   "global_upload_text": { "image": "Click to upload" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GridResult;

/// Default texts used when neither a placeholder nor a locale override is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalUploadText {
    /// Label shown next to the progress percentage
    pub uploading_text: String,
    /// Prompt on the idle trigger tile
    pub image: String,
}

impl Default for GlobalUploadText {
    fn default() -> Self {
        Self {
            uploading_text: "Uploading".to_string(),
            image: "Click to upload".to_string(),
        }
    }
}

/// Ambient configuration for the image upload grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Prefix for every generated class name
    pub class_prefix: String,
    /// Class added to the trigger tile while disabled. Derived from the
    /// prefix when unset, see [`GridConfig::disabled_class`].
    pub disabled_status_class: Option<String>,
    /// Fallback texts
    pub global_upload_text: GlobalUploadText,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            class_prefix: "t".to_string(),
            disabled_status_class: None,
            global_upload_text: GlobalUploadText::default(),
        }
    }
}

impl GridConfig {
    /// Parse from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), prefix = %config.class_prefix, "Loaded grid config");
        Ok(config)
    }

    /// Block class of the upload widget, e.g. `t-upload`
    pub fn upload_class(&self) -> String {
        format!("{}-upload", self.class_prefix)
    }

    /// Element class under the upload block, e.g. `t-upload__card-item`
    pub fn element_class(&self, element: &str) -> String {
        format!("{}-upload__{}", self.class_prefix, element)
    }

    /// Tile background modifier, e.g. `t-is--background`
    pub fn background_class(&self) -> String {
        format!("{}-is--background", self.class_prefix)
    }

    /// Small text size class, e.g. `t-size-s`
    pub fn size_s_class(&self) -> String {
        format!("{}-size-s", self.class_prefix)
    }

    /// Disabled status class, e.g. `t-is-disabled`
    pub fn disabled_class(&self) -> String {
        match &self.disabled_status_class {
            Some(class) => class.clone(),
            None => format!("{}-is-disabled", self.class_prefix),
        }
    }

    /// Generic prefixed class, e.g. `t-loading`
    pub fn prefixed(&self, name: &str) -> String {
        format!("{}-{}", self.class_prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_classes() {
        let config = GridConfig::default();
        assert_eq!(config.upload_class(), "t-upload");
        assert_eq!(config.element_class("card-item"), "t-upload__card-item");
        assert_eq!(config.background_class(), "t-is--background");
        assert_eq!(config.size_s_class(), "t-size-s");
        assert_eq!(config.prefixed("loading"), "t-loading");
        assert_eq!(config.disabled_class(), "t-is-disabled");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GridConfig::from_json_str(r#"{"class_prefix":"x","global_upload_text":{"image":"Add"}}"#)
                .unwrap();
        assert_eq!(config.class_prefix, "x");
        assert_eq!(config.disabled_status_class, None);
        assert_eq!(config.disabled_class(), "x-is-disabled");
        assert_eq!(config.global_upload_text.image, "Add");
        assert_eq!(config.global_upload_text.uploading_text, "Uploading");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = GridConfig::from_json_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(GridConfig::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(br#"{"disabled_status_class":"is-off"}"#).unwrap();

        let config = GridConfig::load(&path).unwrap();
        assert_eq!(config.disabled_class(), "is-off");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GridConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::GridError::Io(_)));
    }
}
