//! Upload File Records
//!
//! A file the grid displays. Records are owned by the caller and passed in on
//! every render; the grid never mutates them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Lifecycle of a single upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Selected but not yet sent
    Waiting,
    /// Bytes are in flight
    Progress,
    /// Upload finished
    #[default]
    Success,
    /// Upload failed
    Fail,
}

impl UploadStatus {
    /// Lowercase tag used in serialized records and CSS modifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Waiting => "waiting",
            UploadStatus::Progress => "progress",
            UploadStatus::Success => "success",
            UploadStatus::Fail => "fail",
        }
    }
}

/// An uploaded (or uploading) image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadFile {
    /// Display URL for the thumbnail (http(s) URL or data URI)
    pub url: String,
    /// Upload status
    #[serde(default)]
    pub status: UploadStatus,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Per-file progress, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    /// MIME type, e.g. "image/png"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Human readable upload time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_time: Option<String>,
}

impl UploadFile {
    /// A finished upload shown at `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Builder-style status setter
    pub fn with_status(mut self, status: UploadStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder-style name setter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Describe a local file: name, size and a MIME type guessed from the
    /// extension. The URL is left for the caller to fill in once a preview
    /// has been produced.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);

        Ok(Self {
            url: String::new(),
            status: UploadStatus::Waiting,
            name,
            size: Some(meta.len()),
            percent: Some(0.0),
            file_type: mime_for_path(path).map(str::to_string),
            upload_time: None,
        })
    }

    /// True while bytes for this file are in flight
    pub fn is_in_progress(&self) -> bool {
        self.status == UploadStatus::Progress
    }
}

/// Guess an image MIME type from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
