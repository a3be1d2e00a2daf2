//! Image Upload Grid Core Library
//!
//! Framework-free model behind the image upload grid widget.
//!
//! ## Overview
//!
//! The grid shows one thumbnail tile per uploaded file followed by an
//! optional "add image" trigger tile. Everything that decides *what* the
//! grid shows lives here, so it can be tested without a renderer:
//!
//! - **Files**: [`UploadFile`] records and their [`UploadStatus`]
//! - **Trigger rules**: [`should_show_trigger`], [`mask_click_forwards`],
//!   [`TriggerState`]
//! - **Captions**: locale overrides resolved against global defaults
//! - **Config**: class names and default texts loaded from JSON
//! - **Thumbnails**: local images turned into data URIs for preview
//!
//! ## Quick Start
//!
//! ```
//! use imagegrid_core::{should_show_trigger, UploadFile};
//!
//! let files = vec![UploadFile::new("data:image/png;base64,AAAA")];
//!
//! // A single-slot uploader hides its trigger once it holds a file
//! assert!(!should_show_trigger(false, None, &files));
//!
//! // A multi uploader capped at 3 still has room
//! assert!(should_show_trigger(true, Some(3), &files));
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod locale;
pub mod thumbnail;
pub mod trigger;

// Re-exports
pub use config::{GlobalUploadText, GridConfig};
pub use error::{GridError, GridResult};
pub use file::{UploadFile, UploadStatus};
pub use locale::{ProgressLocale, TriggerUploadText, UploadLocale};
pub use trigger::{
    display_percent, mask_click_forwards, remaining_slots, should_show_trigger, TriggerState,
};
