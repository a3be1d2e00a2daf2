//! Gallery-only components built around the image upload grid.

mod preview_modal;

pub use preview_modal::PreviewModal;
