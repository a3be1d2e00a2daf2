//! Image upload grid components
//!
//! Class names follow the `{prefix}-upload__element` scheme generated by
//! `GridConfig`, so any stylesheet written for that scheme applies.

mod card_item;
mod form;
mod icons;
mod image_upload;
mod loading;
mod upload_trigger;

pub use card_item::*;
pub use form::*;
pub use icons::*;
pub use image_upload::*;
pub use loading::*;
pub use upload_trigger::*;
