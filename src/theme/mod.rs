//! Stylesheet for the gallery and the upload grid.

mod styles;

pub use styles::GLOBAL_STYLES;
