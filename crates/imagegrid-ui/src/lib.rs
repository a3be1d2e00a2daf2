//! Image Upload Grid UI Components
//!
//! Dioxus components for the image upload grid: a row of uploaded thumbnails
//! followed by an "add image" trigger tile.
//!
//! ## Design Philosophy
//!
//! Components are pure projections of caller-owned state:
//! - **Files** come in as props and are never mutated here
//! - **Events** go out through optional handlers; a missing handler is a no-op
//! - **Config and icons** are explicit props, not ambient lookups
//!
//! The rules deciding what is shown live in `imagegrid-core`.

pub mod components;

pub use components::*;
