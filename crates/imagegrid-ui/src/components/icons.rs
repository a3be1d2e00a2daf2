//! Icon Provider
//!
//! The grid needs three icons: add (idle trigger), delete (remove action) and
//! browse (preview action). They come from an [`IconProvider`] handed to the
//! grid as a prop, so an application can swap in its own icon set.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Supplies the icons the grid renders
pub trait IconProvider {
    /// Shown on the idle trigger tile
    fn add(&self) -> Element;
    /// Shown on the remove action
    fn delete(&self) -> Element;
    /// Shown on the preview action
    fn browse(&self) -> Element;
}

/// Unicode glyph icons, the default icon set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphIcons;

impl GlyphIcons {
    pub const ADD: &'static str = "\u{FF0B}";
    pub const DELETE: &'static str = "\u{1F5D1}";
    pub const BROWSE: &'static str = "\u{1F441}";
}

impl IconProvider for GlyphIcons {
    fn add(&self) -> Element {
        rsx! { span { class: "grid-icon grid-icon--add", "aria-hidden": "true", {Self::ADD} } }
    }

    fn delete(&self) -> Element {
        rsx! { span { class: "grid-icon grid-icon--delete", "aria-label": "Remove", {Self::DELETE} } }
    }

    fn browse(&self) -> Element {
        rsx! { span { class: "grid-icon grid-icon--browse", "aria-label": "Preview", {Self::BROWSE} } }
    }
}

/// Shared handle to an icon provider, usable as a component prop.
///
/// Two sets are equal when they point at the same provider.
#[derive(Clone)]
pub struct IconSet(Rc<dyn IconProvider>);

impl IconSet {
    pub fn new(provider: impl IconProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn add(&self) -> Element {
        self.0.add()
    }

    pub fn delete(&self) -> Element {
        self.0.delete()
    }

    pub fn browse(&self) -> Element {
        self.0.browse()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(GlyphIcons)
    }
}

impl PartialEq for IconSet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IconSet(..)")
    }
}
