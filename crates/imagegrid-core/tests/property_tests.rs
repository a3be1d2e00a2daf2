//! Property-based tests for the trigger rules
//!
//! Uses proptest to check the visibility, percent and caption rules over
//! arbitrary file counts and inputs.

use imagegrid_core::locale::{idle_caption, progress_caption};
use imagegrid_core::{
    display_percent, remaining_slots, should_show_trigger, GlobalUploadText, UploadFile,
    UploadLocale,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a collection of `0..max_len` finished uploads
fn files_strategy(max_len: usize) -> impl Strategy<Value = Vec<UploadFile>> {
    prop::collection::vec(
        "[a-z0-9]{1,12}".prop_map(|name| UploadFile::new(format!("https://cdn.test/{}.png", name))),
        0..max_len,
    )
}

/// Generate optional caption text, including empty strings
fn text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z ]{0,16}")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Unbounded multi uploaders always keep their trigger
    #[test]
    fn unbounded_multiple_always_shows_trigger(
        files in files_strategy(40),
        zero_max in any::<bool>(),
    ) {
        let max = if zero_max { Some(0) } else { None };
        prop_assert!(should_show_trigger(true, max, &files));
    }

    /// Bounded multi uploaders show the trigger iff there is room left
    #[test]
    fn bounded_multiple_shows_trigger_below_max(
        files in files_strategy(20),
        max in 1usize..20,
    ) {
        prop_assert_eq!(should_show_trigger(true, Some(max), &files), files.len() < max);
    }

    /// Single-slot uploaders show the trigger iff the slot is empty
    #[test]
    fn single_shows_trigger_iff_empty(
        files in files_strategy(5),
        max in prop::option::of(0usize..10),
    ) {
        prop_assert_eq!(should_show_trigger(false, max, &files), files.is_empty());
    }

    /// Displayed percent never exceeds 99 and is otherwise unchanged
    #[test]
    fn display_percent_is_capped(percent in 0.0f64..=100.0) {
        let shown = display_percent(percent);
        prop_assert!(shown <= 99.0);
        if percent <= 99.0 {
            prop_assert_eq!(shown, percent);
        }
    }

    /// Remaining slots agree with trigger visibility for bounded grids
    #[test]
    fn remaining_slots_match_trigger(files in files_strategy(20), max in 1usize..20) {
        let left = remaining_slots(true, Some(max), files.len()).unwrap();
        prop_assert_eq!(left > 0, should_show_trigger(true, Some(max), &files));
    }

    /// Placeholder beats locale text which beats the global text
    #[test]
    fn caption_priority(
        placeholder in text_strategy(),
        locale_text in text_strategy(),
    ) {
        let global = GlobalUploadText::default();
        let locale = locale_text.clone().map(UploadLocale::with_image_text);
        let caption = idle_caption(placeholder.as_deref(), locale.as_ref(), &global).to_string();

        let expected = placeholder
            .filter(|p| !p.is_empty())
            .or(locale_text.filter(|l| !l.is_empty()))
            .unwrap_or_else(|| global.image.clone());
        prop_assert_eq!(caption, expected);
    }

    /// Progress captions end with the capped percentage
    #[test]
    fn progress_caption_ends_with_percent(percent in 0u32..=100) {
        let global = GlobalUploadText::default();
        let caption = progress_caption(None, &global, f64::from(percent));
        let expected = format!(" {}%", percent.min(99));
        prop_assert!(caption.ends_with(&expected));
    }
}
