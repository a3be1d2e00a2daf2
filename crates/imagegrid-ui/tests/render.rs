//! Server-side render tests for the image upload grid
//!
//! Renders components to HTML with dioxus-ssr and checks the markup the grid
//! rules produce: tile counts, trigger visibility, captions and actions.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use imagegrid_core::{GridConfig, UploadFile, UploadLocale, UploadStatus};
use imagegrid_ui::{FormScope, IconProvider, IconSet, ImageUpload, ImageUploadProps};

// ============================================================================
// Helpers
// ============================================================================

const TILE: &str = "t-upload__card-item t-is--background";
const TRIGGER_BOX: &str = "t-upload__card-container";
const DIVIDER: &str = "t-upload__card-mask-item-divider";

/// Defaults for every prop; tests override fields with struct update syntax
fn props() -> ImageUploadProps {
    ImageUploadProps {
        files: Vec::new(),
        loading_file: None,
        locale: None,
        percent: 0.0,
        show_upload_progress: true,
        placeholder: None,
        multiple: false,
        max: None,
        disabled: false,
        config: GridConfig::default(),
        icons: IconSet::default(),
        onclick: None,
        on_remove: None,
        on_img_preview: None,
    }
}

fn render(props: ImageUploadProps) -> String {
    let mut dom = VirtualDom::new_with_props(ImageUpload, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn files(n: usize) -> Vec<UploadFile> {
    (0..n)
        .map(|i| UploadFile::new(format!("https://cdn.test/img-{}.png", i)))
        .collect()
}

fn in_flight() -> UploadFile {
    UploadFile::new("https://cdn.test/pending.png").with_status(UploadStatus::Progress)
}

struct TextIcons;

impl IconProvider for TextIcons {
    fn add(&self) -> Element {
        rsx! { i { "ADD" } }
    }

    fn delete(&self) -> Element {
        rsx! { i { "DEL" } }
    }

    fn browse(&self) -> Element {
        rsx! { i { "VIEW" } }
    }
}

// ============================================================================
// Tile list and trigger visibility
// ============================================================================

#[test]
fn renders_one_tile_per_file_plus_trigger() {
    let html = render(ImageUploadProps {
        files: files(2),
        multiple: true,
        ..props()
    });
    assert_eq!(html.matches(TILE).count(), 3);
    assert!(html.contains(TRIGGER_BOX));
}

#[test]
fn empty_grid_shows_only_trigger() {
    let html = render(props());
    assert_eq!(html.matches(TILE).count(), 1);
    assert!(html.contains("Click to upload"));
}

#[test]
fn trigger_hidden_once_max_reached() {
    let html = render(ImageUploadProps {
        files: files(2),
        multiple: true,
        max: Some(2),
        ..props()
    });
    assert_eq!(html.matches(TILE).count(), 2);
    assert!(!html.contains(TRIGGER_BOX));
}

#[test]
fn zero_max_is_unbounded() {
    let html = render(ImageUploadProps {
        files: files(5),
        multiple: true,
        max: Some(0),
        ..props()
    });
    assert!(html.contains(TRIGGER_BOX));
}

#[test]
fn single_slot_hides_trigger_when_filled() {
    let html = render(ImageUploadProps {
        files: files(1),
        ..props()
    });
    assert_eq!(html.matches(TILE).count(), 1);
    assert!(!html.contains(TRIGGER_BOX));
}

#[test]
fn tiles_keep_input_order_with_trigger_last() {
    let html = render(ImageUploadProps {
        files: files(3),
        multiple: true,
        ..props()
    });
    let first = html.find("img-0.png").unwrap();
    let second = html.find("img-1.png").unwrap();
    let third = html.find("img-2.png").unwrap();
    let trigger = html.find(TRIGGER_BOX).unwrap();
    assert!(first < second && second < third && third < trigger);
}

// ============================================================================
// Actions
// ============================================================================

#[test]
fn remove_action_present_when_enabled() {
    let html = render(ImageUploadProps {
        files: files(1),
        ..props()
    });
    assert!(html.contains(DIVIDER));
    assert!(html.contains("grid-icon--delete"));
    assert!(html.contains("grid-icon--browse"));
}

#[test]
fn remove_action_absent_when_disabled() {
    let html = render(ImageUploadProps {
        files: files(2),
        multiple: true,
        disabled: true,
        ..props()
    });
    assert!(!html.contains(DIVIDER));
    assert!(!html.contains("grid-icon--delete"));
    // preview stays available
    assert_eq!(html.matches("grid-icon--browse").count(), 2);
    // trigger carries the disabled status class
    assert!(html.contains("t-is-disabled"));
}

#[test]
fn enclosing_form_disables_grid() {
    fn DisabledForm() -> Element {
        rsx! {
            FormScope { disabled: true,
                ImageUpload { files: vec![UploadFile::new("https://cdn.test/a.png")] }
            }
        }
    }

    let mut dom = VirtualDom::new(DisabledForm);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("a.png"));
    assert!(!html.contains(DIVIDER));
}

#[test]
fn custom_icons_are_rendered() {
    let html = render(ImageUploadProps {
        files: files(1),
        multiple: true,
        icons: IconSet::new(TextIcons),
        ..props()
    });
    assert!(html.contains("ADD"));
    assert!(html.contains("DEL"));
    assert!(html.contains("VIEW"));
    assert!(!html.contains("grid-icon"));
}

// ============================================================================
// Trigger captions
// ============================================================================

#[test]
fn progress_state_caps_percent_at_99() {
    let html = render(ImageUploadProps {
        loading_file: Some(in_flight()),
        percent: 100.0,
        ..props()
    });
    assert!(html.contains("Uploading 99%"));
    assert!(html.contains("t-loading"));
    assert!(!html.contains("grid-icon--add"));
}

#[test]
fn progress_state_shows_current_percent() {
    let html = render(ImageUploadProps {
        loading_file: Some(in_flight()),
        percent: 37.0,
        locale: Some(UploadLocale::with_uploading_text("Sending")),
        ..props()
    });
    assert!(html.contains("Sending 37%"));
}

#[test]
fn progress_hidden_when_disabled_by_flag() {
    let html = render(ImageUploadProps {
        loading_file: Some(in_flight()),
        percent: 50.0,
        show_upload_progress: false,
        ..props()
    });
    assert!(!html.contains("t-loading"));
    assert!(html.contains("Click to upload"));
}

#[test]
fn finished_loading_file_shows_idle_state() {
    let html = render(ImageUploadProps {
        loading_file: Some(UploadFile::new("https://cdn.test/done.png")),
        percent: 100.0,
        ..props()
    });
    assert!(!html.contains("%"));
    assert!(html.contains("grid-icon--add"));
}

#[test]
fn caption_prefers_placeholder_then_locale_then_global() {
    let locale = UploadLocale::with_image_text("Add a photo");

    let html = render(ImageUploadProps {
        placeholder: Some("Drop a cover".to_string()),
        locale: Some(locale.clone()),
        ..props()
    });
    assert!(html.contains("Drop a cover"));
    assert!(!html.contains("Add a photo"));

    let html = render(ImageUploadProps {
        locale: Some(locale),
        ..props()
    });
    assert!(html.contains("Add a photo"));
    assert!(!html.contains("Click to upload"));

    let html = render(props());
    assert!(html.contains("Click to upload"));
}

#[test]
fn config_controls_class_prefix_and_texts() {
    let config = GridConfig::from_json_str(
        r#"{"class_prefix":"acme","global_upload_text":{"image":"Upload artwork"}}"#,
    )
    .unwrap();
    let html = render(ImageUploadProps {
        config,
        ..props()
    });
    assert!(html.contains("acme-upload__card"));
    assert!(html.contains("acme-size-s"));
    assert!(html.contains("Upload artwork"));
    assert!(!html.contains("t-upload"));
}

#[test]
fn disabled_class_follows_prefix() {
    let config = GridConfig::from_json_str(r#"{"class_prefix":"acme"}"#).unwrap();
    let html = render(ImageUploadProps {
        config,
        disabled: true,
        ..props()
    });
    assert!(html.contains("acme-is-disabled"));
    assert!(!html.contains("t-is-disabled"));

    let config = GridConfig::from_json_str(r#"{"disabled_status_class":"locked"}"#).unwrap();
    let html = render(ImageUploadProps {
        config,
        disabled: true,
        ..props()
    });
    assert!(html.contains("locked"));
    assert!(!html.contains("t-is-disabled"));
}
