//! Trigger Tile Rules
//!
//! Decides whether the "add image" tile is shown, whether clicking an
//! existing thumbnail re-triggers an upload, and which of the two trigger
//! states (idle / progress) is displayed.

use crate::file::UploadFile;

/// Highest percentage shown while an upload is still in flight.
/// 100 is only reached once the file leaves the progress state.
pub const MAX_IN_FLIGHT_PERCENT: f64 = 99.0;

/// Whether the trailing trigger tile is rendered.
///
/// With `multiple`, the tile stays until `files` reaches `max`. A `max` of
/// `None` or `Some(0)` is unbounded. Without `multiple`, the tile is shown
/// only while the single slot is empty.
pub fn should_show_trigger(multiple: bool, max: Option<usize>, files: &[UploadFile]) -> bool {
    if multiple {
        return match max {
            None | Some(0) => true,
            Some(max) => files.len() < max,
        };
    }
    files.first().is_none()
}

/// Whether a click on a thumbnail's mask (outside its preview/remove
/// actions) is forwarded to the generic click handler.
///
/// Only forwarded when there is no trigger tile, which lets a single-slot
/// uploader re-pick by clicking its current image.
pub fn mask_click_forwards(show_trigger: bool) -> bool {
    !show_trigger
}

/// Percentage shown in the progress caption, capped at 99.
pub fn display_percent(percent: f64) -> f64 {
    percent.min(MAX_IN_FLIGHT_PERCENT)
}

/// How many more files the grid accepts.
///
/// `None` means unbounded. A single-slot grid always reports one slot since
/// a new pick replaces the current file.
pub fn remaining_slots(multiple: bool, max: Option<usize>, count: usize) -> Option<usize> {
    if !multiple {
        return Some(1);
    }
    match max {
        None | Some(0) => None,
        Some(max) => Some(max.saturating_sub(count)),
    }
}

/// Visual state of the trigger tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Add icon plus upload prompt
    Idle,
    /// Loading indicator plus "uploading N%"
    Progress,
}

impl TriggerState {
    /// Progress iff progress display is on and the loading file is in flight
    pub fn resolve(show_upload_progress: bool, loading_file: Option<&UploadFile>) -> Self {
        match loading_file {
            Some(file) if show_upload_progress && file.is_in_progress() => TriggerState::Progress,
            _ => TriggerState::Idle,
        }
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, TriggerState::Progress)
    }
}
