//! Simulated uploads for the gallery.
//!
//! Picked files are turned into thumbnails locally; the "upload" is a timed
//! progress ramp so the grid's progress state can be exercised without a
//! server.

use std::path::PathBuf;
use std::time::Duration;

use imagegrid_core::thumbnail::{load_data_uri, DEFAULT_THUMBNAIL_EDGE};
use imagegrid_core::{remaining_slots, UploadFile};

/// Percent added per progress tick
pub const PROGRESS_STEP: f64 = 7.0;

/// Delay between progress ticks
pub const PROGRESS_TICK: Duration = Duration::from_millis(80);

/// Image extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Read metadata and build a thumbnail URL off the UI thread.
pub async fn prepare(path: PathBuf) -> anyhow::Result<UploadFile> {
    tokio::task::spawn_blocking(move || -> anyhow::Result<UploadFile> {
        let mut file = UploadFile::from_path(&path)?;
        file.url = load_data_uri(&path, DEFAULT_THUMBNAIL_EDGE)?;
        Ok(file)
    })
    .await?
}

/// Progress values reported during a simulated upload, ending at 100.
pub fn progress_steps(step: f64) -> Vec<f64> {
    let step = if step > 0.0 { step } else { 100.0 };
    let mut steps = Vec::new();
    let mut percent = 0.0;
    while percent < 100.0 {
        steps.push(percent);
        percent += step;
    }
    steps.push(100.0);
    steps
}

/// Add a finished upload: appended with `multiple`, otherwise it replaces
/// the single slot.
pub fn apply_upload(files: &mut Vec<UploadFile>, file: UploadFile, multiple: bool) {
    if multiple {
        files.push(file);
    } else {
        files.clear();
        files.push(file);
    }
}

/// Remove the file at `index`, ignoring stale indices.
pub fn remove_at(files: &mut Vec<UploadFile>, index: usize) -> Option<UploadFile> {
    (index < files.len()).then(|| files.remove(index))
}

/// Keep at most `slots` picks; `None` keeps all.
pub fn cap_picks(mut picks: Vec<PathBuf>, slots: Option<usize>) -> Vec<PathBuf> {
    if let Some(slots) = slots {
        if picks.len() > slots {
            tracing::info!(picked = picks.len(), slots, "Dropping picks beyond max");
            picks.truncate(slots);
        }
    }
    picks
}

/// Picks that still fit once the picker returns, measured against the
/// grid's current file count.
pub fn admit_picks(
    picks: Vec<PathBuf>,
    multiple: bool,
    max: Option<usize>,
    count: usize,
) -> Vec<PathBuf> {
    cap_picks(picks, remaining_slots(multiple, max, count))
}

/// A new pick may start only when no other batch is picking or uploading and
/// the grid has room.
pub fn pick_allowed(busy: bool, multiple: bool, max: Option<usize>, count: usize) -> bool {
    !busy && remaining_slots(multiple, max, count) != Some(0)
}
