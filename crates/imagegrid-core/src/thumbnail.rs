//! Thumbnail previews
//!
//! Turns a local image into a square PNG data URI the grid can show before
//! (or instead of) a remote URL.

use std::path::Path;

use base64::Engine;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::{GridError, GridResult};
use crate::file::mime_for_path;

/// Default edge length of generated thumbnails, in pixels
pub const DEFAULT_THUMBNAIL_EDGE: u32 = 240;

/// Center-crop to the largest square that fits
pub fn crop_to_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let edge = width.min(height);

    let x = (width - edge) / 2;
    let y = (height - edge) / 2;

    img.crop_imm(x, y, edge, edge)
}

/// Encode as PNG and wrap in a `data:` URI
pub fn encode_data_uri(img: &DynamicImage) -> GridResult<String> {
    let mut buffer = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(format!("data:image/png;base64,{}", encoded))
}

/// Load `path`, crop it square, shrink to at most `max_edge` and return a
/// PNG data URI.
pub fn load_data_uri(path: &Path, max_edge: u32) -> GridResult<String> {
    if mime_for_path(path).is_none() {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        return Err(GridError::UnsupportedFormat(ext));
    }

    let img = image::open(path)?;
    let square = crop_to_square(img);
    let thumb = if square.width() > max_edge {
        square.thumbnail(max_edge, max_edge)
    } else {
        square
    };

    tracing::debug!(
        path = %path.display(),
        edge = thumb.width(),
        "Generated thumbnail"
    );
    encode_data_uri(&thumb)
}
