//! Photo embedding: local image files → inline base64 data URIs.
//!
//! Renderers that want a hero image (the card's cover, mainly) call into
//! here. The contract is strictly best-effort: a missing or unreadable file
//! is logged and reported as `None`, never as an error — a share must not
//! abort because one photo went away since it was journaled. No resizing or
//! transcoding happens; the raw bytes are inlined as-is.
//!
//! MIME is sniffed from the file extension alone. Unknown extensions fall
//! back to `image/jpeg`, matching what phone cameras overwhelmingly produce.

use crate::model::{Entry, Trip};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;

/// Map a photo URI's extension to a MIME type.
pub fn mime_for_uri(uri: &str) -> &'static str {
    let ext = Path::new(uri)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "heic" | "heif" => "image/heic",
        _ => "image/jpeg",
    }
}

/// Read a local photo and inline it as `data:<mime>;base64,<payload>`.
///
/// Accepts bare paths and `file://` URIs. Returns `None` on any read
/// failure, after logging a warning.
pub fn data_uri_for_file(uri: &str) -> Option<String> {
    let path = uri.strip_prefix("file://").unwrap_or(uri);
    match std::fs::read(path) {
        Ok(bytes) => Some(format!(
            "data:{};base64,{}",
            mime_for_uri(uri),
            BASE64.encode(bytes)
        )),
        Err(error) => {
            tracing::warn!(uri, %error, "could not read photo, rendering without it");
            None
        }
    }
}

/// Data URI for the first photo of the first entry that has one.
///
/// Entries are scanned in the given order; within an entry, the photo with
/// the lowest `order` wins.
pub fn first_photo_data_uri(entries: &[Entry]) -> Option<String> {
    let photo = entries
        .iter()
        .find(|e| !e.photos.is_empty())
        .and_then(|e| e.photos.iter().min_by_key(|p| p.order))?;
    data_uri_for_file(&photo.uri)
}

/// Data URI for the trip's cover image, if one is set and readable.
pub fn trip_cover_data_uri(trip: &Trip) -> Option<String> {
    trip.cover_image_uri
        .as_deref()
        .and_then(data_uri_for_file)
}
