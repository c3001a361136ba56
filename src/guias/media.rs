//! Derived display media for a record.
//!
//! A record with an explicit image link shows that image. Without one, a
//! recognized playable video link yields a deterministic thumbnail keyed by
//! the extracted video identifier. Anything else shows nothing.

use crate::model::Tutorial;

/// Length of a valid video identifier. Extraction accepts nothing else.
const VIDEO_ID_LEN: usize = 11;

/// Link shapes the extractor recognizes, in match priority order. The
/// `u/<x>/` shape is handled separately since a path segment sits between
/// the marker and the identifier.
const MARKERS: [&str; 5] = ["watch?v=", "&v=", "embed/", "youtu.be/", "v/"];

/// Extracts a video identifier from common video-link shapes.
///
/// The candidate token runs from the end of the matched marker up to a `#`,
/// `&` or `?`, and is accepted only when it is exactly 11 characters long.
pub fn video_id(url: &str) -> Option<String> {
    for marker in MARKERS {
        if let Some(pos) = url.rfind(marker) {
            return accept(&url[pos + marker.len()..]);
        }
    }

    // "/u/<x>/<id>": skip the single path segment after the marker
    if let Some(pos) = url.rfind("/u/") {
        let rest = &url[pos + 3..];
        if let Some((segment, candidate)) = rest.split_once('/') {
            if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()) {
                return accept(candidate);
            }
        }
    }

    None
}

fn accept(candidate: &str) -> Option<String> {
    let token: String = candidate
        .chars()
        .take_while(|c| !matches!(c, '#' | '&' | '?'))
        .collect();
    if token.chars().count() == VIDEO_ID_LEN {
        Some(token)
    } else {
        None
    }
}

/// Deterministic thumbnail URL for an extracted video identifier.
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
}

/// The image to show for a record: the explicit image link if present,
/// otherwise a thumbnail derived from a recognized video link, otherwise
/// none.
pub fn display_image(record: &Tutorial) -> Option<String> {
    if let Some(image) = &record.image_url {
        return Some(image.clone());
    }
    record
        .video_url
        .as_deref()
        .and_then(video_id)
        .map(|id| thumbnail_url(&id))
}
