//! Merging embedded tags with filename guesses
//!
//! Per field the first non-empty value wins: embedded tag, then filename
//! heuristic, then a fixed fallback.

use jukebox_core::{ParsedMetadata, TrackMetadata, UNKNOWN_ARTIST};
use serde::{Deserialize, Serialize};

/// Title used when neither tags nor filename yield one
pub const UNTITLED: &str = "Untitled";

/// Album used when no tag names one
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataOrigin {
    /// Embedded tag
    Tags,
    /// Filename heuristic
    Filename,
    /// Supplied explicitly by the uploading client
    Client,
    /// Fixed placeholder
    Fallback,
}

/// Final metadata for an uploaded track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    pub title: String,
    pub title_origin: MetadataOrigin,
    pub artist: String,
    pub artist_origin: MetadataOrigin,
    pub album: String,
    pub album_origin: MetadataOrigin,
    pub track_number: Option<u32>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub duration_ms: Option<u64>,
}

impl ResolvedMetadata {
    /// Replace the album with a client-supplied name.
    ///
    /// Blank names are ignored.
    pub fn with_album(mut self, album: Option<&str>) -> Self {
        if let Some(album) = non_empty(album) {
            self.album = album.to_string();
            self.album_origin = MetadataOrigin::Client;
        }
        self
    }
}

/// Merge embedded tags (if any were readable) with a filename guess
pub fn resolve(tags: Option<&TrackMetadata>, parsed: &ParsedMetadata) -> ResolvedMetadata {
    let tag_title = tags.and_then(|t| non_empty(t.title.as_deref()));
    let tag_artist = tags.and_then(|t| non_empty(t.artist.as_deref()));
    let tag_album = tags.and_then(|t| non_empty(t.album.as_deref()));
    let tag_genre = tags.and_then(|t| non_empty(t.genre.as_deref()));

    let (title, title_origin) = if let Some(title) = tag_title {
        (title.to_string(), MetadataOrigin::Tags)
    } else if let Some(title) = non_empty(parsed.title.as_deref()) {
        (title.to_string(), MetadataOrigin::Filename)
    } else {
        (UNTITLED.to_string(), MetadataOrigin::Fallback)
    };

    let (artist, artist_origin) = if let Some(artist) = tag_artist {
        (artist.to_string(), MetadataOrigin::Tags)
    } else {
        match non_empty(parsed.artist.as_deref()) {
            Some(artist) if artist != UNKNOWN_ARTIST => {
                (artist.to_string(), MetadataOrigin::Filename)
            }
            _ => (UNKNOWN_ARTIST.to_string(), MetadataOrigin::Fallback),
        }
    };

    let (album, album_origin) = match tag_album {
        Some(album) => (album.to_string(), MetadataOrigin::Tags),
        None => (UNKNOWN_ALBUM.to_string(), MetadataOrigin::Fallback),
    };

    ResolvedMetadata {
        title,
        title_origin,
        artist,
        artist_origin,
        album,
        album_origin,
        track_number: tags
            .and_then(|t| t.track_number)
            .or(parsed.track_number),
        year: tags.and_then(|t| t.year),
        genre: tag_genre.map(str::to_string),
        duration_ms: tags.and_then(|t| t.duration_ms),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
