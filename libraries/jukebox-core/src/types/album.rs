//! Album types

use super::UserId;
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album owned by the user who uploaded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub uploaded_by: UserId,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_art_path: Option<String>,
    pub track_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub artist: String,
    pub uploaded_by: UserId,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl CreateAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, uploaded_by: UserId) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            uploaded_by,
            year: None,
            genre: None,
        }
    }
}

/// Partial album update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAlbum {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub cover_art_path: Option<String>,
}

impl UpdateAlbum {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.cover_art_path.is_none()
    }
}
