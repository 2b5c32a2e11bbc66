//! Storage trait for album persistence

use crate::error::Result;
use crate::types::{Album, AlbumId, CreateAlbum, UpdateAlbum, UserId};
use async_trait::async_trait;

/// Album persistence
///
/// Albums are unique per `(artist, title, uploaded_by)`.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Get all albums
    async fn get_all_albums(&self) -> Result<Vec<Album>>;

    /// Get albums uploaded by a user
    async fn get_albums_by_user(&self, user: &UserId) -> Result<Vec<Album>>;

    /// Get album by ID
    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Look up an album by its unique key
    async fn find_album(&self, artist: &str, title: &str, user: &UserId)
        -> Result<Option<Album>>;

    /// Create a new album
    ///
    /// Fails with `JukeboxError::Duplicate` if the key already exists.
    async fn create_album(&self, album: CreateAlbum) -> Result<Album>;

    /// Record one uploaded track against the album, creating it if needed.
    ///
    /// New albums start at one track; existing ones are bumped by one.
    async fn find_or_create_album(&self, album: CreateAlbum) -> Result<Album>;

    /// Undo one `find_or_create_album` bump; the count never drops below zero
    async fn release_track(&self, id: AlbumId) -> Result<()>;

    /// Update an album
    async fn update_album(&self, id: AlbumId, update: UpdateAlbum) -> Result<Album>;

    /// Delete an album, returning whether it existed
    async fn delete_album(&self, id: AlbumId) -> Result<bool>;

    /// Check that the backing store answers queries
    async fn ping(&self) -> Result<()>;
}
