use crate::albums;
use async_trait::async_trait;
use jukebox_core::{error::Result, storage::AlbumStore, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Debug, Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for LocalStorageContext {
    async fn get_all_albums(&self) -> Result<Vec<Album>> {
        albums::get_all(&self.pool).await
    }

    async fn get_albums_by_user(&self, user: &UserId) -> Result<Vec<Album>> {
        albums::get_by_user(&self.pool, user).await
    }

    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn find_album(
        &self,
        artist: &str,
        title: &str,
        user: &UserId,
    ) -> Result<Option<Album>> {
        albums::find_by_key(&self.pool, artist, title, user).await
    }

    async fn create_album(&self, album: CreateAlbum) -> Result<Album> {
        albums::create(&self.pool, album).await
    }

    async fn find_or_create_album(&self, album: CreateAlbum) -> Result<Album> {
        albums::find_or_create(&self.pool, album).await
    }

    async fn release_track(&self, id: AlbumId) -> Result<()> {
        albums::release_track(&self.pool, id).await
    }

    async fn update_album(&self, id: AlbumId, update: UpdateAlbum) -> Result<Album> {
        albums::update(&self.pool, id, update).await
    }

    async fn delete_album(&self, id: AlbumId) -> Result<bool> {
        albums::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
