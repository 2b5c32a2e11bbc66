/// Albums API routes
use crate::{error::Result, error::ServerError, middleware::UploaderId, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jukebox_core::types::{Album, AlbumId, CreateAlbum, UpdateAlbum};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// GET /api/albums
/// Albums of the requesting user, or every album when no user is given
pub async fn list_albums(
    State(app_state): State<AppState>,
    uploader: Option<UploaderId>,
) -> Result<Json<Vec<Album>>> {
    let albums = match uploader {
        Some(uploader) => app_state.albums.get_albums_by_user(uploader.user_id()).await?,
        None => app_state.albums.get_all_albums().await?,
    };
    Ok(Json(albums))
}

/// POST /api/albums
pub async fn create_album(
    State(app_state): State<AppState>,
    uploader: UploaderId,
    Json(req): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<Album>)> {
    // Blank titles/artists are rejected by the store as invalid input
    let mut album = CreateAlbum::new(req.title, req.artist, uploader.0);
    album.year = req.year;
    album.genre = req.genre;

    let album = app_state.albums.create_album(album).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /api/albums/:id
pub async fn get_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
) -> Result<Json<Album>> {
    let album = app_state
        .albums
        .get_album(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Album not found: {}", id)))?;
    Ok(Json(album))
}

/// PUT /api/albums/:id
pub async fn update_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateAlbum>,
) -> Result<Json<Album>> {
    let album = app_state.albums.update_album(id, req).await?;
    Ok(Json(album))
}

/// DELETE /api/albums/:id
pub async fn delete_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    if !app_state.albums.delete_album(id).await? {
        return Err(ServerError::NotFound(format!("Album not found: {}", id)));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
