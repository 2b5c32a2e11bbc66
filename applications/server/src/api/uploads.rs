/// Uploads API routes
use crate::{
    error::{Result, ServerError},
    middleware::UploaderId,
    services::{UploadOutcome, UploadedFile},
    state::AppState,
};
use axum::{extract::State, http::HeaderMap, Json};
use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub uploads: Vec<UploadOutcome>,
}

/// POST /api/uploads
///
/// Multipart form with one or more `file` fields and an optional `album`
/// text field that overrides the album name for every file.
pub async fn upload(
    State(app_state): State<AppState>,
    uploader: UploaderId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| ServerError::BadRequest(format!("Missing boundary: {}", e)))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut files: Vec<UploadedFile> = Vec::new();
    let mut album_override: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ServerError::BadRequest("File field without filename".to_string()))?;

                let data = field.bytes().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read file: {}", e))
                })?;

                files.push(UploadedFile { filename, data });
            }
            "album" => {
                album_override = Some(field.text().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read album: {}", e))
                })?);
            }
            other => {
                tracing::debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    if files.is_empty() {
        return Err(ServerError::BadRequest("Missing file".to_string()));
    }

    let uploads = app_state
        .uploads
        .ingest_all(uploader.user_id(), files, album_override.as_deref())
        .await?;

    Ok(Json(UploadResponse { uploads }))
}
