//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::{body::Body, response::Response, Router};
use jukebox_core::AlbumStore;
use jukebox_metadata::LoftyMetadataReader;
use jukebox_server::{create_router, AppState, FileStorage, UploadService};
use jukebox_storage::LocalStorageContext;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;
pub const BOUNDARY: &str = "jukebox-test-boundary";

/// Router backed by a real on-disk SQLite database and upload directory
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<LocalStorageContext>,
    pub upload_dir: PathBuf,
    _temp_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = jukebox_storage::create_pool(&db_url).await.unwrap();
    jukebox_storage::run_migrations(&pool).await.unwrap();
    let storage = Arc::new(LocalStorageContext::new(pool));
    let albums: Arc<dyn AlbumStore> = storage.clone();

    let upload_dir = temp_dir.path().join("uploads");
    let file_storage = FileStorage::new(upload_dir.clone());
    file_storage.initialize().await.unwrap();

    let uploads = Arc::new(UploadService::new(
        Arc::clone(&albums),
        Arc::new(file_storage),
        Arc::new(LoftyMetadataReader::new()),
    ));

    let router = create_router(AppState::new(albums, uploads), TEST_UPLOAD_LIMIT);

    TestApp {
        router,
        storage,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a multipart/form-data body with `file` fields and an optional `album` field
pub fn multipart_body(files: &[(&str, &[u8])], album: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();

    for (filename, data) in files {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(album) = album {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"album\"\r\n\r\n");
        body.extend_from_slice(album.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
