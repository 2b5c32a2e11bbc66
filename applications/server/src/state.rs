/// Shared application state
use crate::services::UploadService;
use jukebox_core::AlbumStore;
use jukebox_metadata::FilenameMetadataExtractor;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumStore>,
    pub uploads: Arc<UploadService>,
    pub extractor: FilenameMetadataExtractor,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumStore>, uploads: Arc<UploadService>) -> Self {
        Self {
            albums,
            uploads,
            extractor: FilenameMetadataExtractor::new(),
        }
    }
}
