/// Upload pipeline
///
/// Per file: guess metadata from the filename, read embedded tags, merge the
/// two, store the bytes, and record the track against its album.
///
/// A request is all-or-nothing. Every file is checked before anything is
/// written, and a failure part-way through undoes the files already ingested.
use crate::{
    error::{Result, ServerError},
    services::{file_storage::normalize_extension, FileStorage},
};
use bytes::Bytes;
use jukebox_core::{AlbumId, AlbumStore, CreateAlbum, MetadataReader, ParsedMetadata, UserId};
use jukebox_metadata::{resolve, FilenameMetadataExtractor, ResolvedMetadata};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file received from the client
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-reported filename, used only for metadata heuristics
    pub filename: String,
    pub data: Bytes,
}

/// Result of ingesting one file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub filename: String,
    pub stored_path: PathBuf,
    pub parsed: ParsedMetadata,
    pub metadata: ResolvedMetadata,
    pub album_id: AlbumId,
}

/// What has to be reverted if a later file in the batch fails
struct Ingested {
    outcome: UploadOutcome,
    created_album: bool,
}

pub struct UploadService {
    albums: Arc<dyn AlbumStore>,
    file_storage: Arc<FileStorage>,
    reader: Arc<dyn MetadataReader>,
    extractor: FilenameMetadataExtractor,
}

impl UploadService {
    pub fn new(
        albums: Arc<dyn AlbumStore>,
        file_storage: Arc<FileStorage>,
        reader: Arc<dyn MetadataReader>,
    ) -> Self {
        Self {
            albums,
            file_storage,
            reader,
            extractor: FilenameMetadataExtractor::new(),
        }
    }

    /// Ingest every file of one upload request for `user`
    ///
    /// `album_override` replaces whatever album the tags name. On error
    /// nothing from this batch remains on disk or in the album counts.
    pub async fn ingest_all(
        &self,
        user: &UserId,
        files: Vec<UploadedFile>,
        album_override: Option<&str>,
    ) -> Result<Vec<UploadOutcome>> {
        let extensions = files
            .iter()
            .map(|file| upload_extension(&file.filename))
            .collect::<Result<Vec<_>>>()?;

        let mut ingested: Vec<Ingested> = Vec::with_capacity(files.len());
        for (file, extension) in files.into_iter().zip(extensions) {
            match self.ingest(user, file, &extension, album_override).await {
                Ok(done) => ingested.push(done),
                Err(e) => {
                    self.roll_back(&ingested).await;
                    return Err(e);
                }
            }
        }

        Ok(ingested.into_iter().map(|done| done.outcome).collect())
    }

    async fn ingest(
        &self,
        user: &UserId,
        file: UploadedFile,
        extension: &str,
        album_override: Option<&str>,
    ) -> Result<Ingested> {
        let parsed = self.extractor.parse(&file.filename);
        let tags = self.read_tags(&file).await;
        let metadata = resolve(tags.as_ref(), &parsed).with_album(album_override);

        tracing::info!(
            filename = %file.filename,
            title = %metadata.title,
            artist = %metadata.artist,
            album = %metadata.album,
            "ingesting upload"
        );

        let stored_path = self
            .file_storage
            .store_upload(user, extension, &file.data)
            .await?;

        let mut album = CreateAlbum::new(&metadata.album, &metadata.artist, user.clone());
        album.year = metadata.year;
        album.genre = metadata.genre.clone();

        let recorded = async {
            let existed = self
                .albums
                .find_album(&album.artist, &album.title, user)
                .await?
                .is_some();
            let album = self.albums.find_or_create_album(album).await?;
            Ok::<_, jukebox_core::JukeboxError>((album, !existed))
        }
        .await;

        let (album, created_album) = match recorded {
            Ok(recorded) => recorded,
            Err(e) => {
                self.remove_file(&stored_path).await;
                return Err(e.into());
            }
        };

        Ok(Ingested {
            outcome: UploadOutcome {
                filename: file.filename,
                stored_path,
                parsed,
                metadata,
                album_id: album.id,
            },
            created_album,
        })
    }

    /// Undo already-ingested files, newest first
    async fn roll_back(&self, ingested: &[Ingested]) {
        for done in ingested.iter().rev() {
            let album_id = done.outcome.album_id;
            self.remove_file(&done.outcome.stored_path).await;

            if let Err(e) = self.albums.release_track(album_id).await {
                tracing::warn!(error = %e, album_id, "failed to release album track");
                continue;
            }

            if done.created_album {
                match self.albums.get_album(album_id).await {
                    Ok(Some(album)) if album.track_count == 0 => {
                        if let Err(e) = self.albums.delete_album(album_id).await {
                            tracing::warn!(error = %e, album_id, "failed to remove empty album");
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, album_id, "failed to look up album");
                    }
                }
            }
        }
    }

    async fn remove_file(&self, path: &Path) {
        if let Err(e) = self.file_storage.delete_upload(path).await {
            tracing::warn!(error = %e, path = %path.display(), "failed to remove upload");
        }
    }

    /// Read embedded tags; unreadable files fall back to filename heuristics
    async fn read_tags(&self, file: &UploadedFile) -> Option<jukebox_core::TrackMetadata> {
        let reader = Arc::clone(&self.reader);
        let data = file.data.clone();
        let filename = file.filename.clone();

        let result =
            tokio::task::spawn_blocking(move || reader.read_bytes(&data, &filename)).await;

        match result {
            Ok(Ok(tags)) => Some(tags),
            Ok(Err(e)) => {
                tracing::debug!(filename = %file.filename, error = %e, "no readable tags");
                None
            }
            Err(e) => {
                tracing::warn!(filename = %file.filename, error = %e, "tag reader task failed");
                None
            }
        }
    }
}

/// Storage extension for a client filename
fn upload_extension(filename: &str) -> Result<String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ServerError::BadRequest(format!("Missing file extension: {}", filename)))?;
    normalize_extension(extension)
}
