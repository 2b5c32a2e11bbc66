/// Metadata reader implementation using lofty
use crate::error::MetadataError;
use jukebox_core::{MetadataReader, TrackMetadata};
use lofty::{Accessor, AudioFile, FileType, ItemKey, Probe, TaggedFile, TaggedFileExt};
use std::io::Cursor;
use std::path::Path;

/// Metadata reader using the lofty library
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyMetadataReader;

impl LoftyMetadataReader {
    /// Create a new metadata reader
    pub fn new() -> Self {
        Self
    }

    fn extract_from_tag(tag: &lofty::Tag) -> TrackMetadata {
        TrackMetadata {
            title: tag.title().map(|s| s.to_string()),
            artist: tag.artist().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
            album_artist: tag.get_string(&ItemKey::AlbumArtist).map(|s| s.to_string()),
            genre: tag.genre().map(|s| s.to_string()),
            year: tag.year().and_then(|y| i32::try_from(y).ok()),
            track_number: tag.track(),
            disc_number: tag.disk(),
            duration_ms: None,
        }
    }

    fn extract(tagged_file: &TaggedFile) -> TrackMetadata {
        let duration_ms = Some(tagged_file.properties().duration().as_millis() as u64);

        // Prefer the format's primary tag (ID3v2 for MP3, Vorbis comments for FLAC/OGG)
        let mut metadata = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .map(Self::extract_from_tag)
            .unwrap_or_default();

        metadata.duration_ms = duration_ms;
        metadata
    }
}

impl MetadataReader for LoftyMetadataReader {
    fn read(&self, path: &Path) -> jukebox_core::Result<TrackMetadata> {
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.display().to_string()).into());
        }

        let tagged_file = lofty::read_from_path(path).map_err(MetadataError::from)?;
        Ok(Self::extract(&tagged_file))
    }

    fn read_bytes(&self, bytes: &[u8], filename: &str) -> jukebox_core::Result<TrackMetadata> {
        let mut probe = Probe::new(Cursor::new(bytes))
            .guess_file_type()
            .map_err(MetadataError::from)?;

        // Content sniffing failed; fall back to the extension
        if probe.file_type().is_none() {
            let file_type = Path::new(filename)
                .extension()
                .and_then(|e| e.to_str())
                .and_then(FileType::from_ext)
                .ok_or_else(|| MetadataError::UnsupportedFormat(filename.to_string()))?;
            probe = probe.set_file_type(file_type);
        }

        let tagged_file = probe.read().map_err(MetadataError::from)?;
        tracing::debug!(filename, file_type = ?tagged_file.file_type(), "read embedded tags");

        Ok(Self::extract(&tagged_file))
    }
}
