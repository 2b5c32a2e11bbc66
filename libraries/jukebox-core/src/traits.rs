/// Core traits for the jukebox
use crate::error::Result;
use crate::types::TrackMetadata;
use std::path::Path;

/// Metadata reader trait
///
/// Implementers extract embedded tags from audio files.
pub trait MetadataReader: Send + Sync {
    /// Read metadata from an audio file on disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    fn read(&self, path: &Path) -> Result<TrackMetadata>;

    /// Read metadata from an in-memory upload
    ///
    /// `filename` is used only as a format hint.
    fn read_bytes(&self, bytes: &[u8], filename: &str) -> Result<TrackMetadata>;
}
