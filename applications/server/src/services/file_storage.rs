/// File storage service - keeps uploaded audio files on disk
use crate::error::{Result, ServerError};
use jukebox_core::UserId;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Initialize storage directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Directory holding one user's uploads
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.base_path.join(sanitize_component(user.as_str()))
    }

    /// Store an uploaded file under a fresh name, returning its path
    ///
    /// Files land in `<base>/<user>/<uuid>.<ext>`; the client filename is
    /// never used on disk.
    pub async fn store_upload(&self, user: &UserId, extension: &str, data: &[u8]) -> Result<PathBuf> {
        let extension = normalize_extension(extension)?;
        let dir = self.user_dir(user);
        fs::create_dir_all(&dir).await?;

        let path = dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, data).await?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "stored upload");
        Ok(path)
    }

    /// Remove a stored upload
    pub async fn delete_upload(&self, path: &Path) -> Result<()> {
        self.validate_path(path)?;
        fs::remove_file(path).await?;
        Ok(())
    }

    /// Validate that a path is within the storage directory (prevent directory traversal)
    pub fn validate_path(&self, path: &Path) -> Result<()> {
        let canonical_base = self
            .base_path
            .canonicalize()
            .map_err(|e| ServerError::Storage(format!("Invalid base path: {}", e)))?;

        let canonical_path = path
            .canonicalize()
            .map_err(|e| ServerError::NotFound(format!("Invalid path: {}", e)))?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(ServerError::BadRequest(
                "Path traversal attempt detected".to_string(),
            ));
        }

        Ok(())
    }
}

/// Lowercase, ASCII-alphanumeric, at most eight characters
pub(crate) fn normalize_extension(extension: &str) -> Result<String> {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    if extension.is_empty()
        || extension.len() > MAX_EXTENSION_LEN
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ServerError::BadRequest(format!(
            "Unsupported file extension: {:?}",
            extension
        )));
    }
    Ok(extension)
}

fn sanitize_component(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}
