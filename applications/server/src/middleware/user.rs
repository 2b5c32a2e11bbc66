/// Uploader identification
///
/// Authentication lives in front of this service; the caller's identity
/// arrives as a plain header and is trusted as-is.
use crate::error::ServerError;
use axum::{extract::FromRequestParts, http::request::Parts};
use jukebox_core::UserId;

/// Header carrying the uploading user's ID
pub const USER_ID_HEADER: &str = "x-user-id";

/// User ID taken from the `X-User-Id` header
#[derive(Debug, Clone)]
pub struct UploaderId(pub UserId);

impl UploaderId {
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for UploaderId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::BadRequest("Missing X-User-Id header".to_string()))?;

        Ok(UploaderId(UserId::new(value)))
    }
}
