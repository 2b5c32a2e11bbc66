/// Filename metadata API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use jukebox_core::ParsedMetadata;
use serde::Deserialize;

/// Upper bound on filenames per batch request
pub const MAX_BATCH_SIZE: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchParseRequest {
    pub filenames: Vec<String>,
}

/// POST /api/metadata/parse
pub async fn parse(
    State(app_state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Json<ParsedMetadata> {
    Json(app_state.extractor.parse(&req.filename))
}

/// POST /api/metadata/parse/batch
/// Results are returned in request order
pub async fn parse_batch(
    State(app_state): State<AppState>,
    Json(req): Json<BatchParseRequest>,
) -> Result<Json<Vec<ParsedMetadata>>> {
    if req.filenames.len() > MAX_BATCH_SIZE {
        return Err(ServerError::BadRequest(format!(
            "At most {} filenames per request",
            MAX_BATCH_SIZE
        )));
    }

    let parsed = req
        .filenames
        .iter()
        .map(|name| app_state.extractor.parse(name))
        .collect();

    Ok(Json(parsed))
}
