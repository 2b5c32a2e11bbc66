/// HTTP routing
use crate::{api, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `max_upload_bytes` caps request bodies on the upload route.
pub fn create_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Filename metadata
        .route("/metadata/parse", post(api::metadata::parse))
        .route("/metadata/parse/batch", post(api::metadata::parse_batch))
        // Albums
        .route(
            "/albums",
            get(api::albums::list_albums).post(api::albums::create_album),
        )
        .route(
            "/albums/:id",
            get(api::albums::get_album)
                .put(api::albums::update_album)
                .delete(api::albums::delete_album),
        )
        // Uploads
        .route(
            "/uploads",
            post(api::uploads::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
