//! Jukebox Server Library
//!
//! HTTP backend for the jukebox: filename metadata parsing, album
//! management, and the upload pipeline that ties them together.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{file_storage::FileStorage, upload::UploadService};
pub use state::AppState;
