//! Jukebox Core
//!
//! Shared types, traits, and error handling for the jukebox backend.
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `ParsedMetadata`, `TrackMetadata`, `UserId`
//! - **Core Traits**: `AlbumStore`, `MetadataReader`
//! - **Error Handling**: Unified `JukeboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use jukebox_core::types::{CreateAlbum, UserId};
//!
//! let owner = UserId::new("user-1");
//! let album = CreateAlbum::new("Discovery", "Daft Punk", owner.clone());
//! assert_eq!(album.uploaded_by, owner);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

pub use error::{JukeboxError, Result};
pub use storage::AlbumStore;
pub use traits::MetadataReader;

pub use types::{
    Album, AlbumId, CreateAlbum, ParsedMetadata, TrackMetadata, UpdateAlbum, UserId,
    UNKNOWN_ARTIST,
};
