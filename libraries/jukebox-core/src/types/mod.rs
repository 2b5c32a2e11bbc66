mod album;
mod ids;
mod metadata;

pub use album::{Album, AlbumId, CreateAlbum, UpdateAlbum};
pub use ids::UserId;
pub use metadata::{ParsedMetadata, TrackMetadata, UNKNOWN_ARTIST};
