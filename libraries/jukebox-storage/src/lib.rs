//! Jukebox Storage
//!
//! `SQLite` persistence for the jukebox backend.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity owns its own queries (`albums`)
//! - **Bounded reconnect**: `connect_with_retry` tries a fixed number of
//!   times with a fixed delay, then gives up
//! - **Embedded migrations**: the schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use jukebox_storage::{connect_with_retry, run_migrations, LocalStorageContext, RetryPolicy};
//! use jukebox_core::AlbumStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = connect_with_retry("sqlite://jukebox.db", &RetryPolicy::default()).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let albums = storage.get_all_albums().await?;
//! # Ok(())
//! # }
//! ```

mod connection;
mod context;
mod error;

// Vertical slices
pub mod albums;

pub use connection::{connect_with_retry, create_pool, RetryPolicy};
pub use context::LocalStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, after the pool is connected.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("database migrations applied");
    Ok(())
}
