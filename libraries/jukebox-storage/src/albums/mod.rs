use jukebox_core::{error::Result, types::*, JukeboxError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_ALBUM: &str = "SELECT id, title, artist, uploaded_by, year, genre, cover_art_path,
        track_count, created_at, updated_at
 FROM albums";

const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%SZ', 'now')";

fn from_row(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        uploaded_by: UserId::new(row.get::<String, _>("uploaded_by")),
        year: row.get("year"),
        genre: row.get("genre"),
        cover_art_path: row.get("cover_art_path"),
        track_count: row.get("track_count"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_conflict(err: sqlx::Error, artist: &str, title: &str, user: &UserId) -> JukeboxError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            JukeboxError::duplicate(format!(
                "album '{}' by '{}' already exists for user {}",
                title, artist, user
            ))
        }
        other => other.into(),
    }
}

/// Title and artist form the unique key; they are stored trimmed and never blank
fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(JukeboxError::invalid_input(format!(
            "album {} must not be blank",
            field
        )));
    }
    Ok(value.to_string())
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!("{SELECT_ALBUM} ORDER BY artist, title"))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_by_user(pool: &SqlitePool, user: &UserId) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!(
        "{SELECT_ALBUM} WHERE uploaded_by = ? ORDER BY artist, title"
    ))
    .bind(user.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(&format!("{SELECT_ALBUM} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(from_row))
}

pub async fn find_by_key(
    pool: &SqlitePool,
    artist: &str,
    title: &str,
    user: &UserId,
) -> Result<Option<Album>> {
    let row = sqlx::query(&format!(
        "{SELECT_ALBUM} WHERE artist = ? AND title = ? AND uploaded_by = ?"
    ))
    .bind(artist)
    .bind(title)
    .bind(user.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Insert a new album.
///
/// Returns `JukeboxError::Duplicate` if `(artist, title, uploaded_by)` is taken.
pub async fn create(pool: &SqlitePool, mut album: CreateAlbum) -> Result<Album> {
    album.title = required("title", &album.title)?;
    album.artist = required("artist", &album.artist)?;

    let result = sqlx::query(
        "INSERT INTO albums (title, artist, uploaded_by, year, genre)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&album.title)
    .bind(&album.artist)
    .bind(album.uploaded_by.as_str())
    .bind(album.year)
    .bind(&album.genre)
    .execute(pool)
    .await
    .map_err(|e| map_conflict(e, &album.artist, &album.title, &album.uploaded_by))?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| JukeboxError::storage("Failed to retrieve created album"))
}

/// Record one uploaded track against the album, creating it if needed.
///
/// A new album starts with a track count of one.
pub async fn find_or_create(pool: &SqlitePool, mut album: CreateAlbum) -> Result<Album> {
    album.title = required("title", &album.title)?;
    album.artist = required("artist", &album.artist)?;

    sqlx::query(&format!(
        "INSERT INTO albums (title, artist, uploaded_by, year, genre, track_count)
         VALUES (?, ?, ?, ?, ?, 1)
         ON CONFLICT (artist, title, uploaded_by) DO UPDATE SET
             track_count = track_count + 1,
             year = COALESCE(albums.year, excluded.year),
             genre = COALESCE(albums.genre, excluded.genre),
             updated_at = {NOW}"
    ))
    .bind(&album.title)
    .bind(&album.artist)
    .bind(album.uploaded_by.as_str())
    .bind(album.year)
    .bind(&album.genre)
    .execute(pool)
    .await?;

    find_by_key(pool, &album.artist, &album.title, &album.uploaded_by)
        .await?
        .ok_or_else(|| JukeboxError::storage("Failed to retrieve upserted album"))
}

pub async fn release_track(pool: &SqlitePool, id: AlbumId) -> Result<()> {
    let result = sqlx::query(&format!(
        "UPDATE albums SET track_count = MAX(track_count - 1, 0), updated_at = {NOW}
         WHERE id = ?"
    ))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(JukeboxError::AlbumNotFound(id));
    }
    Ok(())
}

pub async fn update(pool: &SqlitePool, id: AlbumId, update: UpdateAlbum) -> Result<Album> {
    let new_title = update.title.as_deref().map(|t| required("title", t)).transpose()?;
    let new_artist = update.artist.as_deref().map(|a| required("artist", a)).transpose()?;

    let existing = get_by_id(pool, id)
        .await?
        .ok_or(JukeboxError::AlbumNotFound(id))?;

    if update.is_empty() {
        return Ok(existing);
    }

    let title = new_title.unwrap_or(existing.title);
    let artist = new_artist.unwrap_or(existing.artist);
    let year = update.year.or(existing.year);
    let genre = update.genre.or(existing.genre);
    let cover_art_path = update.cover_art_path.or(existing.cover_art_path);

    sqlx::query(&format!(
        "UPDATE albums
         SET title = ?, artist = ?, year = ?, genre = ?, cover_art_path = ?, updated_at = {NOW}
         WHERE id = ?"
    ))
    .bind(&title)
    .bind(&artist)
    .bind(year)
    .bind(&genre)
    .bind(&cover_art_path)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| map_conflict(e, &artist, &title, &existing.uploaded_by))?;

    get_by_id(pool, id)
        .await?
        .ok_or(JukeboxError::AlbumNotFound(id))
}

pub async fn delete(pool: &SqlitePool, id: AlbumId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
