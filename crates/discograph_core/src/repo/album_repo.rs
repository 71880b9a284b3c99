//! Album repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Parameterized CRUD over the `Album` table, keyed by primary id.
//!
//! # Invariants
//! - Titles round-trip byte-for-byte, including quotes and SQL
//!   metacharacters (parameter binding, never string splicing).
//! - `insert` always creates a new row; any pre-set id on the value is
//!   ignored and the store-assigned id is returned.
//! - `update`/`delete` match on `AlbumId` alone and report "no row
//!   matched" as `Ok(false)`, reserving `Err` for store failures.

use crate::db::open_db;
use crate::model::album::{Album, AlbumId};
use crate::model::artist::ArtistId;
use crate::repo::RepoResult;
use rusqlite::{params, Row};
use std::path::PathBuf;

const ALBUM_SELECT_SQL: &str = "SELECT AlbumId, Title, ArtistId FROM Album";

/// Repository interface for album CRUD operations.
pub trait AlbumRepository {
    /// Returns the albums of one artist ordered by id ascending.
    fn fetch_by_artist(&self, artist_id: ArtistId) -> RepoResult<Vec<Album>>;
    /// Inserts a new row and returns the store-assigned id.
    fn insert(&self, album: &Album) -> RepoResult<AlbumId>;
    /// Updates title and artist of the row matching `album.id`.
    /// Returns `false` when no row matched.
    fn update(&self, album: &Album) -> RepoResult<bool>;
    /// Deletes the row matching `album.id`. Returns `false` when no row
    /// existed (idempotent no-op).
    fn delete(&self, album: &Album) -> RepoResult<bool>;
}

/// SQLite-backed album repository.
///
/// Same connection model as the artist repository: a store location at
/// construction, one scoped connection per method call.
pub struct SqliteAlbumRepository {
    store: PathBuf,
}

impl SqliteAlbumRepository {
    /// Creates a repository targeting the database file at `store`.
    pub fn new(store: impl Into<PathBuf>) -> Self {
        Self {
            store: store.into(),
        }
    }
}

impl AlbumRepository for SqliteAlbumRepository {
    fn fetch_by_artist(&self, artist_id: ArtistId) -> RepoResult<Vec<Album>> {
        let conn = open_db(&self.store)?;
        let mut stmt = conn.prepare(&format!(
            "{ALBUM_SELECT_SQL} WHERE ArtistId = ?1 ORDER BY AlbumId ASC;"
        ))?;
        let mut rows = stmt.query(params![artist_id])?;

        let mut albums = Vec::new();
        while let Some(row) = rows.next()? {
            albums.push(parse_album_row(row)?);
        }

        Ok(albums)
    }

    fn insert(&self, album: &Album) -> RepoResult<AlbumId> {
        let conn = open_db(&self.store)?;

        // AlbumId is left out so the store generates it, even when the
        // value carries a stale positive id from an earlier fetch.
        conn.execute(
            "INSERT INTO Album (Title, ArtistId) VALUES (?1, ?2);",
            params![album.title.as_str(), album.artist_id],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, album: &Album) -> RepoResult<bool> {
        let conn = open_db(&self.store)?;

        let changed = conn.execute(
            "UPDATE Album SET Title = ?1, ArtistId = ?2 WHERE AlbumId = ?3;",
            params![album.title.as_str(), album.artist_id, album.id],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, album: &Album) -> RepoResult<bool> {
        let conn = open_db(&self.store)?;

        let changed = conn.execute(
            "DELETE FROM Album WHERE AlbumId = ?1;",
            params![album.id],
        )?;

        Ok(changed > 0)
    }
}

fn parse_album_row(row: &Row<'_>) -> RepoResult<Album> {
    Ok(Album {
        id: row.get("AlbumId")?,
        title: row.get("Title")?,
        artist_id: row.get("ArtistId")?,
    })
}
