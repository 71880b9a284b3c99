//! Artist repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read-only access to the `Artist` table.
//!
//! # Invariants
//! - `fetch_all` orders by name ascending and returns an empty vec for an
//!   empty table.
//! - `fetch_by_id` reports a missing row as `Ok(None)`, never as an error.

use crate::db::open_db;
use crate::model::artist::{Artist, ArtistId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Row};
use std::path::PathBuf;

const ARTIST_SELECT_SQL: &str = "SELECT ArtistId, Name FROM Artist";

/// Repository interface for artist lookups.
pub trait ArtistRepository {
    /// Returns all artists ordered by name ascending.
    fn fetch_all(&self) -> RepoResult<Vec<Artist>>;
    /// Returns the artist with the given id, or `None` when no row matches.
    fn fetch_by_id(&self, id: ArtistId) -> RepoResult<Option<Artist>>;
}

/// SQLite-backed artist repository.
///
/// Holds only the store location; every method opens a scoped connection
/// and drops it before returning, so the same repository value can target
/// a production store or an isolated test store.
pub struct SqliteArtistRepository {
    store: PathBuf,
}

impl SqliteArtistRepository {
    /// Creates a repository targeting the database file at `store`.
    pub fn new(store: impl Into<PathBuf>) -> Self {
        Self {
            store: store.into(),
        }
    }
}

impl ArtistRepository for SqliteArtistRepository {
    fn fetch_all(&self) -> RepoResult<Vec<Artist>> {
        let conn = open_db(&self.store)?;
        let mut stmt = conn.prepare(&format!("{ARTIST_SELECT_SQL} ORDER BY Name ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut artists = Vec::new();
        while let Some(row) = rows.next()? {
            artists.push(parse_artist_row(row)?);
        }

        Ok(artists)
    }

    fn fetch_by_id(&self, id: ArtistId) -> RepoResult<Option<Artist>> {
        let conn = open_db(&self.store)?;
        let mut stmt = conn.prepare(&format!("{ARTIST_SELECT_SQL} WHERE ArtistId = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_artist_row(row)?));
        }

        Ok(None)
    }
}

fn parse_artist_row(row: &Row<'_>) -> RepoResult<Artist> {
    let id: ArtistId = row.get("ArtistId")?;
    let name = row.get::<_, Option<String>>("Name")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL Name in Artist row {id}"))
    })?;

    Ok(Artist { id, name })
}
