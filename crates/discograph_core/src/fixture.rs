//! Test/demo fixture bootstrap.
//!
//! # Responsibility
//! - Reset a scratch store to a fixed known state: drop both tables,
//!   recreate them from the canonical schema, load the seed rows.
//!
//! # Invariants
//! - The recreated schema is byte-identical to the migration schema
//!   (same `include_str!` source), so fixture and migrations cannot
//!   diverge.
//! - Seed ids are stable; tests reference them through the exported
//!   constants.

use crate::db::{open_db, DbResult};
use crate::model::album::AlbumId;
use crate::model::artist::ArtistId;
use rusqlite::params;
use std::path::Path;

const CATALOG_SCHEMA_SQL: &str = include_str!("db/migrations/0001_catalog.sql");

/// Seeded artists as `(id, name)`, in insertion order.
///
/// Name order differs from id order on purpose, so ordering bugs in
/// `fetch_all` are observable.
pub const SEED_ARTISTS: [(ArtistId, &str); 5] = [
    (1000, "Led Zeppelin"),
    (2000, "Radiohead"),
    (3000, "Red Hot Chili Peppers"),
    (4000, "Pink Floyd"),
    (5000, "ABBA"),
];

/// Seeded albums as `(id, title, artist_id)`, in insertion order.
///
/// Red Hot Chili Peppers (3000) owns two albums, ABBA (5000) owns none.
pub const SEED_ALBUMS: [(AlbumId, &str, ArtistId); 3] = [
    (9001, "Californication", 3000),
    (9002, "The Wall", 4000),
    (9003, "By the Way", 3000),
];

/// Resets the store at `store` to the seeded baseline.
///
/// Call before each test (or before a demo run) so every run starts from
/// the same five artists and three albums.
pub fn reset(store: impl AsRef<Path>) -> DbResult<()> {
    let conn = open_db(store)?;

    // Album first: Artist cannot be dropped while Album rows reference it.
    conn.execute_batch("DROP TABLE IF EXISTS Album; DROP TABLE IF EXISTS Artist;")?;
    conn.execute_batch(CATALOG_SCHEMA_SQL)?;

    for (id, name) in SEED_ARTISTS {
        conn.execute(
            "INSERT INTO Artist (ArtistId, Name) VALUES (?1, ?2);",
            params![id, name],
        )?;
    }
    for (id, title, artist_id) in SEED_ALBUMS {
        conn.execute(
            "INSERT INTO Album (AlbumId, Title, ArtistId) VALUES (?1, ?2, ?3);",
            params![id, title, artist_id],
        )?;
    }

    Ok(())
}
