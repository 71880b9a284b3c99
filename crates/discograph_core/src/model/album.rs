//! Album value object.
//!
//! # Invariants
//! - `id == Album::UNSAVED_ID` marks a value that has no store row yet;
//!   the store assigns the real id on insert.
//! - `artist_id` must reference an existing artist row. The store enforces
//!   this (foreign key), not the model.

use crate::model::artist::ArtistId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for an album row.
pub type AlbumId = i64;

/// One row of the `Album` table as an in-memory value.
///
/// Deleting the row leaves in-memory copies stale on purpose; there is no
/// cache layer to invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Store-assigned primary key, or `UNSAVED_ID` before insert.
    pub id: AlbumId,
    /// Album title. Mutable; supports update-in-place.
    pub title: String,
    /// Foreign key to the owning artist. No cascading delete.
    pub artist_id: ArtistId,
}

impl Album {
    /// Sentinel id for an album that has not been persisted yet.
    pub const UNSAVED_ID: AlbumId = -1;

    /// Creates an album that is not yet persisted.
    ///
    /// Used before an insert; the store generates the primary key.
    pub fn new(title: impl Into<String>, artist_id: ArtistId) -> Self {
        Self {
            id: Self::UNSAVED_ID,
            title: title.into(),
            artist_id,
        }
    }

    /// Creates an album value from a persisted row's fields.
    pub fn with_id(id: AlbumId, title: impl Into<String>, artist_id: ArtistId) -> Self {
        Self {
            id,
            title: title.into(),
            artist_id,
        }
    }

    /// Returns whether this value carries a store-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != Self::UNSAVED_ID
    }
}

impl Display for Album {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (album {}, artist {})",
            self.title, self.id, self.artist_id
        )
    }
}
