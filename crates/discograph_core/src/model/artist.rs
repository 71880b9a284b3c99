//! Artist value object.
//!
//! # Invariants
//! - `id` is assigned by the store and immutable after creation.
//! - Two artists are equal iff both `id` and `name` match (derived eq).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for an artist row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArtistId = i64;

/// One row of the `Artist` table as an in-memory value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Store-assigned primary key.
    pub id: ArtistId,
    /// Display name. The model enforces no uniqueness.
    pub name: String,
}

impl Artist {
    /// Builds an artist value from a persisted row's fields.
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for Artist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (artist {})", self.name, self.id)
    }
}
