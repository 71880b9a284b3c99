//! Core data-access logic for the Discograph music catalog.
//! This crate is the single source of truth for catalog persistence rules.

pub mod db;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::album::{Album, AlbumId};
pub use model::artist::{Artist, ArtistId};
pub use repo::album_repo::{AlbumRepository, SqliteAlbumRepository};
pub use repo::artist_repo::{ArtistRepository, SqliteArtistRepository};
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
