//! Catalog use-case service.
//!
//! # Responsibility
//! - Compose artist and album repositories behind use-case entry points,
//!   including the artist → albums relationship traversal.
//!
//! # Invariants
//! - Delegates all persistence to the repository traits; storage-agnostic.

use crate::model::album::Album;
use crate::model::artist::{Artist, ArtistId};
use crate::repo::album_repo::AlbumRepository;
use crate::repo::artist_repo::ArtistRepository;
use crate::repo::RepoResult;

/// Use-case wrapper over artist and album repositories.
pub struct CatalogService<A: ArtistRepository, B: AlbumRepository> {
    artists: A,
    albums: B,
}

impl<A: ArtistRepository, B: AlbumRepository> CatalogService<A, B> {
    /// Creates a service from repository implementations for both entities.
    pub fn new(artists: A, albums: B) -> Self {
        Self { artists, albums }
    }

    /// Lists all artists ordered by name.
    pub fn list_artists(&self) -> RepoResult<Vec<Artist>> {
        self.artists.fetch_all()
    }

    /// Fetches one artist together with its albums.
    ///
    /// Returns `Ok(None)` when the artist does not exist; an existing
    /// artist with no albums yields an empty album vec.
    pub fn artist_with_albums(&self, id: ArtistId) -> RepoResult<Option<(Artist, Vec<Album>)>> {
        let Some(artist) = self.artists.fetch_by_id(id)? else {
            return Ok(None);
        };
        let albums = self.albums.fetch_by_artist(artist.id)?;
        Ok(Some((artist, albums)))
    }

    /// Lists every artist paired with its albums, ordered by artist name.
    pub fn discography(&self) -> RepoResult<Vec<(Artist, Vec<Album>)>> {
        let mut entries = Vec::new();
        for artist in self.artists.fetch_all()? {
            let albums = self.albums.fetch_by_artist(artist.id)?;
            entries.push((artist, albums));
        }
        Ok(entries)
    }

    /// Adds a new album and returns it with the store-assigned id.
    pub fn add_album(&self, title: impl Into<String>, artist_id: ArtistId) -> RepoResult<Album> {
        let mut album = Album::new(title, artist_id);
        album.id = self.albums.insert(&album)?;
        Ok(album)
    }

    /// Renames an album in place. Returns `false` when its row is gone.
    pub fn rename_album(&self, album: &mut Album, title: impl Into<String>) -> RepoResult<bool> {
        album.title = title.into();
        self.albums.update(album)
    }

    /// Removes an album's row. Returns `false` when no row existed.
    pub fn remove_album(&self, album: &Album) -> RepoResult<bool> {
        self.albums.delete(album)
    }
}
