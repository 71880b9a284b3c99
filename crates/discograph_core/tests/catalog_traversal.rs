use discograph_core::{fixture, CatalogService, SqliteAlbumRepository, SqliteArtistRepository};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn artist_with_albums_traverses_the_relationship() {
    let (_dir, service) = seeded_service();

    let (artist, albums) = service.artist_with_albums(3000).unwrap().unwrap();

    assert_eq!(artist.name, "Red Hot Chili Peppers");
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].title, "Californication");
    assert_eq!(albums[1].title, "By the Way");
}

#[test]
fn artist_with_albums_is_none_for_unknown_artist() {
    let (_dir, service) = seeded_service();

    assert!(service.artist_with_albums(-1000).unwrap().is_none());
}

#[test]
fn artist_without_albums_yields_empty_album_vec() {
    let (_dir, service) = seeded_service();

    let (artist, albums) = service.artist_with_albums(5000).unwrap().unwrap();
    assert_eq!(artist.name, "ABBA");
    assert!(albums.is_empty());
}

#[test]
fn discography_pairs_every_artist_with_its_albums_in_name_order() {
    let (_dir, service) = seeded_service();

    let entries = service.discography().unwrap();

    let names: Vec<&str> = entries
        .iter()
        .map(|(artist, _)| artist.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "ABBA",
            "Led Zeppelin",
            "Pink Floyd",
            "Radiohead",
            "Red Hot Chili Peppers",
        ]
    );

    let album_counts: Vec<usize> = entries.iter().map(|(_, albums)| albums.len()).collect();
    assert_eq!(album_counts, vec![0, 0, 1, 0, 2]);
}

#[test]
fn add_rename_remove_album_lifecycle() {
    let (_dir, service) = seeded_service();

    let mut album = service.add_album("Super Trouper", 5000).unwrap();
    assert!(album.is_persisted());

    assert!(service.rename_album(&mut album, "Super Trouper (Deluxe)").unwrap());
    let (_, albums) = service.artist_with_albums(5000).unwrap().unwrap();
    assert_eq!(albums, vec![album.clone()]);
    assert_eq!(albums[0].title, "Super Trouper (Deluxe)");

    assert!(service.remove_album(&album).unwrap());
    // Removing again is a logical no-op, not an error.
    assert!(!service.remove_album(&album).unwrap());

    let (_, albums) = service.artist_with_albums(5000).unwrap().unwrap();
    assert!(albums.is_empty());
}

fn seeded_service() -> (
    TempDir,
    CatalogService<SqliteArtistRepository, SqliteAlbumRepository>,
) {
    let dir = tempfile::tempdir().unwrap();
    let store: PathBuf = dir.path().join("catalog.db");
    fixture::reset(&store).unwrap();

    let service = CatalogService::new(
        SqliteArtistRepository::new(&store),
        SqliteAlbumRepository::new(&store),
    );
    (dir, service)
}
