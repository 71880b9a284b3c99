use discograph_core::{Album, Artist};

#[test]
fn new_album_carries_unsaved_sentinel() {
    let album = Album::new("Super Trouper", 5000);

    assert_eq!(album.id, Album::UNSAVED_ID);
    assert!(!album.is_persisted());
}

#[test]
fn album_from_row_fields_is_persisted() {
    let album = Album::with_id(9001, "Californication", 3000);

    assert!(album.is_persisted());
    assert_eq!(album.title, "Californication");
    assert_eq!(album.artist_id, 3000);
}

#[test]
fn artist_equality_requires_both_id_and_name() {
    let rhcp = Artist::new(3000, "Red Hot Chili Peppers");

    assert_eq!(rhcp, Artist::new(3000, "Red Hot Chili Peppers"));
    assert_ne!(rhcp, Artist::new(3000, "Red Hot Chilli Peppers"));
    assert_ne!(rhcp, Artist::new(3001, "Red Hot Chili Peppers"));
}

#[test]
fn models_roundtrip_through_serde() {
    let artist = Artist::new(4000, "Pink Floyd");
    let json = serde_json::to_string(&artist).unwrap();
    assert_eq!(serde_json::from_str::<Artist>(&json).unwrap(), artist);

    let album = Album::with_id(9002, "The Wall", 4000);
    let json = serde_json::to_string(&album).unwrap();
    assert_eq!(serde_json::from_str::<Album>(&json).unwrap(), album);
}
