use playlab::error::ModelError;
use playlab::model::{Artist, Song};

#[test]
fn test_song_requires_an_artist() {
    let result = Song::new("id1", "Title", "Album", Vec::new(), 1000, false);
    assert_eq!(result, Err(ModelError::NoArtists("id1".to_string())));
}

#[test]
fn test_collaborative_song() {
    let solo = Song::new("1", "Solo", "Al", vec![Artist::new("a", "A")], 1000, false).unwrap();
    let duet = Song::new(
        "2",
        "Duet",
        "Al",
        vec![Artist::new("a", "A"), Artist::new("b", "B")],
        1000,
        false,
    )
    .unwrap();

    assert!(!solo.is_collaborative());
    assert!(duet.is_collaborative());
}

#[test]
fn test_song_display() {
    let song = Song::new(
        "1",
        "Title",
        "Album",
        vec![Artist::new("a", "A"), Artist::new("b", "B")],
        215_900,
        true,
    )
    .unwrap();

    assert_eq!(song.duration_seconds(), 215);
    assert_eq!(song.to_string(), "'Title' [E] by A, B from 'Album' (215s)");
    assert_eq!(Artist::new("a", "A").to_string(), "A");
}
