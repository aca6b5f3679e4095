use playlab::model::{Artist, Song};
use playlab::stats::{PlaylistStats, SongExtreme};

// Helper function to create a test song
fn song(title: &str, duration_ms: u64, explicit: bool, artists: &[&str], album: &str) -> Song {
    Song::new(
        format!("{}_id", title),
        title,
        album,
        artists
            .iter()
            .map(|name| Artist::new(format!("{}_id", name), *name))
            .collect(),
        duration_ms,
        explicit,
    )
    .unwrap()
}

fn two_song_playlist() -> PlaylistStats {
    PlaylistStats::build(
        "pl1",
        "Two Songs",
        vec![
            song("X", 200_000, false, &["A"], "Al1"),
            song("Y", 100_000, true, &["A", "B"], "Al1"),
        ],
    )
}

#[test]
fn test_two_song_summary() {
    let stats = two_song_playlist();

    assert_eq!(stats.id(), "pl1");
    assert_eq!(stats.name(), "Two Songs");
    assert_eq!(stats.num_songs(), 2);
    assert_eq!(stats.num_artists(), 2);
    assert_eq!(stats.total_duration_ms(), 300_000);
    assert_eq!(stats.duration_minutes(), 5.0);
    assert_eq!(stats.num_explicit_songs(), 1);
    assert_eq!(stats.num_collaborative_songs(), 1);
    assert_eq!(stats.num_non_collaborative_songs(), 1);
    assert_eq!(
        stats.shortest_song(),
        Some(&SongExtreme {
            title: "Y".to_string(),
            duration_ms: 100_000
        })
    );
    assert_eq!(
        stats.longest_song(),
        Some(&SongExtreme {
            title: "X".to_string(),
            duration_ms: 200_000
        })
    );
    assert_eq!(stats.most_represented_album(), ("Al1", 2));
    assert_eq!(stats.num_unique_albums(), 1);

    let frequencies: Vec<(&str, usize)> = stats
        .artist_frequencies()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(frequencies, vec![("A", 2), ("B", 1)]);

    let collaborations: Vec<(&str, usize)> = stats
        .artist_collaboration_counts()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(collaborations, vec![("A", 1), ("B", 1)]);
}

#[test]
fn test_empty_playlist() {
    let stats = PlaylistStats::build("empty", "Nothing", Vec::new());

    assert!(stats.is_empty());
    assert_eq!(stats.num_songs(), 0);
    assert_eq!(stats.num_artists(), 0);
    assert_eq!(stats.total_duration_ms(), 0);
    assert_eq!(stats.duration_minutes(), 0.0);
    assert_eq!(stats.num_unique_albums(), 0);
    assert_eq!(stats.most_represented_album(), ("N/A", 0));
    assert!(stats.shortest_song().is_none());
    assert!(stats.longest_song().is_none());

    let placeholder = SongExtreme {
        title: "N/A".to_string(),
        duration_ms: 0,
    };
    assert_eq!(stats.shortest_or_default(), placeholder);
    assert_eq!(stats.longest_or_default(), placeholder);
    assert!(stats.top_artists(None).is_empty());
}

#[test]
fn test_zero_length_song_is_never_shortest() {
    let stats = PlaylistStats::build(
        "pl",
        "Durations",
        vec![
            song("Silence", 0, false, &["A"], "Al"),
            song("Long", 5000, false, &["A"], "Al"),
            song("Short", 3000, false, &["A"], "Al"),
        ],
    );

    assert_eq!(stats.shortest_song().map(|s| s.title.as_str()), Some("Short"));
    assert_eq!(stats.shortest_song().map(|s| s.duration_ms), Some(3000));
    assert_eq!(stats.longest_song().map(|s| s.title.as_str()), Some("Long"));
    assert_eq!(stats.longest_song().map(|s| s.duration_ms), Some(5000));
    // zero-length songs still count towards the total
    assert_eq!(stats.total_duration_ms(), 8000);
}

#[test]
fn test_only_zero_length_songs() {
    let stats = PlaylistStats::build(
        "pl",
        "Silence",
        vec![song("Silence", 0, false, &["A"], "Al")],
    );

    assert!(stats.shortest_song().is_none());
    assert!(stats.longest_song().is_none());
    assert_eq!(stats.longest_or_default().title, "N/A");
}

#[test]
fn test_first_extreme_wins_on_equal_duration() {
    let stats = PlaylistStats::build(
        "pl",
        "Equal",
        vec![
            song("First", 1000, false, &["A"], "Al"),
            song("Second", 1000, false, &["A"], "Al"),
        ],
    );

    assert_eq!(stats.shortest_song().map(|s| s.title.as_str()), Some("First"));
    assert_eq!(stats.longest_song().map(|s| s.title.as_str()), Some("First"));
}

#[test]
fn test_three_artist_song_counts_once() {
    let stats = PlaylistStats::build(
        "pl",
        "Trio",
        vec![song("Trio", 1000, false, &["A", "B", "C"], "Al")],
    );

    assert_eq!(stats.num_collaborative_songs(), 1);
    assert_eq!(stats.num_non_collaborative_songs(), 0);
    for artist in ["A", "B", "C"] {
        assert_eq!(stats.artist_collaboration_counts().get(artist), Some(&1));
        assert_eq!(stats.artist_frequencies().get(artist), Some(&1));
    }
}

#[test]
fn test_solo_songs_do_not_count_as_collaborations() {
    let stats = PlaylistStats::build(
        "pl",
        "Solo",
        vec![
            song("One", 1000, false, &["A"], "Al"),
            song("Two", 1000, false, &["A", "B"], "Al"),
        ],
    );

    assert_eq!(stats.artist_frequencies().get("A"), Some(&2));
    assert_eq!(stats.artist_collaboration_counts().get("A"), Some(&1));
    assert_eq!(stats.top_collaborators(None), vec![("A", 1), ("B", 1)]);
}

#[test]
fn test_artists_grouped_by_name_not_id() {
    let stats = PlaylistStats::build(
        "pl",
        "Same name",
        vec![
            Song::new("1", "One", "Al", vec![Artist::new("id1", "A")], 1000, false).unwrap(),
            Song::new("2", "Two", "Al", vec![Artist::new("id2", "A")], 1000, false).unwrap(),
        ],
    );

    assert_eq!(stats.num_artists(), 1);
    assert_eq!(stats.artist_frequencies().get("A"), Some(&2));
}

#[test]
fn test_top_artists_ties_keep_first_seen_order() {
    let stats = PlaylistStats::build(
        "pl",
        "Ties",
        vec![
            song("1", 1000, false, &["C"], "Al"),
            song("2", 1000, false, &["A"], "Al"),
            song("3", 1000, false, &["B"], "Al"),
            song("4", 1000, false, &["A"], "Al"),
            song("5", 1000, false, &["B"], "Al"),
            song("6", 1000, false, &["A"], "Al"),
            song("7", 1000, false, &["B"], "Al"),
        ],
    );

    // frequencies: C=1, A=3, B=3; A was seen before B
    assert_eq!(stats.top_artists(Some(2)), vec![("A", 3), ("B", 3)]);
    assert_eq!(
        stats.top_artists(None),
        vec![("A", 3), ("B", 3), ("C", 1)]
    );
    assert_eq!(stats.top_artists(Some(10)).len(), 3);
    assert!(stats.top_artists(Some(0)).is_empty());
}

#[test]
fn test_most_represented_album_tie_prefers_first_album() {
    let stats = PlaylistStats::build(
        "pl",
        "Albums",
        vec![
            song("1", 1000, false, &["A"], "Second"),
            song("2", 1000, false, &["A"], "First"),
            song("3", 1000, false, &["A"], "First"),
            song("4", 1000, false, &["A"], "Second"),
            song("5", 1000, false, &["A"], "Third"),
        ],
    );

    assert_eq!(stats.most_represented_album(), ("Second", 2));
    assert_eq!(stats.num_unique_albums(), 3);
}

#[test]
fn test_invariants_hold_for_mixed_playlist() {
    let stats = PlaylistStats::build(
        "pl",
        "Mixed",
        vec![
            song("1", 180_000, true, &["A", "B"], "Al1"),
            song("2", 240_000, false, &["C"], "Al2"),
            song("3", 0, false, &["A"], "Al1"),
            song("4", 210_500, true, &["B", "C", "D"], "Al3"),
            song("5", 195_250, false, &["E"], "Al2"),
        ],
    );

    assert_eq!(
        stats.num_collaborative_songs() + stats.num_non_collaborative_songs(),
        stats.num_songs()
    );
    assert_eq!(stats.album_counts().values().sum::<usize>(), stats.num_songs());
    assert!(stats.artist_frequencies().values().sum::<usize>() >= stats.num_artists());
    assert_eq!(stats.num_artists(), 5);
    assert_eq!(stats.num_explicit_songs(), 2);
    assert_eq!(stats.songs().len(), 5);
}

#[test]
fn test_duration_minutes_rounded_to_two_decimals() {
    let stats = PlaylistStats::build(
        "pl",
        "Rounding",
        vec![song("1", 100_000, false, &["A"], "Al")],
    );

    // 100000 / 60000 = 1.6666...
    assert_eq!(stats.duration_minutes(), 1.67);
}
