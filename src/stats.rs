//! Playlist statistics aggregation.
//!
//! [`PlaylistStats::build`] computes every statistic in a single forward pass
//! over the songs and never changes afterwards. All frequency tables keep the
//! order in which keys were first seen in the playlist; that order is the
//! tie-break for rankings and for the most represented album.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::model::Song;

/// Placeholder shown for statistics that have no qualifying song or album.
pub const NOT_AVAILABLE: &str = "N/A";

/// Title and duration of an extremal song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongExtreme {
    pub title: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumCount {
    pub name: String,
    pub count: usize,
}

/// Read-only summary of a playlist.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistStats {
    id: String,
    name: String,
    #[serde(skip)]
    songs: Vec<Song>,
    num_songs: usize,
    num_artists: usize,
    total_duration_ms: u64,
    duration_minutes: f64,
    num_explicit_songs: usize,
    num_collaborative_songs: usize,
    num_non_collaborative_songs: usize,
    artist_collaboration_counts: IndexMap<String, usize>,
    artist_frequencies: IndexMap<String, usize>,
    album_counts: IndexMap<String, usize>,
    num_unique_albums: usize,
    #[serde(serialize_with = "album_or_placeholder")]
    most_represented_album: Option<AlbumCount>,
    #[serde(serialize_with = "song_or_placeholder")]
    shortest_song: Option<SongExtreme>,
    #[serde(serialize_with = "song_or_placeholder")]
    longest_song: Option<SongExtreme>,
}

impl PlaylistStats {
    /// Aggregates `songs` into a summary. An empty list is valid and yields a
    /// summary where every count is zero and no extremal song or album exists.
    pub fn build(id: impl Into<String>, name: impl Into<String>, songs: Vec<Song>) -> Self {
        let mut total_duration_ms: u64 = 0;
        let mut num_explicit_songs = 0;
        let mut num_collaborative_songs = 0;
        let mut artist_collaboration_counts: IndexMap<String, usize> = IndexMap::new();
        let mut artist_frequencies: IndexMap<String, usize> = IndexMap::new();
        let mut album_counts: IndexMap<String, usize> = IndexMap::new();
        let mut shortest_song: Option<SongExtreme> = None;
        let mut longest_song: Option<SongExtreme> = None;

        for song in &songs {
            let duration_ms = song.duration_ms();
            total_duration_ms = total_duration_ms.saturating_add(duration_ms);

            if song.explicit() {
                num_explicit_songs += 1;
            }

            // every artist of a collaborative song gets +1, the song counts once
            if song.is_collaborative() {
                num_collaborative_songs += 1;
                for artist in song.artists() {
                    *artist_collaboration_counts
                        .entry(artist.name.clone())
                        .or_insert(0) += 1;
                }
            }

            for artist in song.artists() {
                *artist_frequencies.entry(artist.name.clone()).or_insert(0) += 1;
            }

            *album_counts.entry(song.album().to_string()).or_insert(0) += 1;

            // zero-length songs never count as the shortest
            let is_shorter = shortest_song
                .as_ref()
                .is_none_or(|s| duration_ms < s.duration_ms);
            if duration_ms > 0 && is_shorter {
                shortest_song = Some(SongExtreme {
                    title: song.title().to_string(),
                    duration_ms,
                });
            }

            let longest_ms = longest_song.as_ref().map_or(0, |s| s.duration_ms);
            if duration_ms > longest_ms {
                longest_song = Some(SongExtreme {
                    title: song.title().to_string(),
                    duration_ms,
                });
            }
        }

        let num_songs = songs.len();
        let most_represented_album = most_common(&album_counts).map(|(name, count)| AlbumCount {
            name: name.to_string(),
            count,
        });

        Self {
            id: id.into(),
            name: name.into(),
            num_songs,
            num_artists: artist_frequencies.len(),
            total_duration_ms,
            duration_minutes: round_to_hundredths(total_duration_ms as f64 / 60_000.0),
            num_explicit_songs,
            num_collaborative_songs,
            num_non_collaborative_songs: num_songs - num_collaborative_songs,
            artist_collaboration_counts,
            artist_frequencies,
            num_unique_albums: album_counts.len(),
            album_counts,
            most_represented_album,
            shortest_song,
            longest_song,
            songs,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// No songs were fetched, there is nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.num_songs == 0
    }

    pub fn num_songs(&self) -> usize {
        self.num_songs
    }

    /// Number of distinct artist names across all songs.
    pub fn num_artists(&self) -> usize {
        self.num_artists
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    /// Total duration in minutes, rounded to two decimals.
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn num_explicit_songs(&self) -> usize {
        self.num_explicit_songs
    }

    pub fn num_collaborative_songs(&self) -> usize {
        self.num_collaborative_songs
    }

    pub fn num_non_collaborative_songs(&self) -> usize {
        self.num_non_collaborative_songs
    }

    /// Artist name to number of collaborative songs they appear on.
    pub fn artist_collaboration_counts(&self) -> &IndexMap<String, usize> {
        &self.artist_collaboration_counts
    }

    /// Artist name to number of songs they appear on.
    pub fn artist_frequencies(&self) -> &IndexMap<String, usize> {
        &self.artist_frequencies
    }

    /// Album name to number of songs from that album.
    pub fn album_counts(&self) -> &IndexMap<String, usize> {
        &self.album_counts
    }

    pub fn num_unique_albums(&self) -> usize {
        self.num_unique_albums
    }

    /// Album with the most songs. When several albums share the highest
    /// count, the one appearing first in the playlist wins. Returns
    /// `("N/A", 0)` for an empty playlist.
    pub fn most_represented_album(&self) -> (&str, usize) {
        self.most_represented_album
            .as_ref()
            .map_or((NOT_AVAILABLE, 0), |a| (a.name.as_str(), a.count))
    }

    /// Shortest song with a positive duration, if any.
    pub fn shortest_song(&self) -> Option<&SongExtreme> {
        self.shortest_song.as_ref()
    }

    /// Longest song with a positive duration, if any.
    pub fn longest_song(&self) -> Option<&SongExtreme> {
        self.longest_song.as_ref()
    }

    pub fn shortest_or_default(&self) -> SongExtreme {
        self.shortest_song.clone().unwrap_or_else(placeholder_song)
    }

    pub fn longest_or_default(&self) -> SongExtreme {
        self.longest_song.clone().unwrap_or_else(placeholder_song)
    }

    /// Artists ranked by the number of songs they appear on, descending.
    /// Ties keep first-seen playlist order. `None` returns every artist.
    pub fn top_artists(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        rank(&self.artist_frequencies, limit)
    }

    /// Artists ranked by the number of collaborative songs they appear on.
    pub fn top_collaborators(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        rank(&self.artist_collaboration_counts, limit)
    }
}

fn placeholder_song() -> SongExtreme {
    SongExtreme {
        title: NOT_AVAILABLE.to_string(),
        duration_ms: 0,
    }
}

fn album_or_placeholder<S: Serializer>(
    album: &Option<AlbumCount>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match album {
        Some(album) => album.serialize(serializer),
        None => AlbumCount {
            name: NOT_AVAILABLE.to_string(),
            count: 0,
        }
        .serialize(serializer),
    }
}

fn song_or_placeholder<S: Serializer>(
    song: &Option<SongExtreme>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match song {
        Some(song) => song.serialize(serializer),
        None => placeholder_song().serialize(serializer),
    }
}

fn most_common(counts: &IndexMap<String, usize>) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (key, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((key.as_str(), count));
        }
    }
    best
}

fn rank(counts: &IndexMap<String, usize>, limit: Option<usize>) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, &c)| (k.as_str(), c)).collect();
    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
