use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An artist credited on a song.
///
/// Statistics group artists by `name`, the `id` is carried along for
/// reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single playlist entry, normalized from the remote track record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    id: String,
    title: String,
    album: String,
    artists: Vec<Artist>,
    duration_ms: u64,
    explicit: bool,
}

impl Song {
    /// Creates a song, rejecting an empty artist list.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        album: impl Into<String>,
        artists: Vec<Artist>,
        duration_ms: u64,
        explicit: bool,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if artists.is_empty() {
            return Err(ModelError::NoArtists(id));
        }

        Ok(Self {
            id,
            title: title.into(),
            album: album.into(),
            artists,
            duration_ms,
            explicit,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn explicit(&self) -> bool {
        self.explicit
    }

    /// A song is collaborative when it is credited to more than one artist.
    pub fn is_collaborative(&self) -> bool {
        self.artists.len() > 1
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_ms / 1000
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let explicit_tag = if self.explicit { " [E]" } else { "" };
        let artist_names = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "'{}'{} by {} from '{}' ({}s)",
            self.title,
            explicit_tag,
            artist_names,
            self.album,
            self.duration_seconds()
        )
    }
}
