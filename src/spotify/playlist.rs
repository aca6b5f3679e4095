use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    config::SpotifyConfig,
    error::AppError,
    management::TokenManager,
    model::{Artist, Song},
    types::{PlaylistResponse, PlaylistTracksPage, TrackObject},
};

pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNTITLED: &str = "Untitled";

const PAGE_SIZE: u32 = 100;
const MAX_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const TRACK_FIELDS: &str =
    "items(track(id,name,type,explicit,duration_ms,album(name),artists(id,name))),next,total";

/// A playlist as delivered by the upstream service, ready for aggregation.
#[derive(Debug, Clone)]
pub struct FetchedPlaylist {
    pub id: String,
    pub name: String,
    pub songs: Vec<Song>,
}

/// Something that can deliver the songs of a playlist.
///
/// The CLI only talks to this trait, so tests can hand it a fixed playlist
/// instead of a live Spotify client.
#[allow(async_fn_in_trait)]
pub trait PlaylistSource {
    async fn fetch_playlist(&mut self, playlist_id: &str) -> Result<FetchedPlaylist, AppError>;
}

/// Spotify Web API client holding the configuration and the token cache.
pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
    tokens: TokenManager,
    retry_delay: Duration,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig, tokens: TokenManager) -> Self {
        Self {
            http: Client::new(),
            config,
            tokens,
            retry_delay: BAD_GATEWAY_DELAY,
        }
    }

    /// Overrides the pause before retrying a 502 response.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Builds a client from the cached token written by `playlab auth`.
    pub async fn from_cache(config: SpotifyConfig) -> Result<Self, AppError> {
        let tokens = TokenManager::load().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!(
                "no Spotify token found, run playlab auth first ({})",
                e
            ))
        })?;
        Ok(Self::new(config, tokens))
    }

    async fn get_json<T: DeserializeOwned>(
        &mut self,
        url: &str,
        query: &[(&str, String)],
        playlist_id: &str,
    ) -> Result<T, AppError> {
        let mut attempt = 0;

        loop {
            let token = self.tokens.get_valid_token(&self.config).await?;
            let response = self
                .http
                .get(url)
                .query(query)
                .bearer_auth(token)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response.json::<T>().await?);
            }

            attempt += 1;
            match status {
                StatusCode::BAD_GATEWAY if attempt <= MAX_RETRIES => {
                    log::warn!("spotify returned 502 for {}, retrying", url);
                    sleep(self.retry_delay).await;
                }
                StatusCode::TOO_MANY_REQUESTS if attempt <= MAX_RETRIES => {
                    let wait = response
                        .headers()
                        .get(RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);
                    log::warn!("rate limited by spotify, waiting {}s", wait);
                    sleep(Duration::from_secs(wait)).await;
                }
                StatusCode::NOT_FOUND => return Err(AppError::NotFound(playlist_id.to_string())),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "spotify rejected the credentials ({}), run playlab auth",
                        status
                    )));
                }
                _ => {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "spotify responded with {}",
                        status
                    )));
                }
            }
        }
    }
}

impl PlaylistSource for SpotifyClient {
    async fn fetch_playlist(&mut self, playlist_id: &str) -> Result<FetchedPlaylist, AppError> {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Fetching playlist...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let result = self.fetch_all(playlist_id, &pb).await;
        pb.finish_and_clear();
        result
    }
}

impl SpotifyClient {
    async fn fetch_all(
        &mut self,
        playlist_id: &str,
        pb: &ProgressBar,
    ) -> Result<FetchedPlaylist, AppError> {
        let playlist_url = format!("{}/playlists/{}", self.config.api_url, playlist_id);
        let playlist: PlaylistResponse = self
            .get_json(&playlist_url, &[("fields", "id,name".to_string())], playlist_id)
            .await?;

        let mut songs: Vec<Song> = Vec::new();
        let mut next_url = Some(format!("{}/tracks", playlist_url));
        let mut query = vec![
            ("limit", PAGE_SIZE.to_string()),
            ("offset", "0".to_string()),
            ("fields", TRACK_FIELDS.to_string()),
            ("additional_types", "track".to_string()),
        ];

        while let Some(url) = next_url {
            let page: PlaylistTracksPage = self.get_json(&url, &query, playlist_id).await?;
            // the `next` link already carries every query parameter
            query.clear();

            for item in page.items {
                if let Some(song) = item.track.and_then(song_from_track) {
                    songs.push(song);
                }
            }

            pb.set_message(format!(
                "Fetched {}/{} tracks of '{}'...",
                songs.len(),
                page.total.unwrap_or(0),
                playlist.name
            ));
            log::debug!("fetched {} songs so far", songs.len());
            next_url = page.next;
        }

        Ok(FetchedPlaylist {
            id: playlist.id,
            name: playlist.name,
            songs,
        })
    }
}

/// Maps a remote track record into a [`Song`].
///
/// Podcast episodes are skipped. Missing album or artist names fall back to
/// placeholders, a track without artists is credited to a single unknown
/// artist and negative durations are clamped to zero.
pub fn song_from_track(track: TrackObject) -> Option<Song> {
    if track.kind.as_deref().is_some_and(|k| k != "track") {
        return None;
    }

    let mut artists: Vec<Artist> = track
        .artists
        .into_iter()
        .map(|a| {
            Artist::new(
                a.id.unwrap_or_default(),
                a.name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            )
        })
        .collect();
    if artists.is_empty() {
        artists.push(Artist::new("", UNKNOWN_ARTIST));
    }

    let id = track.id.unwrap_or_default();
    let raw_duration = track.duration_ms.unwrap_or(0);
    if raw_duration < 0 {
        log::warn!("track {} has negative duration {}, using 0", id, raw_duration);
    }

    let album = track
        .album
        .and_then(|a| a.name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

    Song::new(
        id,
        track.name.unwrap_or_else(|| UNTITLED.to_string()),
        album,
        artists,
        raw_duration.max(0) as u64,
        track.explicit.unwrap_or(false),
    )
    .ok()
}
