//! # Spotify Integration Module
//!
//! The upstream collaborator of PlayLab: everything that talks to the Spotify
//! Web API lives here.
//!
//! ```text
//! CLI (analyze, auth)
//!          ↓
//! PlaylistSource ── SpotifyClient
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     └── Playlist retrieval (paginated)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the PKCE flow: a random verifier and its SHA256
//! challenge, the user's browser for authorization, a temporary local server
//! for the callback and the code exchange. Tokens are cached by
//! [`crate::management::TokenManager`] and refreshed shortly before expiry.
//!
//! ## Playlist retrieval
//!
//! [`playlist`] fetches the playlist name and then pages through its tracks
//! 100 at a time, following the `next` link until it is null. Each remote
//! track is normalized into a [`crate::model::Song`].
//!
//! A client is built once per run and passed to whatever needs it; there is
//! no process-wide client.
//!
//! ## Errors
//!
//! - 502 responses are retried after ten seconds, 429 responses after the
//!   `Retry-After` delay, at most three times
//! - 404 becomes [`crate::error::AppError::NotFound`]
//! - authentication and transport failures become
//!   [`crate::error::AppError::UpstreamUnavailable`]
//!
//! ## Endpoints
//!
//! - `GET /playlists/{id}` - playlist name
//! - `GET /playlists/{id}/tracks` - playlist items
//! - `POST /api/token` - token exchange and refresh

pub mod auth;
pub mod playlist;

pub use playlist::{FetchedPlaylist, PlaylistSource, SpotifyClient};
