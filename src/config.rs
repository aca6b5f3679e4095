//! Configuration management for PlayLab.
//!
//! Configuration values come from environment variables and a `.env` file in
//! the local data directory. Environment variables take precedence over the
//! file, and every value except the client id has a default that points at the
//! public Spotify endpoints.
//!
//! | Variable                     | Default                                      |
//! |------------------------------|----------------------------------------------|
//! | `SPOTIFY_API_AUTH_CLIENT_ID` | required                                     |
//! | `SPOTIFY_API_REDIRECT_URI`   | `http://127.0.0.1:8888/callback`             |
//! | `SPOTIFY_API_AUTH_SCOPE`     | `playlist-read-private playlist-read-collaborative` |
//! | `SPOTIFY_API_AUTH_URL`       | `https://accounts.spotify.com/authorize`     |
//! | `SPOTIFY_API_TOKEN_URL`      | `https://accounts.spotify.com/api/token`     |
//! | `SPOTIFY_API_URL`            | `https://api.spotify.com/v1`                 |
//! | `SERVER_ADDRESS`             | `127.0.0.1:8888`                             |

use std::{env, path::PathBuf};

use crate::{Res, error::AppError};

pub const APP_DIR: &str = "playlab";

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Returns the application directory inside the platform local data dir:
/// - Linux: `~/.local/share/playlab`
/// - macOS: `~/Library/Application Support/playlab`
/// - Windows: `%LOCALAPPDATA%/playlab`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from `playlab/.env` in the local data
/// directory, creating the directory if needed. A missing file is not an
/// error since every variable can also come from the environment.
pub async fn load_env() -> Res<()> {
    let mut path = data_dir();
    async_fs::create_dir_all(&path).await?;

    path.push(".env");
    if !path.is_file() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)?;
    log::debug!("loaded env file {}", path.display());
    Ok(())
}

/// Everything needed to talk to Spotify, resolved once at startup and
/// handed to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: String,
}

impl SpotifyConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let client_id = env::var("SPOTIFY_API_AUTH_CLIENT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "SPOTIFY_API_AUTH_CLIENT_ID must be set (environment or {})",
                    data_dir().join(".env").display()
                ))
            })?;

        Ok(Self {
            client_id,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
