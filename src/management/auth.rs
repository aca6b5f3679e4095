use std::path::PathBuf;

use chrono::Utc;

use crate::{config, config::SpotifyConfig, error::AppError, spotify, types::Token};

/// Seconds before the reported expiry at which a token is refreshed.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Owns the cached OAuth token and keeps it fresh.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and persisting it first when it is
    /// about to expire.
    pub async fn get_valid_token(&mut self, config: &SpotifyConfig) -> Result<String, AppError> {
        if self.is_expired(Utc::now().timestamp() as u64) {
            log::debug!("access token expired, refreshing");
            let new_token = spotify::auth::refresh_token(config, &self.token.refresh_token)
                .await
                .map_err(|e| {
                    AppError::UpstreamUnavailable(format!(
                        "failed to refresh token, run playlab auth ({})",
                        e
                    ))
                })?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                log::warn!("failed to persist refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
