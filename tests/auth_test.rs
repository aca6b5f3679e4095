use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use playlab::config::SpotifyConfig;
use playlab::error::AppError;
use playlab::management::TokenManager;
use playlab::spotify::auth::{auth, authorize_url};
use playlab::types::Token;

fn test_config() -> SpotifyConfig {
    SpotifyConfig {
        client_id: "client123".to_string(),
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
        scope: "playlist-read-private playlist-read-collaborative".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
        server_addr: "127.0.0.1:8888".to_string(),
    }
}

#[test]
fn test_authorize_url() {
    let url = authorize_url(&test_config(), "challenge_abc");

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("code_challenge=challenge_abc"));
    assert!(url.contains("code_challenge_method=S256"));
    assert!(url.contains("scope=playlist-read-private%20playlist-read-collaborative"));
}

#[test]
fn test_token_expiry_margin() {
    let manager = TokenManager::new(Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: String::new(),
        expires_in: 3600,
        obtained_at: 1000,
    });

    assert!(!manager.is_expired(1000));
    assert!(!manager.is_expired(4359));
    // refreshed four minutes before the reported expiry
    assert!(manager.is_expired(4360));
    assert_eq!(manager.current_token().access_token, "access");
}

#[tokio::test]
async fn test_auth_fails_fast_on_bad_server_address() {
    let config = SpotifyConfig {
        server_addr: "not-an-address".to_string(),
        ..test_config()
    };

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        auth(Arc::new(config), Arc::new(Mutex::new(None))),
    )
    .await
    .expect("auth should not wait for a callback when the server cannot start");

    assert!(matches!(result, Err(AppError::Config(_))));
}
