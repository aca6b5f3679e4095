use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

use crate::{api, config::SpotifyConfig, error::AppError, types::PkceToken};

/// Binds the callback server and serves `/health` and the OAuth `/callback`
/// in a background task until the returned handle is aborted.
///
/// Address and bind failures are returned before anything is spawned.
pub async fn start_api_server(
    config: Arc<SpotifyConfig>,
    state: Arc<Mutex<Option<PkceToken>>>,
) -> Result<JoinHandle<()>, AppError> {
    let addr = SocketAddr::from_str(&config.server_addr).map_err(|e| {
        AppError::Config(format!(
            "failed to parse server address {}: {}",
            config.server_addr, e
        ))
    })?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("failed to bind {}: {}", addr, e)))?;
    log::debug!("callback server listening on {}", addr);

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(config));

    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("callback server stopped: {}", e);
        }
    }))
}
