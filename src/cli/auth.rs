use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::SpotifyConfig, error::AppError, info, spotify, success, types::PkceToken};

pub async fn auth() -> Result<(), AppError> {
    let config = Arc::new(SpotifyConfig::from_env()?);
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));

    info!("Waiting for authorization in the browser...");
    spotify::auth::auth(config, shared_state).await?;
    success!("Authentication successful!");
    Ok(())
}
