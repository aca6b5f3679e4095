use std::io::{self, BufRead, Write};

use crate::{
    config::SpotifyConfig,
    error::AppError,
    info,
    spotify::{PlaylistSource, SpotifyClient},
    stats::PlaylistStats,
    success, utils,
};

use super::render;

/// How the analysis result is printed.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Append the complete artist ranking.
    pub all_artists: bool,
    /// Number of entries in the top artist and collaborator cards.
    pub top: usize,
    /// Print the statistics as JSON instead of cards.
    pub json: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            all_artists: false,
            top: 5,
            json: false,
        }
    }
}

/// Extracts the playlist id from `url`, fetches the playlist from `source`
/// and aggregates it. Nothing is fetched when the URL is invalid.
pub async fn analyze_playlist<S: PlaylistSource>(
    source: &mut S,
    url: &str,
) -> Result<PlaylistStats, AppError> {
    let playlist_id = utils::extract_playlist_id(url)?;
    log::debug!("analyzing playlist {}", playlist_id);

    let playlist = source.fetch_playlist(&playlist_id).await?;
    Ok(PlaylistStats::build(
        playlist.id,
        playlist.name,
        playlist.songs,
    ))
}

/// Renders the outcome of an analysis. An empty playlist only produces an
/// informational message.
pub fn report(stats: &PlaylistStats, options: &AnalyzeOptions) -> Result<(), AppError> {
    if options.json {
        println!("{}", render::render_json(stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        info!(
            "No tracks were found in '{}', there is nothing to analyze.",
            stats.name()
        );
        return Ok(());
    }

    success!("Playlist analysis completed.");
    println!("{}", render::render_summary(stats, options.top));

    if options.all_artists {
        println!();
        info!("All artists by appearances:");
        println!("{}", render::render_all_artists(stats));
    }

    Ok(())
}

/// Entry point of `playlab analyze`. Prompts for the URL when none was given.
pub async fn analyze(url: Option<String>, options: AnalyzeOptions) -> Result<(), AppError> {
    let url = match url {
        Some(url) => url,
        None => prompt_url()?,
    };

    // reject bad input before touching configuration or the network
    utils::extract_playlist_id(&url)?;

    let config = SpotifyConfig::from_env()?;
    let mut client = SpotifyClient::from_cache(config).await?;

    if !options.json {
        info!("Fetching playlist data...");
    }
    let stats = analyze_playlist(&mut client, &url).await?;
    report(&stats, &options)
}

fn prompt_url() -> Result<String, AppError> {
    print!("Paste the URL of your playlist: ");
    io::stdout()
        .flush()
        .map_err(|e| AppError::Unexpected(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::Unexpected(e.to_string()))?;

    let url = line.trim().to_string();
    if url.is_empty() {
        return Err(AppError::InvalidInput(
            "please enter a playlist URL".to_string(),
        ));
    }
    Ok(url)
}
