//! PlayLab Playlist Statistics Library
//!
//! This library fetches the tracks of a Spotify playlist and computes
//! descriptive statistics over them: song and artist counts, total duration,
//! explicit and collaborative songs, album representation, the shortest and
//! longest songs and artist frequency rankings.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds surfaced to the presentation layer
//! - `management` - Token caching
//! - `model` - Artist and song values
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `stats` - Playlist statistics aggregation
//! - `types` - Wire formats and table rows
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playlab::{model::{Artist, Song}, stats::PlaylistStats};
//!
//! let song = Song::new("1", "Title", "Album", vec![Artist::new("a", "A")], 1000, false).unwrap();
//! let stats = PlaylistStats::build("id", "My Playlist", vec![song]);
//! assert_eq!(stats.num_songs(), 1);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod model;
pub mod server;
pub mod spotify;
pub mod stats;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the glue code of the
/// application using a boxed dynamic error trait object. Operations whose
/// failures must be told apart by the caller return [`error::AppError`]
/// instead.
///
/// # Example
///
/// ```
/// use playlab::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```ignore
/// info!("Fetching playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```ignore
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal errors where recovery is not possible. Code after this
/// macro does not execute.
///
/// # Example
///
/// ```ignore
/// error!("Failed to load configuration");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```ignore
/// warning!("Token cache not found, run playlab auth");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
