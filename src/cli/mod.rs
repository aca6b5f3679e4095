//! # CLI Module
//!
//! The presentation layer of PlayLab. It turns user input into calls on the
//! Spotify client and the statistics aggregation, and renders the results.
//!
//! ## Commands
//!
//! - [`auth`] - runs the Spotify OAuth PKCE flow and caches the token
//! - [`analyze`] - fetches a playlist, computes its statistics and prints them
//!   as cards, optionally with the complete artist ranking or as JSON
//!
//! ## Error handling
//!
//! Invalid playlist links and connection problems are reported with a single
//! message. A playlist without tracks is not an error, it is reported as
//! having nothing to analyze. Anything else is logged and reported as a
//! generic failure.
//!
//! ```bash
//! playlab auth
//! playlab analyze https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! playlab analyze --all-artists --top 10
//! ```

mod analyze;
mod auth;
pub mod render;

pub use analyze::AnalyzeOptions;
pub use analyze::analyze;
pub use analyze::analyze_playlist;
pub use analyze::report;
pub use auth::auth;
