//! # API Module
//!
//! HTTP endpoints served by the local callback server during `playlab auth`.
//!
//! - [`callback`] - receives the authorization code from Spotify and exchanges
//!   it for an access token using the PKCE verifier.
//! - [`health`] - returns the application status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use playlab::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
