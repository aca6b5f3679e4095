use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::AppError;

const SECONDS_PER_DAY: i64 = 24 * 3600;

static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([a-zA-Z0-9]+)").expect("valid playlist id pattern"));

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts the playlist identifier from a Spotify playlist URL.
///
/// The identifier is the run of alphanumeric characters directly following
/// `playlist/`, so query strings such as `?si=...` are dropped.
///
/// ```
/// use playlab::utils::extract_playlist_id;
///
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DX?si=abc").unwrap();
/// assert_eq!(id, "37i9dQZF1DX");
/// ```
pub fn extract_playlist_id(url: &str) -> Result<String, AppError> {
    PLAYLIST_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "'{}' is not a Spotify playlist link. Paste a link like https://open.spotify.com/playlist/<id>",
                url.trim()
            ))
        })
}

/// Renders a duration in milliseconds as human readable text.
///
/// Only non-zero units are listed, seconds are omitted when zero unless they
/// are the only unit. The last two parts are joined with "and".
///
/// ```
/// use playlab::utils::format_duration_ms;
///
/// assert_eq!(format_duration_ms(0), "0 seconds");
/// assert_eq!(format_duration_ms(3_661_000), "1 hour, 1 minute and 1 second");
/// ```
pub fn format_duration_ms(milliseconds: i64) -> String {
    if milliseconds < 0 {
        return "invalid duration".to_string();
    }

    let total_seconds = milliseconds / 1000;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts: Vec<String> = Vec::new();
    for (value, unit) in [(days, "day"), (hours, "hour"), (minutes, "minute")] {
        if value > 0 {
            parts.push(pluralize(value, unit));
        }
    }

    if seconds > 0 || parts.is_empty() {
        parts.push(pluralize(seconds, "second"));
    }

    match parts.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        None => "0 seconds".to_string(),
    }
}

/// Formats `value unit`, appending an `s` for any value other than one.
pub fn pluralize(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}
