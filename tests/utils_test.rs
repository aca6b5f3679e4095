use playlab::error::AppError;
use playlab::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 digest, base64 URL-safe without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_extract_playlist_id() {
    let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_playlist_id_drops_query_string() {
    let id = extract_playlist_id("https://open.spotify.com/playlist/abc123XYZ?si=9f8e7d").unwrap();
    assert_eq!(id, "abc123XYZ");
}

#[test]
fn test_extract_playlist_id_from_uri_like_path() {
    let id = extract_playlist_id("  https://open.spotify.com/intl-es/playlist/Q1w2E3/  ").unwrap();
    assert_eq!(id, "Q1w2E3");
}

#[test]
fn test_extract_playlist_id_rejects_other_links() {
    for url in [
        "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy",
        "https://open.spotify.com/playlist/",
        "https://open.spotify.com/playlist/?si=abc",
        "",
        "not a url",
    ] {
        let result = extract_playlist_id(url);
        assert!(
            matches!(result, Err(AppError::InvalidInput(_))),
            "expected invalid input for {:?}",
            url
        );
    }
}

#[test]
fn test_format_duration_zero() {
    assert_eq!(format_duration_ms(0), "0 seconds");
    // below one second truncates to zero
    assert_eq!(format_duration_ms(999), "0 seconds");
}

#[test]
fn test_format_duration_single_units() {
    assert_eq!(format_duration_ms(1_000), "1 second");
    assert_eq!(format_duration_ms(45_000), "45 seconds");
    assert_eq!(format_duration_ms(60_000), "1 minute");
    assert_eq!(format_duration_ms(120_000), "2 minutes");
    assert_eq!(format_duration_ms(3_600_000), "1 hour");
    assert_eq!(format_duration_ms(172_800_000), "2 days");
}

#[test]
fn test_format_duration_joins_with_and() {
    assert_eq!(format_duration_ms(3_661_000), "1 hour, 1 minute and 1 second");
    assert_eq!(format_duration_ms(3_605_000), "1 hour and 5 seconds");
    assert_eq!(format_duration_ms(215_000), "3 minutes and 35 seconds");
    assert_eq!(
        format_duration_ms(90_061_000),
        "1 day, 1 hour, 1 minute and 1 second"
    );
    assert_eq!(format_duration_ms(93_600_000), "1 day and 2 hours");
}

#[test]
fn test_format_duration_negative() {
    assert_eq!(format_duration_ms(-1), "invalid duration");
}

#[test]
fn test_pluralize() {
    assert_eq!(pluralize(1, "song"), "1 song");
    assert_eq!(pluralize(2, "song"), "2 songs");
    assert_eq!(pluralize(0, "song"), "0 songs");
}
