use tabled::{
    Table,
    settings::{Panel, Style},
};

use crate::{
    error::AppError,
    stats::{PlaylistStats, SongExtreme},
    types::{ArtistTableRow, StatTableRow},
    utils::{format_duration_ms, pluralize},
};

fn stat(statistic: &str, value: impl ToString) -> StatTableRow {
    StatTableRow {
        statistic: statistic.to_string(),
        value: value.to_string(),
    }
}

fn card(title: &str, rows: Vec<StatTableRow>) -> String {
    let mut table = Table::new(rows);
    table.with(Panel::header(title)).with(Style::rounded());
    table.to_string()
}

fn ranking_card(title: &str, ranking: &[(&str, usize)]) -> String {
    let rows: Vec<ArtistTableRow> = ranking
        .iter()
        .enumerate()
        .map(|(i, (artist, songs))| ArtistTableRow {
            rank: i + 1,
            artist: artist.to_string(),
            songs: *songs,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Panel::header(title)).with(Style::rounded());
    table.to_string()
}

fn describe_song(song: &SongExtreme) -> String {
    format!(
        "'{}' ({})",
        song.title,
        format_duration_ms(song.duration_ms as i64)
    )
}

/// Renders the statistics as a series of cards: summary, song durations,
/// most represented album and the top `top` artists and collaborators.
pub fn render_summary(stats: &PlaylistStats, top: usize) -> String {
    let mut cards: Vec<String> = Vec::new();

    cards.push(card(
        &format!("'{}'", stats.name()),
        vec![
            stat("Songs", stats.num_songs()),
            stat("Unique artists", stats.num_artists()),
            stat(
                "Total duration",
                format_duration_ms(stats.total_duration_ms() as i64),
            ),
            stat("Duration (minutes)", stats.duration_minutes()),
            stat("Unique albums", stats.num_unique_albums()),
            stat("Explicit songs", stats.num_explicit_songs()),
            stat("Collaborative songs", stats.num_collaborative_songs()),
            stat(
                "Non-collaborative songs",
                stats.num_non_collaborative_songs(),
            ),
        ],
    ));

    cards.push(card(
        "Songs by Duration",
        vec![
            stat("Shortest", describe_song(&stats.shortest_or_default())),
            stat("Longest", describe_song(&stats.longest_or_default())),
        ],
    ));

    let (album, count) = stats.most_represented_album();
    cards.push(card(
        "Most Represented Album",
        vec![stat(
            "Album",
            format!("'{}' ({})", album, pluralize(count as i64, "song")),
        )],
    ));

    let top_artists = stats.top_artists(Some(top));
    if !top_artists.is_empty() {
        cards.push(ranking_card("Top Artists", &top_artists));
    }

    let top_collaborators = stats.top_collaborators(Some(top));
    if !top_collaborators.is_empty() {
        cards.push(ranking_card("Top Collaborators", &top_collaborators));
    }

    cards.join("\n")
}

/// Lists every artist by descending number of songs, one per line, as
/// `1. Artist: 3 songs`.
pub fn render_all_artists(stats: &PlaylistStats) -> String {
    stats
        .top_artists(None)
        .iter()
        .enumerate()
        .map(|(i, (artist, count))| {
            format!("{}. {}: {}", i + 1, artist, pluralize(*count as i64, "song"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(stats: &PlaylistStats) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(stats)?)
}
