use crate::api::types::{Song, SongHit};
use std::fmt::Write;

const DEFAULT_ALBUM: &str = "Single";
const DEFAULT_RELEASE_DATE: &str = "Unknown";
const ERROR_TITLE: &str = "Error";
const SONG_UNAVAILABLE: &str = "Could not fetch song details.";

/// One row of the search results list
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
}

impl From<&SongHit> for SearchResult {
    fn from(hit: &SongHit) -> Self {
        Self {
            id: hit.id,
            title: hit.full_title.clone(),
            artist: hit.primary_artist.name.clone(),
            image: hit.song_art_image_thumbnail_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub title: String,
    pub query: String,
    pub results: Vec<SearchResult>,
}

impl SearchPage {
    pub fn results(query: &str, hits: &[SongHit]) -> Self {
        Self {
            title: format!("Results for \"{}\"", query),
            query: query.to_string(),
            results: hits.iter().map(SearchResult::from).collect(),
        }
    }

    /// Shown when the search request failed
    pub fn error(query: &str) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            query: query.to_string(),
            results: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n", self.title);

        if self.results.is_empty() {
            out.push_str("No results.\n");
        }

        for result in &self.results {
            let _ = writeln!(out, "{:>10}  {}", result.id, result.title);
        }

        out
    }
}

/// Everything displayed for a single song
#[derive(Debug, Clone, PartialEq)]
pub struct SongPage {
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
    pub album: String,
    pub release_date: String,
    pub url: String,
    pub lyrics: String,
}

impl SongPage {
    pub fn from_song(song: &Song, lyrics: String) -> Self {
        Self {
            title: song.full_title.clone(),
            artist: song.primary_artist.name.clone(),
            image: song.song_art_image_url.clone(),
            album: song
                .album
                .as_ref()
                .map(|album| album.name.clone())
                .unwrap_or_else(|| DEFAULT_ALBUM.to_string()),
            release_date: song
                .release_date
                .clone()
                .filter(|date| !date.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RELEASE_DATE.to_string()),
            url: song.url.clone(),
            lyrics,
        }
    }

    /// Shown when song metadata or its page could not be fetched
    pub fn error() -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            artist: String::new(),
            image: None,
            album: String::new(),
            release_date: String::new(),
            url: String::new(),
            lyrics: SONG_UNAVAILABLE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE && self.url.is_empty()
    }

    /// Metadata lines shown above the lyrics
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        if self.is_error() {
            return Vec::new();
        }

        vec![
            ("Artist", self.artist.as_str()),
            ("Album", self.album.as_str()),
            ("Released", self.release_date.as_str()),
            ("Genius", self.url.as_str()),
        ]
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n", self.title);

        for (label, value) in self.details() {
            let _ = writeln!(out, "{:<9} {}", format!("{}:", label), value);
        }

        let _ = write!(out, "\n{}\n", self.lyrics);
        out
    }
}
