use serde::Deserialize;

/// Every Genius API payload is wrapped in `{ "meta": ..., "response": ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub response: T,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    pub result: SongHit,
}

/// Abbreviated song record returned by `/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SongHit {
    pub id: u64,
    pub full_title: String,
    pub primary_artist: Artist,
    pub song_art_image_thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SongResponse {
    pub song: Song,
}

/// Full song record returned by `/songs/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct Song {
    pub full_title: String,
    pub primary_artist: Artist,
    pub song_art_image_url: Option<String>,
    pub url: String,
    pub release_date: Option<String>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
}
