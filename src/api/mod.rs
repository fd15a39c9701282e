pub mod types;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::lyrics;
use crate::view::SongPage;
use serde::de::DeserializeOwned;
use types::{Envelope, SearchResponse, Song, SongHit, SongResponse};

pub struct GeniusClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeniusClient {
    /// Build a client from configuration; fails if no API key is configured
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Same as [`GeniusClient::new`] but with a preconfigured HTTP client
    pub fn with_http_client(config: &Config, client: reqwest::Client) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Search Genius for songs matching `query`
    pub async fn search(&self, query: &str) -> Result<Vec<SongHit>> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));

        let envelope: Envelope<SearchResponse> = self.get_json(&url).await?;
        let hits: Vec<SongHit> = envelope
            .response
            .hits
            .into_iter()
            .map(|hit| hit.result)
            .collect();

        tracing::debug!("Search '{}' returned {} hits", query, hits.len());
        Ok(hits)
    }

    /// Fetch song metadata by Genius song id
    pub async fn song(&self, id: u64) -> Result<Song> {
        let url = format!("{}/songs/{}", self.base_url, id);

        let envelope: Envelope<SongResponse> = self.get_json(&url).await?;
        Ok(envelope.response.song)
    }

    /// Download a public song page as HTML
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching page: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Song metadata plus lyrics scraped from its page
    pub async fn load_song_page(&self, id: u64) -> Result<SongPage> {
        let song = self.song(id).await?;
        let html = self.fetch_page(&song.url).await?;
        let lyrics = lyrics::extract(&html);

        Ok(SongPage::from_song(&song, lyrics))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Requesting: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Canned response for requests whose target starts with `prefix`
    struct Route {
        prefix: &'static str,
        status: &'static str,
        body: String,
    }

    fn route(prefix: &'static str, status: &'static str, body: impl Into<String>) -> Route {
        Route {
            prefix,
            status,
            body: body.into(),
        }
    }

    /// Bind a local listener; returns it with its base URL
    async fn bind() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        (listener, base)
    }

    /// Serve `routes` forever, recording every request head
    fn serve(listener: TcpListener, routes: Vec<Route>) -> Arc<Mutex<Vec<String>>> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };

                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&head).to_string();
                let target = head.split_whitespace().nth(1).unwrap_or("").to_string();
                log.lock().unwrap().push(head);

                let (status, body) = routes
                    .iter()
                    .find(|r| target.starts_with(r.prefix))
                    .map(|r| (r.status, r.body.as_str()))
                    .unwrap_or(("404 Not Found", ""));

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        requests
    }

    fn client_for(base: &str) -> GeniusClient {
        let config = Config {
            api_key: Some("token".to_string()),
            api_url: base.to_string(),
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        GeniusClient::with_http_client(&config, http).unwrap()
    }

    fn has_auth(head: &str) -> bool {
        head.to_ascii_lowercase().contains("authorization: bearer token")
    }

    const SEARCH_BODY: &str = r#"{"meta":{"status":200},"response":{"hits":[
        {"result":{"id":7,"full_title":"Thunderstruck by AC/DC",
         "primary_artist":{"name":"AC/DC"},"song_art_image_thumbnail_url":null}}]}}"#;

    #[test]
    fn test_new_requires_key() {
        let config = Config::default();
        assert!(matches!(
            GeniusClient::new(&config),
            Err(ApiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = Config {
            api_key: Some("token".to_string()),
            api_url: "http://localhost:9999/".to_string(),
        };
        let client = GeniusClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_search_sends_token_and_encoded_query() {
        let (listener, base) = bind().await;
        let requests = serve(listener, vec![route("/search", "200 OK", SEARCH_BODY)]);

        let hits = client_for(&base).search("AC/DC & friends").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 7);
        assert_eq!(hits[0].primary_artist.name, "AC/DC");

        let requests = requests.lock().unwrap();
        assert!(requests[0].starts_with("GET /search?q=AC%2FDC%20%26%20friends HTTP/1.1"));
        assert!(has_auth(&requests[0]));
    }

    #[tokio::test]
    async fn test_load_song_page() {
        let (listener, base) = bind().await;
        let song_body = format!(
            r#"{{"response":{{"song":{{"full_title":"Thunderstruck by AC/DC",
                "primary_artist":{{"name":"AC/DC"}},"song_art_image_url":null,
                "url":"{}/page/thunderstruck","release_date":null,"album":null}}}}}}"#,
            base
        );
        let page_body = r#"<html><body><div data-lyrics-container="true">
            1 Contributor<br>[Intro]<br>Thunder!</div></body></html>"#;
        let requests = serve(
            listener,
            vec![
                route("/songs/7", "200 OK", song_body),
                route("/page/", "200 OK", page_body),
            ],
        );

        let page = client_for(&base).load_song_page(7).await.unwrap();
        assert_eq!(page.title, "Thunderstruck by AC/DC");
        assert_eq!(page.album, "Single");
        assert_eq!(page.release_date, "Unknown");
        assert_eq!(page.lyrics, "[Intro]\nThunder!");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].starts_with("GET /songs/7 "));
        assert!(has_auth(&requests[0]));
        assert!(requests[1].starts_with("GET /page/thunderstruck "));
        assert!(!requests[1].to_ascii_lowercase().contains("authorization"));
    }

    #[tokio::test]
    async fn test_error_status() {
        let (listener, base) = bind().await;
        serve(listener, vec![route("/search", "401 Unauthorized", "{}")]);

        match client_for(&base).search("x").await {
            Err(ApiError::Status { status, url }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert!(url.ends_with("/search?q=x"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_page() {
        let (listener, base) = bind().await;
        serve(listener, Vec::new());

        let url = format!("{}/page/gone", base);
        match client_for(&base).fetch_page(&url).await {
            Err(ApiError::Status { status, .. }) => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (listener, base) = bind().await;
        serve(listener, vec![route("/songs/", "200 OK", "<html>not json</html>")]);

        assert!(matches!(
            client_for(&base).song(1).await,
            Err(ApiError::Decode(_))
        ));
    }
}
