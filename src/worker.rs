use crate::{
    api::GeniusClient,
    messages::{UiMessage, WorkerMessage},
    view::{SearchPage, SongPage},
};
use anyhow::Result;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use tokio::sync::mpsc;

const RATE_LIMIT_PER_SEC: u32 = 2; // 2 requests/second max

fn quota() -> Quota {
    Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SEC).unwrap_or(NonZeroU32::MIN))
}

/// Serve UI requests until the UI quits or drops its sender
pub async fn run(
    client: GeniusClient,
    tx: mpsc::UnboundedSender<WorkerMessage>,
    mut ui_rx: mpsc::UnboundedReceiver<UiMessage>,
) -> Result<()> {
    tracing::info!("Worker started");

    let rate_limiter = RateLimiter::direct(quota());

    while let Some(msg) = ui_rx.recv().await {
        match msg {
            UiMessage::Search { query } => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    tracing::debug!("Ignoring empty search");
                    continue;
                }

                tx.send(WorkerMessage::SearchStarted {
                    query: query.clone(),
                })?;
                let page = search(&client, &rate_limiter, &query).await;
                tx.send(WorkerMessage::SearchResults(page))?;
            }
            UiMessage::OpenSong { id } => {
                tx.send(WorkerMessage::SongLoading { id })?;
                let page = open_song(&client, &rate_limiter, id).await;
                tx.send(WorkerMessage::SongLoaded(page))?;
            }
            UiMessage::Quit => {
                tracing::info!("Worker received quit signal");
                break;
            }
        }
    }

    tracing::info!("Worker shutting down");
    Ok(())
}

/// Run a search, turning failures into the error page
pub async fn search(
    client: &GeniusClient,
    rate_limiter: &DefaultDirectRateLimiter,
    query: &str,
) -> SearchPage {
    rate_limiter.until_ready().await;

    match client.search(query).await {
        Ok(hits) => SearchPage::results(query, &hits),
        Err(e) => {
            tracing::error!("Search '{}' failed: {}", query, e);
            SearchPage::error(query)
        }
    }
}

/// Load a song and its lyrics, turning failures into the error page
pub async fn open_song(
    client: &GeniusClient,
    rate_limiter: &DefaultDirectRateLimiter,
    id: u64,
) -> SongPage {
    rate_limiter.until_ready().await;

    match client.load_song_page(id).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Loading song {} failed: {}", id, e);
            SongPage::error()
        }
    }
}
