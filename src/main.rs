use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lyricx::{api::GeniusClient, config::Config, paths, view::SearchPage};
use std::io::Read;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lyricx", version, about = "Search songs on Genius and read their lyrics")]
struct Cli {
    /// Genius API access token (overrides GENIUS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse search results and lyrics interactively (default)
    Browse,
    /// Search for songs and print the results
    Search {
        /// Song title, artist, or lyrics fragment
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print a song's details and lyrics
    Song {
        /// Genius song id (as shown by `search`)
        id: u64,
    },
    /// Extract lyrics from a saved Genius page (reads stdin without FILE)
    Extract {
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            let (log_path, _guard) = init_file_logging()?;
            tracing::info!("Logging to {}", log_path.display());
            run_browser(Config::load().with_api_key(cli.api_key)).await
        }
        Command::Search { query } => {
            init_stderr_logging();
            let config = Config::load().with_api_key(cli.api_key);
            run_search(&query.join(" "), &config).await
        }
        Command::Song { id } => {
            init_stderr_logging();
            let config = Config::load().with_api_key(cli.api_key);
            run_song(id, &config).await
        }
        Command::Extract { file } => {
            init_stderr_logging();
            run_extract(file)
        }
    }
}

/// The TUI owns the terminal, so logs go to a file
fn init_file_logging() -> Result<(PathBuf, WorkerGuard)> {
    let log_dir = paths::get_log_dir()?;
    let log_name = format!("{}.log", paths::APP_NAME);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyricx=debug,reqwest=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok((log_dir.join(log_name), guard))
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyricx=warn,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_browser(config: Config) -> Result<()> {
    tracing::info!("Starting lyricx browser against {}", config.api_url);

    let client = GeniusClient::new(&config)?;

    // Create mpsc channels
    let (worker_tx, worker_rx) = tokio::sync::mpsc::unbounded_channel();
    let (ui_tx, ui_rx) = tokio::sync::mpsc::unbounded_channel();

    // Spawn worker task
    let worker_handle = tokio::spawn(async move {
        if let Err(e) = lyricx::worker::run(client, worker_tx, ui_rx).await {
            tracing::error!("Worker error: {}", e);
        }
    });

    // Run TUI
    let mut app = lyricx::tui::App::new(worker_rx, ui_tx);
    app.run().await?;

    // Wait for worker to complete
    worker_handle.await?;

    Ok(())
}

async fn run_search(query: &str, config: &Config) -> Result<()> {
    let client = GeniusClient::new(config)?;
    let hits = client
        .search(query)
        .await
        .with_context(|| format!("Search for \"{}\" failed", query))?;

    print!("{}", SearchPage::results(query, &hits).render_text());
    Ok(())
}

async fn run_song(id: u64, config: &Config) -> Result<()> {
    let client = GeniusClient::new(config)?;
    let page = client
        .load_song_page(id)
        .await
        .with_context(|| format!("Could not fetch song {}", id))?;

    print!("{}", page.render_text());
    Ok(())
}

fn run_extract(file: Option<PathBuf>) -> Result<()> {
    let html = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read stdin")?;
            html
        }
    };

    println!("{}", lyricx::extract(&html));
    Ok(())
}
