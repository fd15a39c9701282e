use crate::view::{SearchPage, SongPage};

/// Messages sent from Worker to TUI
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    SearchStarted { query: String },
    SearchResults(SearchPage),
    SongLoading { id: u64 },
    SongLoaded(SongPage),
}

/// Messages sent from TUI to Worker
#[derive(Debug, Clone)]
pub enum UiMessage {
    Search { query: String },
    OpenSong { id: u64 },
    Quit,
}
