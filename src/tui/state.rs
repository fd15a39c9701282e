use crate::messages::{UiMessage, WorkerMessage};
use crate::view::{SearchPage, SongPage};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE_SCROLL: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Home,
    Results,
    Song,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Searching(String),
    LoadingSong(u64),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub status: Status,
    pub query: String,
    pub search: Option<SearchPage>,
    pub selected: usize,
    pub song: Option<SongPage>,
    pub scroll: u16,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            status: Status::Idle,
            query: String::new(),
            search: None,
            selected: 0,
            song: None,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status != Status::Idle
    }

    /// Update state based on worker messages (Elm Architecture - Update)
    pub fn update(&mut self, msg: WorkerMessage) {
        match msg {
            WorkerMessage::SearchStarted { query } => {
                self.status = Status::Searching(query);
            }
            WorkerMessage::SearchResults(page) => {
                self.search = Some(page);
                self.selected = 0;
                self.screen = Screen::Results;
                self.status = Status::Idle;
            }
            WorkerMessage::SongLoading { id } => {
                self.status = Status::LoadingSong(id);
            }
            WorkerMessage::SongLoaded(page) => {
                self.song = Some(page);
                self.scroll = 0;
                self.screen = Screen::Song;
                self.status = Status::Idle;
            }
        }
    }

    /// Apply a key press; returns the request to forward to the worker, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UiMessage> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(self.quit());
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Results => self.handle_results_key(key.code),
            Screen::Song => self.handle_song_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) -> Option<UiMessage> {
        match code {
            KeyCode::Esc => return Some(self.quit()),
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Enter => {
                let query = self.query.trim();
                // An empty search just stays on the home screen
                if !query.is_empty() && !self.is_busy() {
                    return Some(UiMessage::Search {
                        query: query.to_string(),
                    });
                }
            }
            _ => {}
        }
        None
    }

    fn handle_results_key(&mut self, code: KeyCode) -> Option<UiMessage> {
        let count = self.search.as_ref().map_or(0, |page| page.results.len());

        match code {
            KeyCode::Esc | KeyCode::Char('/') => self.screen = Screen::Home,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if !self.is_busy() {
                    return self.selected_result_id().map(|id| UiMessage::OpenSong { id });
                }
            }
            _ => {}
        }
        None
    }

    fn handle_song_key(&mut self, code: KeyCode) -> Option<UiMessage> {
        match code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.screen = if self.search.is_some() {
                    Screen::Results
                } else {
                    Screen::Home
                };
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SCROLL),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE_SCROLL),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        None
    }

    fn quit(&mut self) -> UiMessage {
        self.should_quit = true;
        UiMessage::Quit
    }

    pub fn selected_result_id(&self) -> Option<u64> {
        self.search
            .as_ref()
            .and_then(|page| page.results.get(self.selected))
            .map(|result| result.id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
