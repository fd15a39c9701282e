use crate::tui::{
    state::{AppState, Screen, Status},
    widgets::{KeyHints, QueryInput},
};
use crate::view::SongPage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const HOME_HINTS: &[(&str, &str)] = &[("Enter", "Search"), ("Esc", "Quit")];
const RESULTS_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Select"),
    ("Enter", "Open"),
    ("/", "New search"),
    ("Esc", "Back"),
    ("Ctrl-C", "Quit"),
];
const SONG_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Scroll"),
    ("PgUp/PgDn", "Page"),
    ("Esc", "Back"),
    ("Ctrl-C", "Quit"),
];

/// Render the TUI (Elm Architecture - View)
pub fn render(frame: &mut Frame, state: &AppState) {
    // Clear the frame to prevent ghost characters
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Reset)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Body (responsive)
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);

    match state.screen {
        Screen::Home => render_home(frame, chunks[1], state),
        Screen::Results => render_results(frame, chunks[1], state),
        Screen::Song => render_song(frame, chunks[1], state),
    }

    let hints = match state.screen {
        Screen::Home => HOME_HINTS,
        Screen::Results => RESULTS_HINTS,
        Screen::Song => SONG_HINTS,
    };
    KeyHints::new(hints).render(frame, chunks[2]);
}

fn header_title(state: &AppState) -> String {
    match &state.status {
        Status::Searching(query) => format!("lyricx - Searching \"{}\"...", query),
        Status::LoadingSong(_) => "lyricx - Loading lyrics...".to_string(),
        Status::Idle => match state.screen {
            Screen::Home => "lyricx - Lyric Explorer".to_string(),
            Screen::Results => state
                .search
                .as_ref()
                .map(|page| format!("lyricx - {}", page.title))
                .unwrap_or_else(|| "lyricx".to_string()),
            Screen::Song => state
                .song
                .as_ref()
                .map(|page| format!("lyricx - {}", page.title))
                .unwrap_or_else(|| "lyricx".to_string()),
        },
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let color = if state.is_busy() {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let header = Paragraph::new(header_title(state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    QueryInput::new(&state.query, !state.is_busy()).render(frame, chunks[0]);

    let help = Paragraph::new("Type a song title or artist and press Enter.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Results");

    let Some(page) = state.search.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    if page.results.is_empty() {
        let message = if page.is_error() {
            Paragraph::new("Search failed. See the log file for details.")
                .style(Style::default().fg(Color::Red))
        } else {
            Paragraph::new(format!("No songs found for \"{}\".", page.query))
        };
        frame.render_widget(message.block(block), area);
        return;
    }

    let items: Vec<ListItem> = page
        .results
        .iter()
        .map(|result| {
            ListItem::new(Line::from(vec![
                Span::raw(result.title.clone()),
                Span::styled(
                    format!("  #{}", result.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_song(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(page) = state.song.as_ref() else {
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let details = page.details();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(details.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    render_song_details(frame, chunks[0], page);

    let lyrics_style = if page.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let lyrics = Paragraph::new(page.lyrics.as_str())
        .style(lyrics_style)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Lyrics"));

    frame.render_widget(lyrics, chunks[1]);
}

fn render_song_details(frame: &mut Frame, area: Rect, page: &SongPage) {
    let lines: Vec<Line> = page
        .details()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<9} ", format!("{}:", label)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(value.to_string()),
            ])
        })
        .collect();

    let details = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(page.title.clone()),
    );
    frame.render_widget(details, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::WorkerMessage;
    use crate::view::SearchPage;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_follows_status() {
        let mut state = AppState::new();
        assert_eq!(header_title(&state), "lyricx - Lyric Explorer");

        state.update(WorkerMessage::SearchStarted {
            query: "sia".to_string(),
        });
        assert_eq!(header_title(&state), "lyricx - Searching \"sia\"...");

        state.update(WorkerMessage::SearchResults(SearchPage::error("sia")));
        assert_eq!(header_title(&state), "lyricx - Error");
    }

    #[test]
    fn test_renders_each_screen() {
        let mut state = AppState::new();
        state.query = "chandelier".to_string();
        assert!(draw(&state).contains("chandelier"));

        state.update(WorkerMessage::SearchResults(SearchPage::error("chandelier")));
        assert!(draw(&state).contains("Search failed"));

        state.update(WorkerMessage::SongLoaded(SongPage::error()));
        assert!(draw(&state).contains("Could not fetch song details."));
    }
}
