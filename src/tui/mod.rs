pub mod state;
pub mod ui;
pub mod widgets;

use crate::messages::{UiMessage, WorkerMessage};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppState;
use std::io;
use tokio::sync::mpsc;

pub struct App {
    state: AppState,
    worker_rx: mpsc::UnboundedReceiver<WorkerMessage>,
    ui_tx: mpsc::UnboundedSender<UiMessage>,
}

impl App {
    pub fn new(
        worker_rx: mpsc::UnboundedReceiver<WorkerMessage>,
        ui_tx: mpsc::UnboundedSender<UiMessage>,
    ) -> Self {
        Self {
            state: AppState::new(),
            worker_rx,
            ui_tx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            // Render UI
            terminal.draw(|f| ui::render(f, &self.state))?;

            // Handle events (non-blocking)
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(msg) = self.state.handle_key(key) {
                            if self.ui_tx.send(msg).is_err() {
                                tracing::warn!("Worker is gone, exiting");
                                break;
                            }
                        }
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            // Process worker messages (non-blocking)
            while let Ok(msg) = self.worker_rx.try_recv() {
                self.state.update(msg);
            }

            // 60fps target
            tokio::time::sleep(std::time::Duration::from_millis(16)).await;
        }

        Ok(())
    }
}
