// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Movie Search TUI.
//!
//! A terminal front-end for searching The Movie Database (TMDB).
//!
//! The application coordinates a `ratatui` frontend with a background task
//! worker that talks to the TMDB API.
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * The **Task Worker** owns an async runtime and performs HTTP requests,
//!   cancelling any search that has been superseded by a newer one.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! Results flow back to the UI as [`AppEvent`]s over a `std::sync::mpsc`
//! channel, so all application state is owned by the main thread.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod tasks;
#[cfg(test)]
mod testing;
mod theme;
mod tmdb;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{
    components::{MovieGrid, MovieModal, SearchBar},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::{notification::Notification, search::Search},
    tasks::AppTask,
    theme::Theme,
    tmdb::TmdbClient,
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: UnboundedSender<AppTask>,

    pub search: Search,

    pub search_bar: SearchBar,
    pub movie_grid: MovieGrid,
    pub movie_modal: MovieModal,

    pub notification: Option<Notification>,

    /// Incremented on every tick, drives the loading animation.
    pub ticks: u64,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: UnboundedSender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let movie_modal = MovieModal::new(config.image_base_url, config.poster_size, config.backdrop_size);

        Self {
            theme: Theme::default(),
            focus: Focus::SearchBar,
            event_tx,
            event_rx,
            task_tx,
            search: Search::new(),
            search_bar: SearchBar::new(),
            movie_grid: MovieGrid::new(),
            movie_modal,
            notification: None,
            ticks: 0,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging, the communication channels and the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    logging::init_tracing();

    let config = config::load_config();
    tracing::info!(api = %config.api_base_url, language = %config.language, "Starting");

    let client = TmdbClient::new(config.tmdb_settings()).context("Failed to create TMDB client")?;

    let (task_tx, task_rx) = unbounded_channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, client, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!("Application error: {e:#}");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Sets the terminal background colour from the theme, enables raw mode and
/// switches to the alternate screen buffer.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Best-effort, every step is attempted even if an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the background workers and enters the main event loop.
///
/// * A task worker performs [`AppTask`]s against the TMDB API.
/// * An input thread polls for keyboard events.
/// * A tick thread triggers periodic UI refreshes.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: TmdbClient,
    task_rx: UnboundedReceiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(client, task_rx, app.event_tx.clone())?;

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
