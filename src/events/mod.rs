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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (search results), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and dispatches tasks to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{RequestId, SearchPage, search::PageDirection},
    render::draw,
    tasks::AppTask,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SubmitQuery(String),
    SearchCompleted(RequestId, SearchPage),
    SearchFailed(RequestId, String),
    ChangePage(PageDirection),

    SelectMovie(usize),
    CloseMovie,

    SetFocus(Focus),

    Tick,

    ExitApplication,
}

/// Which component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchBar,
    Grid,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            // Drop any in-flight request rather than wait for it
            app.task_tx.send(AppTask::CancelSearch).ok();
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::SubmitQuery(text) => handle_submit_query(app, &text)?,
        AppEvent::SearchCompleted(id, page) => handle_search_completed(app, id, page),
        AppEvent::SearchFailed(id, message) => handle_search_failed(app, id, &message),
        AppEvent::ChangePage(direction) => handle_change_page(app, direction)?,
        AppEvent::SelectMovie(index) => handle_select_movie(app, index),
        AppEvent::CloseMovie => handle_close_movie(app),
        AppEvent::SetFocus(focus) => handle_set_focus(app, focus),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
