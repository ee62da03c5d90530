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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{AppEventProcessor, MovieModal},
    events::AppEvent,
};

impl AppEventProcessor for MovieModal {
    /// While open the modal consumes every key event.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }

        if let Event::Key(key_event) = event {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                event_tx.send(AppEvent::CloseMovie)?;
            }
        }

        Ok(true)
    }
}
