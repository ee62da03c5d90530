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

//! Input handling and event processing for the movie grid.
//!
//! This module maps raw terminal keyboard events to grid navigation and
//! opening the details of the highlighted movie.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{AppEventProcessor, MovieGrid},
    events::AppEvent,
};

impl AppEventProcessor for MovieGrid {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_next(),
            KeyCode::Char('h') | KeyCode::Left => self.goto_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.goto_down(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_up(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                if let Some(index) = self.selected {
                    event_tx.send(AppEvent::SelectMovie(index))?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_selects_highlighted_movie() {
        let (tx, rx) = mpsc::channel();
        let mut grid = MovieGrid::new();
        grid.reset(4);
        grid.set_viewport(2, 2);

        grid.process_event(&key(KeyCode::Char('j')), &tx).unwrap();
        grid.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SelectMovie(2)));
    }

    #[test]
    fn enter_on_empty_grid_does_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut grid = MovieGrid::new();

        assert!(grid.process_event(&key(KeyCode::Enter), &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unrelated_keys_are_not_consumed() {
        let (tx, _rx) = mpsc::channel();
        let mut grid = MovieGrid::new();

        assert!(!grid.process_event(&key(KeyCode::Char('q')), &tx).unwrap());
        assert!(!grid.process_event(&key(KeyCode::Char('n')), &tx).unwrap());
    }
}
