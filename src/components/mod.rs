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

//! Interactive UI components.
//!
//! Each component owns its view state, maps raw terminal events to
//! application events, and knows how to render itself.

mod movie_grid;
mod movie_modal;
mod search_bar;

pub(crate) use movie_grid::MovieGrid;
pub(crate) use movie_modal::MovieModal;
pub(crate) use search_bar::SearchBar;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::events::AppEvent;

pub(crate) trait AppEventProcessor {
    /// Processes a terminal event, returning `true` if it was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}
