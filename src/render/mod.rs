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

//! User interface rendering logic.
//!
//! The screen is split into the search bar, the main body and a one line
//! status bar. The body reflects the current [`ViewState`] of the search, and
//! the movie modal, when open, is drawn over everything else.

mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::{App, events::Focus, model::search::ViewState, render::status::draw_status, theme::Theme};

const ERROR_MESSAGE: &str = "There was an error, please try again...";

const IDLE_HINT: &str = "Type a title and press Enter to search.";
const EMPTY_HINT: &str = "Nothing matched, try another title.";

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Renders the whole user interface from the current [`App`] state.
///
/// Takes the application mutably so the grid can record how many cards fit
/// the frame, which keyboard navigation relies on.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_bar.draw(f, outer[0], &app.theme, app.focus == Focus::SearchBar);

    match app.search.view() {
        ViewState::Idle => draw_message(f, outer[1], IDLE_HINT, Style::default().fg(app.theme.muted_fg)),
        ViewState::Loading => draw_loading(f, outer[1], app.ticks, &app.theme),
        ViewState::Error => draw_message(f, outer[1], ERROR_MESSAGE, Style::default().fg(app.theme.error_fg)),
        ViewState::Empty => draw_message(f, outer[1], EMPTY_HINT, Style::default().fg(app.theme.muted_fg)),
        ViewState::Results => app.movie_grid.draw(f, outer[1], app.search.movies(), &app.theme),
    }

    draw_status(f, outer[2], app);

    app.movie_modal.draw(f, area, &app.theme);
}

fn draw_loading(f: &mut Frame, area: Rect, ticks: u64, theme: &Theme) {
    let frame = SPINNER[(ticks % SPINNER.len() as u64) as usize];
    let text = format!("{frame} Loading...");
    draw_message(f, area, &text, Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
}

fn draw_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let [_, middle, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    f.render_widget(
        Paragraph::new(Line::from(text).style(style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}
