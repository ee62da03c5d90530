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

//! UI rendering logic for the movie grid.
//!
//! Cards are laid out left to right, top to bottom, in as many columns as
//! fit the available width. Only the rows that fit the height are drawn,
//! starting from the grid's scroll position.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{components::MovieGrid, model::Movie, theme::Theme, util::format};

const CARD_MIN_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 6;

impl MovieGrid {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, movies: &[Movie], theme: &Theme) {
        let columns = (area.width / CARD_MIN_WIDTH).max(1);
        let rows = (area.height / CARD_HEIGHT).max(1);
        self.set_viewport(columns as usize, rows as usize);

        let card_width = area.width / columns;
        let first = self.first_row() * columns as usize;
        let visible = movies.iter().enumerate().skip(first).take((columns * rows) as usize);

        for (index, movie) in visible {
            let offset = (index - first) as u16;
            let card = Rect {
                x: area.x + (offset % columns) * card_width,
                y: area.y + (offset / columns) * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height),
            };

            draw_card(f, card.intersection(area), movie, self.selected == Some(index), theme);
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, movie: &Movie, highlighted: bool, theme: &Theme) {
    let border_style = if highlighted {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title_width = inner.width as usize;
    let title = format::truncate(&movie.title, title_width);

    let title_style = if highlighted {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.card_title_fg).add_modifier(Modifier::BOLD)
    };

    let year = movie.release_year().unwrap_or("----");

    let lines = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(vec![
            Span::styled(year.to_string(), Style::default().fg(theme.card_year_fg)),
            Span::raw("  "),
            Span::styled(format::format_rating(movie.vote_average), Style::default().fg(theme.card_rating_fg)),
        ]),
        Line::from(Span::styled(movie.overview.as_str(), Style::default().fg(theme.muted_fg))),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
