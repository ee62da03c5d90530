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

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{components::MovieModal, theme::Theme, util::format};

impl MovieModal {
    /// Draws the modal centred over `area`, if a movie is open.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(movie) = &self.movie else {
            return;
        };

        let popup = format::centered_rect(area, 70, 70);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .title(Line::from(format!(" {} ", movie.title)).style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)))
            .title_bottom(Line::from(" Esc close ").alignment(Alignment::Right).style(Style::default().fg(theme.muted_fg)))
            .padding(Padding::new(2, 2, 1, 1));

        let label = Style::default().fg(theme.muted_fg);
        let value = Style::default().fg(theme.text_fg);

        let mut lines = Vec::new();

        if !movie.original_title.is_empty() && movie.original_title != movie.title {
            lines.push(Line::from(vec![
                Span::styled("Original title: ", label),
                Span::styled(movie.original_title.as_str(), value),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled("Release date: ", label),
            Span::styled(movie.release_date().unwrap_or("unknown"), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(
                format!("{}/10 ({} votes)", format::format_rating(movie.vote_average), format::format_count(movie.vote_count)),
                Style::default().fg(theme.card_rating_fg),
            ),
        ]));

        if !movie.original_language.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Language: ", label),
                Span::styled(movie.original_language.as_str(), value),
            ]));
        }

        lines.push(Line::default());
        if movie.overview.is_empty() {
            lines.push(Line::from(Span::styled("No overview available.", label)));
        } else {
            lines.push(Line::from(Span::styled(movie.overview.as_str(), value)));
        }

        let poster = self.poster_url(movie);
        let backdrop = self.backdrop_url(movie);

        if !poster.is_empty() || !backdrop.is_empty() {
            lines.push(Line::default());
        }
        if !poster.is_empty() {
            lines.push(Line::from(vec![Span::styled("Poster: ", label), Span::styled(poster, value)]));
        }
        if !backdrop.is_empty() {
            lines.push(Line::from(vec![Span::styled("Backdrop: ", label), Span::styled(backdrop, value)]));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        f.render_widget(paragraph, popup);
    }
}
