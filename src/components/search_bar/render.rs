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

//! Render the search input, its current text, the cursor and so on.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

const PLACEHOLDER: &str = "Search movies...";

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(Line::from(" Search ").style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let content = if self.input.value().is_empty() && !focused {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_fg)))
        } else {
            Line::from(Span::styled(self.input.value(), Style::default().fg(theme.text_fg)))
        };

        let paragraph = Paragraph::new(content).scroll((0, scroll as u16)).block(block);
        f.render_widget(paragraph, area);

        if focused {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
