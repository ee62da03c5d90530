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

//! Render the status bar.
//!
//! A live notification takes priority. Otherwise the bar shows where the
//! user is in the result set, followed by key help for the focused component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    events::Focus,
    model::{
        notification::NotificationLevel,
        search::{MAX_PAGE, Search},
    },
    util::format,
};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = if let Some(notification) = &app.notification {
        let colour = match notification.level {
            NotificationLevel::Info => theme.info_fg,
            NotificationLevel::Error => theme.error_fg,
        };
        Line::from(Span::styled(notification.message.as_str(), Style::default().fg(colour)))
    } else {
        let mut spans = Vec::new();
        if let Some(summary) = page_summary(&app.search) {
            spans.push(Span::styled(summary, Style::default().fg(theme.text_fg)));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key_help(app), Style::default().fg(theme.muted_fg)));
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).style(Style::default().bg(theme.background_colour)), area);
}

/// Describes the current page, e.g. `Page 2/7, 132 results`.
fn page_summary(search: &Search) -> Option<String> {
    if !search.can_show_grid() {
        return None;
    }

    Some(format!(
        "Page {}/{}, {} results",
        search.page(),
        search.total_pages().clamp(1, MAX_PAGE),
        format::format_count(search.total_results())
    ))
}

fn key_help(app: &App) -> &'static str {
    if app.movie_modal.is_open() {
        "Esc close"
    } else {
        match app.focus {
            Focus::SearchBar => "Enter search  Esc results  Ctrl-C quit",
            Focus::Grid => "←↓↑→ move  Enter details  n/p page  / search  q quit",
        }
    }
}
