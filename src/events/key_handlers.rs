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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::AppEventProcessor,
    events::{AppEvent, Focus},
    model::search::PageDirection,
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. Input goes,
/// in order of precedence, to:
///
/// * **Application Control**: `Ctrl-C` exits from anywhere.
/// * **Movie Details**: while open the modal captures every key.
/// * **Focused Component**: the search bar, or the results grid.
/// * **Global Keys**: quitting, paging and focusing the search bar.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.movie_modal.is_open() {
        app.movie_modal.process_event(&event, &app.event_tx)?;
        return Ok(());
    }

    let handled = match app.focus {
        Focus::SearchBar => app.search_bar.process_event(&event, &app.event_tx)?,
        Focus::Grid => app.movie_grid.process_event(&event, &app.event_tx)?,
    };

    if !handled {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => {
            app.event_tx.send(AppEvent::SetFocus(Focus::SearchBar))?
        }

        KeyCode::Char('n') | KeyCode::PageDown => {
            app.event_tx.send(AppEvent::ChangePage(PageDirection::Next))?
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            app.event_tx.send(AppEvent::ChangePage(PageDirection::Previous))?
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use super::*;
    use crate::{
        config::AppConfig,
        events::handle_event,
        model::{Movie, SearchPage, search::ViewState},
        tasks::AppTask,
    };

    fn app() -> (App, UnboundedReceiver<AppTask>) {
        let (task_tx, task_rx) = unbounded_channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    /// Feeds a key press through the event loop, processing every event it
    /// triggers. Returns `true` if the application asked to exit.
    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, modifiers))).unwrap();

        while let Ok(event) = app.event_rx.try_recv() {
            if matches!(event, AppEvent::ExitApplication) {
                return true;
            }
            handle_event(app, event).unwrap();
        }

        false
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn complete_with(app: &mut App, task_rx: &mut UnboundedReceiver<AppTask>, titles: &[&str]) {
        let Ok(AppTask::Search(request)) = task_rx.try_recv() else {
            panic!("expected a search task");
        };

        let page = SearchPage {
            page: 1,
            total_pages: 1,
            total_results: titles.len() as u64,
            results: titles
                .iter()
                .map(|t| Movie {
                    title: t.to_string(),
                    ..Movie::default()
                })
                .collect(),
        };
        handle_event(app, AppEvent::SearchCompleted(request.id, page)).unwrap();
    }

    #[test]
    fn typing_and_enter_submits_search() {
        let (mut app, mut task_rx) = app();
        assert_eq!(app.focus, Focus::SearchBar);

        type_text(&mut app, "alien");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        let Ok(AppTask::Search(request)) = task_rx.try_recv() else {
            panic!("expected a search task");
        };
        assert_eq!(request.query.as_str(), "alien");
        assert_eq!(app.focus, Focus::Grid);
    }

    #[test]
    fn q_types_into_search_bar_but_quits_from_grid() {
        let (mut app, _task_rx) = app();

        assert!(!press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(app.search_bar.value(), "q");

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Grid);
        assert!(press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE));
    }

    #[test]
    fn ctrl_c_quits_from_search_bar() {
        let (mut app, _task_rx) = app();
        assert!(press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn enter_on_grid_opens_modal_which_captures_keys() {
        let (mut app, mut task_rx) = app();
        type_text(&mut app, "alien");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        complete_with(&mut app, &mut task_rx, &["Alien", "Aliens", "Alien 3"]);
        assert_eq!(app.search.view(), ViewState::Results);

        press(&mut app, KeyCode::Right, KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.movie_modal.movie().map(|m| m.title.as_str()), Some("Aliens"));

        // The modal swallows navigation and paging keys
        press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(task_rx.try_recv().is_err());

        assert!(!press(&mut app, KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.movie_modal.is_open());
    }

    #[test]
    fn slash_returns_focus_to_search_bar() {
        let (mut app, _task_rx) = app();
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Grid);

        press(&mut app, KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::SearchBar);
        assert_eq!(app.search_bar.value(), "");
    }

    #[test]
    fn empty_submit_does_not_search() {
        let (mut app, mut task_rx) = app();

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(task_rx.try_recv().is_err());
        assert!(app.notification.is_some());
        assert_eq!(app.focus, Focus::SearchBar);
    }
}
