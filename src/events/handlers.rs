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

use std::time::Instant;

use anyhow::Result;

use crate::{
    App,
    events::Focus,
    model::{
        RequestId, SearchPage, SearchQuery,
        notification::Notification,
        search::{PageDirection, SearchOutcome},
    },
    tasks::AppTask,
};

pub(crate) const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";
pub(crate) const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";
const LAST_PAGE_MESSAGE: &str = "This is the last page of results.";
const FIRST_PAGE_MESSAGE: &str = "This is the first page of results.";

pub(super) fn handle_submit_query(app: &mut App, text: &str) -> Result<()> {
    match SearchQuery::parse(text) {
        Some(query) => {
            app.focus = Focus::Grid;
            start_search(app, query, 1)
        }
        None => {
            app.notification = Some(Notification::error(EMPTY_QUERY_MESSAGE));
            Ok(())
        }
    }
}

/// Makes a new search authoritative and hands it to the task worker, which
/// cancels whatever search was still in flight.
fn start_search(app: &mut App, query: SearchQuery, page: u32) -> Result<()> {
    let request = app.search.begin(query, page);

    tracing::info!(request = request.id.0, query = request.query.as_str(), page = request.page, "Starting search");

    app.movie_grid.reset(0);
    app.movie_modal.close();
    app.task_tx.send(AppTask::Search(request))?;

    Ok(())
}

pub(super) fn handle_search_completed(app: &mut App, id: RequestId, page: SearchPage) {
    match app.search.complete(id, page) {
        None => tracing::debug!(request = id.0, "Ignoring stale search results"),
        Some(SearchOutcome::NoResults) => {
            app.movie_grid.reset(0);
            app.notification = Some(Notification::error(NO_RESULTS_MESSAGE));
        }
        Some(SearchOutcome::Found(count)) => {
            tracing::info!(request = id.0, count, "Search completed");
            app.movie_grid.reset(count);
        }
    }
}

pub(super) fn handle_search_failed(app: &mut App, id: RequestId, message: &str) {
    if app.search.fail(id) {
        tracing::error!(request = id.0, error = message, "Search request failed");
    } else {
        tracing::debug!(request = id.0, "Ignoring failure of stale search");
    }
}

pub(super) fn handle_change_page(app: &mut App, direction: PageDirection) -> Result<()> {
    let Some(page) = app.search.page_towards(direction) else {
        if app.search.can_show_grid() {
            let message = match direction {
                PageDirection::Next => LAST_PAGE_MESSAGE,
                PageDirection::Previous => FIRST_PAGE_MESSAGE,
            };
            app.notification = Some(Notification::info(message));
        }
        return Ok(());
    };

    match app.search.query().cloned() {
        Some(query) => start_search(app, query, page),
        None => Ok(()),
    }
}

pub(super) fn handle_select_movie(app: &mut App, index: usize) {
    if let Some(movie) = app.search.movie(index) {
        app.movie_modal.open(movie.clone());
    }
}

pub(super) fn handle_close_movie(app: &mut App) {
    app.movie_modal.close();
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    app.focus = focus;
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);

    if app
        .notification
        .as_ref()
        .is_some_and(|n| n.is_expired(Instant::now()))
    {
        app.notification = None;
    }
}
