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

use tokio_util::sync::CancellationToken;

use crate::{events::AppEvent, model::SearchRequest, tasks::TaskContext, tmdb::TmdbClient};

pub(super) fn search(ctx: &mut TaskContext, request: SearchRequest) {
    ctx.cancel_in_flight();

    let token = CancellationToken::new();
    ctx.in_flight = Some(token.clone());

    tokio::spawn(run_search(ctx.client.clone(), ctx.event_tx.clone(), request, token));
}

pub(super) fn cancel_search(ctx: &mut TaskContext) {
    ctx.cancel_in_flight();
}

async fn run_search(
    client: TmdbClient,
    event_tx: Sender<AppEvent>,
    request: SearchRequest,
    cancel: CancellationToken,
) {
    let SearchRequest { id, query, page } = request;

    let event = match client.search_movies(&query, page, &cancel).await {
        Ok(page) => AppEvent::SearchCompleted(id, page),
        Err(e) if e.is_canceled() => {
            tracing::debug!(request = id.0, query = query.as_str(), "Search superseded");
            return;
        }
        Err(e) => {
            tracing::error!(request = id.0, query = query.as_str(), error = %e, "Search failed");
            AppEvent::SearchFailed(id, e.to_string())
        }
    };

    if event_tx.send(event).is_err() {
        tracing::debug!(request = id.0, "Event channel closed, dropping search result");
    }
}
