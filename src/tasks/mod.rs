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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload network
//! requests from the main UI thread. It provides a dedicated worker thread,
//! driving its own async runtime, that translates [`AppTask`] requests into
//! catalog API calls and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.
//!
//! At most one search is in flight at a time: submitting a search cancels
//! the previous one, and a cancelled search reports nothing back.

mod handlers;
use handlers::*;

use anyhow::{Context, Result};
use std::{
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::{events::AppEvent, model::SearchRequest, tmdb::TmdbClient};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(SearchRequest),
    CancelSearch,
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns a single-threaded async runtime on which the HTTP
/// requests are driven, and exits once every task sender has been dropped.
///
/// # Arguments
///
/// * `client` - The catalog API client.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
///
/// # Errors
///
/// Returns an error if the runtime or the worker thread cannot be created.
pub(crate) fn spawn_task_worker(
    client: TmdbClient,
    task_rx: UnboundedReceiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create task runtime")?;

    thread::Builder::new()
        .name("task-worker".to_string())
        .spawn(move || {
            let ctx = TaskContext {
                client,
                event_tx,
                in_flight: None,
            };
            runtime.block_on(run_task_loop(ctx, task_rx));
        })
        .context("Failed to spawn task worker")
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext {
    client: TmdbClient,
    event_tx: Sender<AppEvent>,
    /// Cancellation handle of the search currently in flight.
    in_flight: Option<CancellationToken>,
}

impl TaskContext {
    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

async fn run_task_loop(mut ctx: TaskContext, mut task_rx: UnboundedReceiver<AppTask>) {
    while let Some(task) = task_rx.recv().await {
        handle_task(task, &mut ctx);
    }

    ctx.cancel_in_flight();
    tracing::debug!("Task channel closed, worker stopping");
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) {
    match task {
        AppTask::Search(request) => search(ctx, request),
        AppTask::CancelSearch => cancel_search(ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::mpsc::{self, RecvTimeoutError},
        time::Duration,
    };

    use axum::{Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get};
    use serde_json::json;
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::{
        model::{RequestId, SearchQuery},
        testing::spawn_mock_server,
        tmdb::TmdbSettings,
    };

    const WAIT: Duration = Duration::from_secs(5);
    const QUIET: Duration = Duration::from_millis(800);

    /// Mock endpoint: `slow` answers after a delay, `broken` fails, anything
    /// else answers immediately with a single movie titled after the query.
    fn router() -> Router {
        Router::new().route(
            "/search/movie",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("query").cloned().unwrap_or_default();
                match query.as_str() {
                    "broken" => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                    "slow" => tokio::time::sleep(Duration::from_millis(400)).await,
                    _ => {}
                }

                Json(json!({
                    "page": 1,
                    "results": [{ "id": 1, "title": query }],
                    "total_pages": 1,
                    "total_results": 1
                }))
                .into_response()
            }),
        )
    }

    fn start_worker() -> (tokio::sync::mpsc::UnboundedSender<AppTask>, mpsc::Receiver<AppEvent>) {
        let base_url = spawn_mock_server(router());
        let client = TmdbClient::new(TmdbSettings {
            base_url,
            access_token: Some("token".to_string()),
            language: "en-US".to_string(),
            include_adult: false,
            connect_timeout: Duration::from_secs(5),
        })
        .unwrap();

        let (task_tx, task_rx) = unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(client, task_rx, event_tx).unwrap();

        (task_tx, event_rx)
    }

    fn request(id: u64, query: &str) -> SearchRequest {
        SearchRequest {
            id: RequestId(id),
            query: SearchQuery::parse(query).unwrap(),
            page: 1,
        }
    }

    #[test]
    fn completes_a_search() {
        let (task_tx, event_rx) = start_worker();

        task_tx.send(AppTask::Search(request(1, "alien"))).unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::SearchCompleted(id, page) => {
                assert_eq!(id, RequestId(1));
                assert_eq!(page.results[0].title, "alien");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn new_search_supersedes_slow_search() {
        let (task_tx, event_rx) = start_worker();

        task_tx.send(AppTask::Search(request(1, "slow"))).unwrap();
        task_tx.send(AppTask::Search(request(2, "fast"))).unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::SearchCompleted(id, _) => assert_eq!(id, RequestId(2)),
            other => panic!("unexpected event: {other:?}"),
        }

        // The cancelled search reports neither results nor an error
        assert_eq!(event_rx.recv_timeout(QUIET).err(), Some(RecvTimeoutError::Timeout));
    }

    #[test]
    fn failure_is_reported_with_request_id() {
        let (task_tx, event_rx) = start_worker();

        task_tx.send(AppTask::Search(request(7, "broken"))).unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::SearchFailed(id, message) => {
                assert_eq!(id, RequestId(7));
                assert!(message.contains("500"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn cancel_search_is_silent() {
        let (task_tx, event_rx) = start_worker();

        task_tx.send(AppTask::Search(request(1, "slow"))).unwrap();
        task_tx.send(AppTask::CancelSearch).unwrap();

        assert_eq!(event_rx.recv_timeout(QUIET).err(), Some(RecvTimeoutError::Timeout));
    }
}
