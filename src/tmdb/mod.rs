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

//! Movie catalog HTTP client.
//!
//! This module wraps the single catalog endpoint the application uses, the
//! movie search, and classifies its failures. Every call can be abandoned
//! through a [`CancellationToken`], a cancelled call resolves to
//! [`TmdbError::Canceled`] so that callers can tell it apart from a real
//! failure.

pub(crate) mod image;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{
    config::TOKEN_ENV_VAR,
    model::{SearchPage, SearchQuery},
};

const SEARCH_MOVIE_PATH: &str = "search/movie";

/// Connection settings for the catalog API.
#[derive(Debug, Clone)]
pub(crate) struct TmdbSettings {
    pub(crate) base_url: String,
    pub(crate) access_token: Option<String>,
    pub(crate) language: String,
    pub(crate) include_adult: bool,
    pub(crate) connect_timeout: Duration,
}

/// Errors that can occur while querying the catalog.
#[derive(Debug, Error)]
pub(crate) enum TmdbError {
    /// The request was superseded and abandoned
    #[error("Request canceled")]
    Canceled,

    #[error("No access token configured, set TMDB_TOKEN or access_token in the configuration file")]
    MissingToken,

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport or response decoding failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl TmdbError {
    pub(crate) fn is_canceled(&self) -> bool {
        matches!(self, TmdbError::Canceled)
    }
}

/// Error body returned by the API alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status_message: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct TmdbClient {
    client: Client,
    settings: TmdbSettings,
}

impl TmdbClient {
    pub(crate) fn new(settings: TmdbSettings) -> Result<Self, TmdbError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(TmdbError::Client)?;

        if settings.access_token.is_none() {
            tracing::warn!("{TOKEN_ENV_VAR} is not set and no access token is configured, searches will fail");
        }

        Ok(Self { client, settings })
    }

    /// Searches the catalog for movies matching `query`.
    ///
    /// The request is raced against `cancel`, if the token fires first the
    /// in-flight request is dropped and [`TmdbError::Canceled`] is returned.
    pub(crate) async fn search_movies(
        &self,
        query: &SearchQuery,
        page: u32,
        cancel: &CancellationToken,
    ) -> Result<SearchPage, TmdbError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TmdbError::Canceled),
            result = self.fetch_search_page(query, page) => result,
        }
    }

    async fn fetch_search_page(&self, query: &SearchQuery, page: u32) -> Result<SearchPage, TmdbError> {
        let token = self.settings.access_token.as_deref().ok_or(TmdbError::MissingToken)?;
        let url = self.search_url(query, page)?;

        tracing::debug!(query = query.as_str(), page, "Searching movies");

        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let page: SearchPage = response.json().await?;

        tracing::debug!(
            page = page.page,
            results = page.results.len(),
            total_results = page.total_results,
            "Search page received"
        );

        Ok(page)
    }

    fn search_url(&self, query: &SearchQuery, page: u32) -> Result<Url, TmdbError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), SEARCH_MOVIE_PATH);

        let mut url = Url::parse(&raw).map_err(|e| TmdbError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("query", query.as_str())
            .append_pair("include_adult", if self.settings.include_adult { "true" } else { "false" })
            .append_pair("language", &self.settings.language)
            .append_pair("page", &page.max(1).to_string());

        Ok(url)
    }
}

fn api_error(status: StatusCode, body: &str) -> TmdbError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    TmdbError::Api {
        status: status.as_u16(),
        message,
    }
}
