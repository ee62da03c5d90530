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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the movie
//! records returned by the catalog search API, a page of those results, and
//! the search query and request identifiers used to track which search is
//! currently authoritative.

pub(crate) mod notification;
pub(crate) mod search;

use serde::Deserialize;

/// A catalog record as returned by the movie search API.
///
/// The shape is passed through from the API response, fields that the API
/// may omit fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Movie {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) original_title: String,
    pub(crate) original_language: String,
    pub(crate) overview: String,
    pub(crate) poster_path: Option<String>,
    pub(crate) backdrop_path: Option<String>,
    pub(crate) release_date: Option<String>,
    pub(crate) vote_average: f64,
    pub(crate) vote_count: u64,
    pub(crate) popularity: f64,
    pub(crate) genre_ids: Vec<u32>,
    pub(crate) adult: bool,
    pub(crate) video: bool,
}

impl Movie {
    /// The release date, if the API supplied a non-empty one.
    pub(crate) fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref().filter(|d| !d.is_empty())
    }

    /// The four digit release year, if known.
    pub(crate) fn release_year(&self) -> Option<&str> {
        self.release_date().and_then(|d| d.get(..4))
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SearchPage {
    pub(crate) page: u32,
    pub(crate) results: Vec<Movie>,
    pub(crate) total_pages: u32,
    pub(crate) total_results: u64,
}

/// Free-text search term entered by the user.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchQuery(String);

impl SearchQuery {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies a submitted search, later requests have larger identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) struct RequestId(pub(crate) u64);

impl RequestId {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A search to be executed by the task worker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchRequest {
    pub(crate) id: RequestId,
    pub(crate) query: SearchQuery,
    pub(crate) page: u32,
}
