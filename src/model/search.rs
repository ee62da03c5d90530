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

//! Movie search state management.
//!
//! This module provides the state behind the search view: the current result
//! set, the loading and error flags, and the identity of the one search
//! request that is currently authoritative.
//!
//! Every call to [`Search::begin`] supersedes all earlier requests. Results
//! or failures that arrive for a superseded request are discarded, so a slow
//! stale response can never overwrite fresher results.

use crate::model::{Movie, RequestId, SearchPage, SearchQuery, SearchRequest};

/// The API refuses page numbers above this, whatever `total_pages` says.
pub(crate) const MAX_PAGE: u32 = 500;

/// What the main view should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewState {
    /// Nothing has been searched for yet.
    Idle,
    Loading,
    Error,
    /// The last search succeeded but matched nothing.
    Empty,
    Results,
}

/// The result of applying a completed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    Found(usize),
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageDirection {
    Next,
    Previous,
}

#[derive(Debug, Default)]
pub(crate) struct Search {
    movies: Vec<Movie>,
    loading: bool,
    error: bool,
    completed: bool,
    last_id: RequestId,
    current: Option<SearchRequest>,
    page: u32,
    total_pages: u32,
    total_results: u64,
}

impl Search {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a new authoritative search, discarding the previous results.
    pub(crate) fn begin(&mut self, query: SearchQuery, page: u32) -> SearchRequest {
        self.last_id = self.last_id.next();

        let request = SearchRequest {
            id: self.last_id,
            query,
            page: page.max(1),
        };

        self.movies.clear();
        self.error = false;
        self.completed = false;
        self.loading = true;
        self.current = Some(request.clone());

        request
    }

    /// Applies a successful response.
    ///
    /// Returns `None` when the response belongs to a superseded request.
    pub(crate) fn complete(&mut self, id: RequestId, page: SearchPage) -> Option<SearchOutcome> {
        if !self.is_current(id) {
            return None;
        }

        self.loading = false;
        self.completed = true;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.total_results = page.total_results;
        self.movies = page.results;

        if self.movies.is_empty() {
            Some(SearchOutcome::NoResults)
        } else {
            Some(SearchOutcome::Found(self.movies.len()))
        }
    }

    /// Records a failed request, returning `false` if it was superseded.
    pub(crate) fn fail(&mut self, id: RequestId) -> bool {
        if !self.is_current(id) {
            return false;
        }

        self.loading = false;
        self.error = true;
        true
    }

    pub(crate) fn is_current(&self, id: RequestId) -> bool {
        self.current.as_ref().is_some_and(|r| r.id == id)
    }

    pub(crate) fn view(&self) -> ViewState {
        if self.loading {
            ViewState::Loading
        } else if self.error {
            ViewState::Error
        } else if !self.movies.is_empty() {
            ViewState::Results
        } else if self.completed {
            ViewState::Empty
        } else {
            ViewState::Idle
        }
    }

    pub(crate) fn can_show_grid(&self) -> bool {
        self.view() == ViewState::Results
    }

    pub(crate) fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub(crate) fn movie(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub(crate) fn query(&self) -> Option<&SearchQuery> {
        self.current.as_ref().map(|r| &r.query)
    }

    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub(crate) fn total_results(&self) -> u64 {
        self.total_results
    }

    /// The page number to request when paging in `direction`, if any.
    ///
    /// Paging is only possible once the current search has completed.
    pub(crate) fn page_towards(&self, direction: PageDirection) -> Option<u32> {
        if !self.completed || self.loading {
            return None;
        }

        match direction {
            PageDirection::Next if self.page < self.total_pages.min(MAX_PAGE) => Some(self.page + 1),
            PageDirection::Previous if self.page > 1 => Some(self.page - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::parse(text).unwrap()
    }

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            ..Movie::default()
        }
    }

    fn page(number: u32, total_pages: u32, movies: Vec<Movie>) -> SearchPage {
        SearchPage {
            page: number,
            total_pages,
            total_results: movies.len() as u64,
            results: movies,
        }
    }

    #[test]
    fn starts_idle() {
        let search = Search::new();
        assert_eq!(search.view(), ViewState::Idle);
        assert!(!search.can_show_grid());
    }

    #[test]
    fn begin_clears_previous_results_and_sets_loading() {
        let mut search = Search::new();
        let first = search.begin(query("alien"), 1);
        search.complete(first.id, page(1, 1, vec![movie(1, "Alien")]));
        assert_eq!(search.view(), ViewState::Results);

        let second = search.begin(query("aliens"), 1);

        assert!(second.id > first.id);
        assert!(search.movies().is_empty());
        assert_eq!(search.view(), ViewState::Loading);
        assert_eq!(search.query().map(SearchQuery::as_str), Some("aliens"));
    }

    #[test]
    fn stale_response_does_not_overwrite_fresher_results() {
        let mut search = Search::new();
        let stale = search.begin(query("alien"), 1);
        let fresh = search.begin(query("aliens"), 1);

        let outcome = search.complete(fresh.id, page(1, 1, vec![movie(2, "Aliens")]));
        assert_eq!(outcome, Some(SearchOutcome::Found(1)));

        assert_eq!(search.complete(stale.id, page(1, 1, vec![movie(1, "Alien")])), None);
        assert!(!search.fail(stale.id));

        assert_eq!(search.view(), ViewState::Results);
        assert_eq!(search.movies()[0].title, "Aliens");
    }

    #[test]
    fn stale_failure_while_loading_keeps_loading() {
        let mut search = Search::new();
        let stale = search.begin(query("alien"), 1);
        search.begin(query("aliens"), 1);

        assert!(!search.fail(stale.id));
        assert_eq!(search.view(), ViewState::Loading);
    }

    #[test]
    fn failure_sets_error_view() {
        let mut search = Search::new();
        let request = search.begin(query("alien"), 1);

        assert!(search.fail(request.id));
        assert_eq!(search.view(), ViewState::Error);
        assert!(!search.can_show_grid());
    }

    #[test]
    fn zero_results_is_empty_not_error() {
        let mut search = Search::new();
        let request = search.begin(query("zzzzzz"), 1);

        let outcome = search.complete(request.id, page(1, 0, vec![]));

        assert_eq!(outcome, Some(SearchOutcome::NoResults));
        assert_eq!(search.view(), ViewState::Empty);
    }

    #[test]
    fn new_search_clears_error() {
        let mut search = Search::new();
        let failed = search.begin(query("alien"), 1);
        search.fail(failed.id);

        search.begin(query("alien"), 1);
        assert_eq!(search.view(), ViewState::Loading);
    }

    #[test]
    fn paging_is_bounded_by_total_pages() {
        let mut search = Search::new();
        let request = search.begin(query("star"), 1);
        search.complete(request.id, page(1, 2, vec![movie(1, "Star Wars")]));

        assert_eq!(search.page_towards(PageDirection::Previous), None);
        assert_eq!(search.page_towards(PageDirection::Next), Some(2));

        let request = search.begin(query("star"), 2);
        assert_eq!(search.page_towards(PageDirection::Next), None);

        search.complete(request.id, page(2, 2, vec![movie(2, "Star Trek")]));
        assert_eq!(search.page_towards(PageDirection::Next), None);
        assert_eq!(search.page_towards(PageDirection::Previous), Some(1));
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let mut search = Search::new();
        let request = search.begin(query("star"), 0);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn next_page_stops_at_api_limit() {
        let mut search = Search::new();
        let request = search.begin(query("love"), MAX_PAGE - 1);
        search.complete(request.id, page(MAX_PAGE - 1, 2_000, vec![movie(1, "Love")]));
        assert_eq!(search.page_towards(PageDirection::Next), Some(MAX_PAGE));

        let request = search.begin(query("love"), MAX_PAGE);
        search.complete(request.id, page(MAX_PAGE, 2_000, vec![movie(1, "Love")]));
        assert_eq!(search.page_towards(PageDirection::Next), None);
        assert_eq!(search.page_towards(PageDirection::Previous), Some(MAX_PAGE - 1));
    }
}
