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

//! Interactive movie grid and cursor management.
//!
//! This module provides the grid of result cards. The grid only tracks the
//! number of cards, its cursor, and how many columns and rows fit on screen;
//! the movies themselves stay in the search model and are passed in when the
//! grid is drawn.

mod event;
mod render;

pub(crate) struct MovieGrid {
    len: usize,
    columns: usize,
    visible_rows: usize,
    first_row: usize,
    selected: Option<usize>,
}

impl MovieGrid {
    pub(crate) fn new() -> Self {
        Self {
            len: 0,
            columns: 1,
            visible_rows: 1,
            first_row: 0,
            selected: None,
        }
    }

    /// Replaces the grid contents with `len` cards and moves the cursor to
    /// the first one.
    pub(crate) fn reset(&mut self, len: usize) {
        self.len = len;
        self.first_row = 0;
        self.selected = if len > 0 { Some(0) } else { None };
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn first_row(&self) -> usize {
        self.first_row
    }

    /// Updates the layout to the space available at render time.
    pub(crate) fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.scroll_to_selection();
    }

    fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
            self.scroll_to_selection();
        }
    }

    fn goto_next(&mut self) {
        match self.selected {
            Some(i) => self.select(i + 1),
            None => self.select(0),
        }
    }

    fn goto_previous(&mut self) {
        match self.selected {
            Some(i) if i > 0 => self.select(i - 1),
            Some(_) => {}
            None => self.select(0),
        }
    }

    fn goto_down(&mut self) {
        let Some(i) = self.selected else {
            return self.select(0);
        };

        if i + self.columns < self.len {
            self.select(i + self.columns);
        } else if self.len > 0 && (self.len - 1) / self.columns > i / self.columns {
            // The row below is partial and has no card under the cursor
            self.select(self.len - 1);
        }
    }

    fn goto_up(&mut self) {
        match self.selected {
            Some(i) if i >= self.columns => self.select(i - self.columns),
            Some(_) => {}
            None => self.select(0),
        }
    }

    fn goto_first(&mut self) {
        self.select(0);
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.select(self.len - 1);
        }
    }

    fn scroll_to_selection(&mut self) {
        let Some(i) = self.selected else {
            self.first_row = 0;
            return;
        };

        let row = i / self.columns;
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + self.visible_rows {
            self.first_row = row + 1 - self.visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(len: usize, columns: usize, rows: usize) -> MovieGrid {
        let mut grid = MovieGrid::new();
        grid.reset(len);
        grid.set_viewport(columns, rows);
        grid
    }

    #[test]
    fn reset_selects_first_card_or_nothing() {
        assert_eq!(grid(3, 2, 2).selected(), Some(0));
        assert_eq!(grid(0, 2, 2).selected(), None);
    }

    #[test]
    fn horizontal_movement_stops_at_ends() {
        let mut grid = grid(3, 3, 1);

        grid.goto_previous();
        assert_eq!(grid.selected(), Some(0));

        grid.goto_next();
        grid.goto_next();
        grid.goto_next();
        assert_eq!(grid.selected(), Some(2));
    }

    #[test]
    fn vertical_movement_moves_by_row() {
        // 0 1 2
        // 3 4 5
        // 6
        let mut grid = grid(7, 3, 3);

        grid.goto_next();
        grid.goto_down();
        assert_eq!(grid.selected(), Some(4));

        // Nothing directly below 4, but there is a partial row
        grid.goto_down();
        assert_eq!(grid.selected(), Some(6));

        grid.goto_down();
        assert_eq!(grid.selected(), Some(6));

        grid.goto_up();
        assert_eq!(grid.selected(), Some(3));
        grid.goto_up();
        grid.goto_up();
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn first_and_last() {
        let mut grid = grid(10, 4, 2);

        grid.goto_last();
        assert_eq!(grid.selected(), Some(9));

        grid.goto_first();
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut grid = grid(20, 2, 3);

        grid.goto_last();
        assert_eq!(grid.first_row(), 7);

        grid.goto_first();
        assert_eq!(grid.first_row(), 0);
    }

    #[test]
    fn narrowing_viewport_rescrolls() {
        let mut grid = grid(20, 4, 5);
        grid.goto_last();
        assert_eq!(grid.first_row(), 0);

        grid.set_viewport(1, 5);
        assert_eq!(grid.first_row(), 15);
    }

    #[test]
    fn empty_grid_ignores_navigation() {
        let mut grid = grid(0, 3, 3);

        grid.goto_next();
        grid.goto_down();
        grid.goto_last();

        assert_eq!(grid.selected(), None);
    }
}
