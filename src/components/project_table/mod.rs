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

//! Interactive project table widget and state management.
//!
//! The list layout of the showcase. The table only tracks a cursor over the
//! visible projects; the projects themselves are passed in when drawing.

mod event;
mod render;

use ratatui::widgets::TableState;

pub(crate) struct ProjectTable {
    pub(crate) table_state: TableState,
    len: usize,
}

impl ProjectTable {
    pub(crate) fn new(len: usize) -> Self {
        let mut table = Self {
            table_state: TableState::new(),
            len: 0,
        };
        table.set_len(len);
        table
    }

    /// Adopts a new row count, keeping the cursor on a valid row.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.len {
            self.table_state.select(Some(index));
        }
    }

    pub(crate) fn goto_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if self.len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.table_state.select(Some(self.len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn navigation_wraps() {
        let mut table = ProjectTable::new(3);
        assert_eq!(table.selected(), Some(0));

        table.goto_previous();
        assert_eq!(table.selected(), Some(2));
        table.goto_next();
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn shrinking_clamps_the_cursor() {
        let mut table = ProjectTable::new(5);
        table.goto_last();
        table.set_len(2);
        assert_eq!(table.selected(), Some(1));

        table.set_len(0);
        assert_eq!(table.selected(), None);
        table.goto_next();
        assert_eq!(table.selected(), None);

        table.set_len(4);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut table = ProjectTable::new(2);
        table.select(5);
        assert_eq!(table.selected(), Some(0));
        table.select(1);
        assert_eq!(table.selected(), Some(1));
    }
}
