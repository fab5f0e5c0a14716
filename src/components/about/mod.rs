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

//! About view: introduction, an expandable experience timeline and skills.

mod event;
mod render;

use crate::model::profile::TIMELINE;

pub(crate) struct AboutView {
    pub(crate) selected: usize,
    expanded: Vec<bool>,
}

impl AboutView {
    pub(crate) fn new() -> Self {
        Self {
            selected: 0,
            expanded: vec![false; TIMELINE.len()],
        }
    }

    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn toggle_selected(&mut self) {
        if let Some(expanded) = self.expanded.get_mut(self.selected) {
            *expanded = !*expanded;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if !self.expanded.is_empty() {
            self.selected = (self.selected + 1).min(self.expanded.len() - 1);
        }
    }

    pub(crate) fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_only_the_selected_entry() {
        let mut view = AboutView::new();
        view.select_next();
        view.toggle_selected();

        assert!(!view.is_expanded(0));
        assert!(view.is_expanded(1));

        view.toggle_selected();
        assert!(!view.is_expanded(1));
    }

    #[test]
    fn selection_stays_in_range() {
        let mut view = AboutView::new();
        view.select_previous();
        assert_eq!(view.selected, 0);

        for _ in 0..TIMELINE.len() + 3 {
            view.select_next();
        }
        assert_eq!(view.selected, TIMELINE.len() - 1);
        assert!(!view.is_expanded(TIMELINE.len()));
    }
}
