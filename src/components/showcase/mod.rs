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

//! Project showcase view.
//!
//! Presents the filtered projects either as the auto-scrolling carousel or as
//! a plain table, with the filter bar above and a detail modal on top. All
//! positions handled here are positions in the visible (filtered) list.

mod event;
mod render;

use ratatui::layout::Rect;
use tui_input::Input;

use crate::{
    carousel::Carousel,
    components::ProjectTable,
    config::CarouselConfig,
    model::LinkKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShowcaseLayout {
    Carousel,
    List,
}

impl ShowcaseLayout {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "carousel" | "c" => Some(ShowcaseLayout::Carousel),
            "list" | "table" | "l" => Some(ShowcaseLayout::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShowcaseAction {
    Consumed,
    FilterChanged,
    EnterSearch,
    LeaveSearch,
    OpenLink(usize, LinkKind),
}

pub(crate) struct ShowcaseView {
    pub(crate) layout: ShowcaseLayout,
    pub(crate) carousel: Carousel,
    pub(crate) table: ProjectTable,
    speeds: Vec<f64>,

    /// Position of the project shown in the detail modal.
    pub(crate) modal: Option<usize>,

    pub(crate) search_input: Input,
    pub(crate) tags: Vec<String>,
    pub(crate) tag_cursor: usize,

    /// Card width requested by the configuration, in cells.
    pub(crate) card_width: u16,
    /// Screen area of the carousel track from the last draw, for mouse hits.
    pub(crate) track_area: Option<Rect>,
}

impl ShowcaseView {
    pub(crate) fn new(
        config: &CarouselConfig,
        reduced_motion: bool,
        tags: Vec<String>,
        item_count: usize,
    ) -> Self {
        let mut carousel = Carousel::new(config.settings(), item_count);
        carousel.set_reduced_motion(reduced_motion);

        Self {
            layout: ShowcaseLayout::Carousel,
            carousel,
            table: ProjectTable::new(item_count),
            speeds: config.speeds(),
            modal: None,
            search_input: Input::default(),
            tags,
            tag_cursor: 0,
            card_width: config.item_width.max(1),
            track_area: None,
        }
    }

    pub(crate) fn item_count(&self) -> usize {
        self.carousel.item_count()
    }

    pub(crate) fn set_item_count(&mut self, count: usize) {
        self.carousel.set_item_count(count);
        self.table.set_len(count);
        if self.modal.is_some_and(|m| m >= count) {
            self.modal = None;
        }
    }

    /// The project under the cursor in the current layout.
    pub(crate) fn active_position(&self) -> Option<usize> {
        if self.item_count() == 0 {
            return None;
        }
        match self.layout {
            ShowcaseLayout::Carousel => Some(self.carousel.active_index()),
            ShowcaseLayout::List => self.table.selected(),
        }
    }

    pub(crate) fn go_to(&mut self, position: usize) {
        self.carousel.go_to(position);
        self.table.select(position);
    }

    pub(crate) fn next(&mut self) {
        match self.layout {
            ShowcaseLayout::Carousel => self.carousel.next(),
            ShowcaseLayout::List => self.table.goto_next(),
        }
    }

    pub(crate) fn prev(&mut self) {
        match self.layout {
            ShowcaseLayout::Carousel => self.carousel.prev(),
            ShowcaseLayout::List => self.table.goto_previous(),
        }
    }

    /// Switches layout keeping the same project under the cursor.
    pub(crate) fn set_layout(&mut self, layout: ShowcaseLayout) {
        if layout == self.layout {
            return;
        }
        let position = self.active_position();
        self.layout = layout;
        if let Some(position) = position {
            self.go_to(position);
        }
    }

    pub(crate) fn toggle_layout(&mut self) {
        let layout = match self.layout {
            ShowcaseLayout::Carousel => ShowcaseLayout::List,
            ShowcaseLayout::List => ShowcaseLayout::Carousel,
        };
        self.set_layout(layout);
    }

    pub(crate) fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub(crate) fn set_speed(&mut self, speed: f64) {
        self.carousel.set_speed(speed);
    }

    /// Steps to the next configured speed, wrapping to the slowest.
    pub(crate) fn cycle_speed(&mut self) {
        let current = self.carousel.speed();
        let next = self
            .speeds
            .iter()
            .copied()
            .find(|s| *s > current)
            .or_else(|| self.speeds.first().copied());
        if let Some(speed) = next {
            self.carousel.set_speed(speed);
        }
    }

    pub(crate) fn open_modal(&mut self) {
        self.modal = self.active_position();
    }

    pub(crate) fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Moves the modal to a neighbouring project, keeping the cursor with it.
    fn step_modal(&mut self, forward: bool) {
        let count = self.item_count();
        let Some(current) = self.modal else {
            return;
        };
        if count == 0 {
            return;
        }
        let position = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.modal = Some(position);
        self.go_to(position);
    }

    pub(crate) fn set_search(&mut self, text: &str) {
        self.search_input = Input::new(text.to_string());
    }

    pub(crate) fn tag_at_cursor(&self) -> Option<&str> {
        self.tags.get(self.tag_cursor).map(String::as_str)
    }

    fn move_tag_cursor(&mut self, forward: bool) {
        let count = self.tags.len();
        if count == 0 {
            return;
        }
        self.tag_cursor = if forward {
            (self.tag_cursor + 1) % count
        } else {
            (self.tag_cursor + count - 1) % count
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn view(count: usize) -> ShowcaseView {
        ShowcaseView::new(
            &CarouselConfig::default(),
            false,
            vec!["2D".into(), "API".into(), "Testing".into()],
            count,
        )
    }

    #[test]
    fn layout_switch_keeps_position() {
        let mut view = view(5);
        view.go_to(3);
        assert_eq!(view.active_position(), Some(3));

        view.toggle_layout();
        assert_eq!(view.layout, ShowcaseLayout::List);
        assert_eq!(view.active_position(), Some(3));

        view.next();
        view.set_layout(ShowcaseLayout::Carousel);
        assert_eq!(view.active_position(), Some(4));
    }

    #[test]
    fn empty_showcase_has_no_active_project() {
        let mut view = view(4);
        view.set_item_count(0);
        assert_eq!(view.active_position(), None);

        view.open_modal();
        assert_eq!(view.modal, None);
    }

    #[test]
    fn modal_closes_when_its_project_is_filtered_out() {
        let mut view = view(6);
        view.go_to(5);
        view.open_modal();
        assert_eq!(view.modal, Some(5));

        view.set_item_count(3);
        assert_eq!(view.modal, None);
    }

    #[test]
    fn modal_steps_wrap() {
        let mut view = view(3);
        view.go_to(2);
        view.open_modal();
        view.step_modal(true);
        assert_eq!(view.modal, Some(0));
        assert_eq!(view.active_position(), Some(0));
        view.step_modal(false);
        assert_eq!(view.modal, Some(2));
    }

    #[test]
    fn speed_cycles_through_choices() {
        let mut view = view(3);
        assert_eq!(view.carousel.speed(), 1.0);
        view.cycle_speed();
        assert_eq!(view.carousel.speed(), 2.0);
        view.cycle_speed();
        assert_eq!(view.carousel.speed(), 0.5);
        view.cycle_speed();
        assert_eq!(view.carousel.speed(), 1.0);
    }

    #[test]
    fn tag_cursor_wraps() {
        let mut view = view(1);
        assert_eq!(view.tag_at_cursor(), Some("2D"));
        view.move_tag_cursor(false);
        assert_eq!(view.tag_at_cursor(), Some("Testing"));
        view.move_tag_cursor(true);
        assert_eq!(view.tag_at_cursor(), Some("2D"));
    }
}
