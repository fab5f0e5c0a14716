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

//! Event routing for the showcase view.
//!
//! Keys go to the search box when it has focus, then to the detail modal
//! when one is open, then to the layout and filter bindings. Anything left
//! over returns `None` so the global bindings can have it.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{ShowcaseAction, ShowcaseLayout, ShowcaseView},
    events::Focus,
    model::{LinkKind, filter::FilterState},
};

impl ShowcaseView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        filter: &mut FilterState,
        focus: Focus,
    ) -> Option<ShowcaseAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if focus == Focus::SearchInput {
            return Some(self.process_search_event(event, filter));
        }

        if self.modal.is_some() {
            return self.process_modal_event(event);
        }

        let action = match key_event.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.prev();
                ShowcaseAction::Consumed
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.next();
                ShowcaseAction::Consumed
            }
            KeyCode::Enter => {
                self.open_modal();
                ShowcaseAction::Consumed
            }

            KeyCode::Char('/') => ShowcaseAction::EnterSearch,
            KeyCode::Char('c') => {
                filter.category = filter.category.cycle();
                ShowcaseAction::FilterChanged
            }
            KeyCode::Char('s') => {
                filter.sort = filter.sort.cycle();
                ShowcaseAction::FilterChanged
            }
            KeyCode::Char('[') => {
                self.move_tag_cursor(false);
                ShowcaseAction::Consumed
            }
            KeyCode::Char(']') => {
                self.move_tag_cursor(true);
                ShowcaseAction::Consumed
            }
            KeyCode::Char('t') => match self.tag_at_cursor() {
                Some(tag) => {
                    filter.toggle_tag(tag);
                    ShowcaseAction::FilterChanged
                }
                None => ShowcaseAction::Consumed,
            },
            KeyCode::Char('x') => {
                *filter = FilterState::default();
                self.set_search("");
                ShowcaseAction::FilterChanged
            }

            KeyCode::Char('v') => {
                self.toggle_layout();
                ShowcaseAction::Consumed
            }
            KeyCode::Char('>') => {
                self.cycle_speed();
                ShowcaseAction::Consumed
            }
            // Pinning stands in for keyboard focus on the track
            KeyCode::Char('p') => {
                if self.carousel.is_focused() {
                    self.carousel.blur();
                } else {
                    self.carousel.focus();
                }
                ShowcaseAction::Consumed
            }

            _ if self.layout == ShowcaseLayout::List && self.table.process_event(event) => {
                ShowcaseAction::Consumed
            }

            _ => return None,
        };

        Some(action)
    }

    fn process_search_event(&mut self, event: &Event, filter: &mut FilterState) -> ShowcaseAction {
        if let Event::Key(key_event) = event
            && matches!(key_event.code, KeyCode::Esc | KeyCode::Enter)
        {
            return ShowcaseAction::LeaveSearch;
        }

        self.search_input.handle_event(event);
        if self.search_input.value() == filter.search {
            return ShowcaseAction::Consumed;
        }

        filter.search = self.search_input.value().to_string();
        ShowcaseAction::FilterChanged
    }

    fn process_modal_event(&mut self, event: &Event) -> Option<ShowcaseAction> {
        let Event::Key(key_event) = event else {
            return None;
        };
        let position = self.modal?;

        let action = match key_event.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                self.close_modal();
                ShowcaseAction::Consumed
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.step_modal(false);
                ShowcaseAction::Consumed
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.step_modal(true);
                ShowcaseAction::Consumed
            }
            KeyCode::Char('r') => ShowcaseAction::OpenLink(position, LinkKind::Repo),
            KeyCode::Char('d') => ShowcaseAction::OpenLink(position, LinkKind::Demo),
            KeyCode::Char('c') => ShowcaseAction::OpenLink(position, LinkKind::CaseStudy),
            _ => return None,
        };

        Some(action)
    }

    /// Hover pauses, dragging scrubs, and the wheel steps one card.
    pub(crate) fn process_mouse(&mut self, mouse: MouseEvent) {
        let Some(area) = self.track_area else {
            return;
        };
        let inside = area.contains(Position::new(mouse.column, mouse.row));
        let x = f64::from(mouse.column);

        match mouse.kind {
            MouseEventKind::Moved => {
                if inside {
                    self.carousel.pointer_enter();
                } else {
                    self.carousel.pointer_leave();
                }
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.carousel.pointer_enter();
                self.carousel.drag_start(x);
            }
            MouseEventKind::Drag(MouseButton::Left) => self.carousel.drag_to(x),
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel.drag_end();
                if !inside {
                    self.carousel.pointer_leave();
                }
            }
            MouseEventKind::ScrollDown if inside => self.next(),
            MouseEventKind::ScrollUp if inside => self.prev(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::{
        carousel::CarouselState,
        config::CarouselConfig,
        model::filter::{CategoryFilter, SortKey},
    };

    fn view() -> ShowcaseView {
        ShowcaseView::new(&CarouselConfig::default(), false, vec!["API".into(), "UI".into()], 4)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn filter_keys_change_the_filter() {
        let mut view = view();
        let mut filter = FilterState::default();

        let action = view.process_event(&key(KeyCode::Char('c')), &mut filter, Focus::None);
        assert_eq!(action, Some(ShowcaseAction::FilterChanged));
        assert_ne!(filter.category, CategoryFilter::All);

        view.process_event(&key(KeyCode::Char('s')), &mut filter, Focus::None);
        assert_eq!(filter.sort, SortKey::Oldest);

        view.process_event(&key(KeyCode::Char(']')), &mut filter, Focus::None);
        view.process_event(&key(KeyCode::Char('t')), &mut filter, Focus::None);
        assert!(filter.tags.contains("UI"));

        view.process_event(&key(KeyCode::Char('x')), &mut filter, Focus::None);
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn search_input_updates_filter() {
        let mut view = view();
        let mut filter = FilterState::default();

        assert_eq!(
            view.process_event(&key(KeyCode::Char('/')), &mut filter, Focus::None),
            Some(ShowcaseAction::EnterSearch)
        );

        let action = view.process_event(&key(KeyCode::Char('q')), &mut filter, Focus::SearchInput);
        assert_eq!(action, Some(ShowcaseAction::FilterChanged));
        assert_eq!(filter.search, "q");

        assert_eq!(
            view.process_event(&key(KeyCode::Enter), &mut filter, Focus::SearchInput),
            Some(ShowcaseAction::LeaveSearch)
        );
    }

    #[test]
    fn modal_owns_link_keys() {
        let mut view = view();
        let mut filter = FilterState::default();

        view.process_event(&key(KeyCode::Char('l')), &mut filter, Focus::None);
        view.process_event(&key(KeyCode::Enter), &mut filter, Focus::None);
        assert_eq!(view.modal, Some(1));

        assert_eq!(
            view.process_event(&key(KeyCode::Char('c')), &mut filter, Focus::None),
            Some(ShowcaseAction::OpenLink(1, LinkKind::CaseStudy))
        );
        assert_eq!(filter, FilterState::default());

        view.process_event(&key(KeyCode::Esc), &mut filter, Focus::None);
        assert_eq!(view.modal, None);
    }

    #[test]
    fn unhandled_keys_fall_through() {
        let mut view = view();
        let mut filter = FilterState::default();
        assert_eq!(view.process_event(&key(KeyCode::Char('q')), &mut filter, Focus::None), None);
        assert_eq!(view.process_event(&key(KeyCode::Char('2')), &mut filter, Focus::None), None);
    }

    #[test]
    fn hover_and_drag_pause_the_carousel() {
        let mut view = view();
        view.track_area = Some(Rect::new(0, 5, 80, 10));

        view.process_mouse(mouse(MouseEventKind::Moved, 10, 8));
        assert_eq!(view.carousel.state(), CarouselState::Paused);

        view.process_mouse(mouse(MouseEventKind::Moved, 10, 30));
        assert_eq!(view.carousel.state(), CarouselState::Running);

        view.process_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 8));
        view.process_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 8));
        assert!(view.carousel.is_dragging());
        assert_eq!(view.carousel.offset(), -10.0);

        view.process_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 8));
        assert!(!view.carousel.is_dragging());
        assert_eq!(view.carousel.state(), CarouselState::Paused);
    }
}
