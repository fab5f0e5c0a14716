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

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{ContactAction, ContactView},
    events::Focus,
};

impl ContactView {
    pub(crate) fn process_event(&mut self, event: &Event, focus: Focus) -> Option<ContactAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if focus == Focus::ContactForm {
            return Some(self.process_editing_event(event));
        }

        let action = match key_event.code {
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('e') => {
                self.editing = true;
                ContactAction::StartEditing
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.focus_next();
                ContactAction::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.focus_previous();
                ContactAction::Consumed
            }
            KeyCode::Char('s') => ContactAction::Submit,
            KeyCode::Char('m') => ContactAction::OpenMailClient,
            KeyCode::Char('y') => ContactAction::CopyEmail,
            KeyCode::Char('v') => ContactAction::ExportVCard,
            KeyCode::Char('x') => {
                self.dismiss_banner();
                ContactAction::Consumed
            }
            KeyCode::Char('X') => {
                self.clear();
                ContactAction::ClearForm
            }
            _ => return None,
        };

        Some(action)
    }

    fn process_editing_event(&mut self, event: &Event) -> ContactAction {
        let Event::Key(key_event) = event else {
            return ContactAction::Consumed;
        };

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('s') => return ContactAction::Submit,
                KeyCode::Char('o') => return ContactAction::OpenMailClient,
                KeyCode::Char('d') => {
                    self.dismiss_banner();
                    return ContactAction::Consumed;
                }
                _ => {}
            }
        }

        match key_event.code {
            KeyCode::Esc => {
                self.editing = false;
                ContactAction::StopEditing
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                ContactAction::Consumed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                ContactAction::Consumed
            }
            KeyCode::Enter if self.focused == self.inputs.len() - 1 => ContactAction::Submit,
            KeyCode::Enter => {
                self.focus_next();
                ContactAction::Consumed
            }
            _ => {
                let field = self.focused_field();
                let input = &mut self.inputs[self.focused];
                let before = input.value().to_string();
                input.handle_event(event);
                if input.value() == before {
                    return ContactAction::Consumed;
                }
                self.errors.clear_field(field);
                ContactAction::Changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::contact::Field;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn enter_starts_editing_and_esc_stops() {
        let mut view = ContactView::new();
        assert_eq!(view.process_event(&key(KeyCode::Enter), Focus::None), Some(ContactAction::StartEditing));
        assert!(view.editing);

        assert_eq!(
            view.process_event(&key(KeyCode::Esc), Focus::ContactForm),
            Some(ContactAction::StopEditing)
        );
        assert!(!view.editing);
    }

    #[test]
    fn typing_changes_the_focused_field() {
        let mut view = ContactView::new();
        view.process_event(&key(KeyCode::Tab), Focus::ContactForm);
        assert_eq!(view.focused_field(), Field::Email);

        assert_eq!(
            view.process_event(&key(KeyCode::Char('a')), Focus::ContactForm),
            Some(ContactAction::Changed)
        );
        assert_eq!(view.form().email, "a");

        // Global letters are text while editing
        assert_eq!(
            view.process_event(&key(KeyCode::Char('q')), Focus::ContactForm),
            Some(ContactAction::Changed)
        );
        assert_eq!(view.form().email, "aq");
    }

    #[test]
    fn editing_clears_that_fields_error() {
        let mut view = ContactView::new();
        view.begin_submit();
        assert!(view.errors.for_field(Field::Name).is_some());
        assert_eq!(view.focused_field(), Field::Name);

        view.process_event(&key(KeyCode::Char('A')), Focus::ContactForm);
        assert!(view.errors.for_field(Field::Name).is_none());
        assert!(view.errors.for_field(Field::Email).is_some());
    }

    #[test]
    fn enter_on_message_submits() {
        let mut view = ContactView::new();
        view.focused = 2;
        assert_eq!(view.process_event(&key(KeyCode::Enter), Focus::ContactForm), Some(ContactAction::Consumed));
        assert_eq!(view.focused_field(), Field::Message);
        assert_eq!(view.process_event(&key(KeyCode::Enter), Focus::ContactForm), Some(ContactAction::Submit));
        assert_eq!(view.process_event(&ctrl('s'), Focus::ContactForm), Some(ContactAction::Submit));
        assert_eq!(view.process_event(&ctrl('o'), Focus::ContactForm), Some(ContactAction::OpenMailClient));
    }

    #[test]
    fn shortcuts_outside_editing() {
        let mut view = ContactView::new();
        assert_eq!(view.process_event(&key(KeyCode::Char('y')), Focus::None), Some(ContactAction::CopyEmail));
        assert_eq!(view.process_event(&key(KeyCode::Char('v')), Focus::None), Some(ContactAction::ExportVCard));
        assert_eq!(view.process_event(&key(KeyCode::Char('m')), Focus::None), Some(ContactAction::OpenMailClient));
        assert_eq!(view.process_event(&key(KeyCode::Char('q')), Focus::None), None);
    }
}
