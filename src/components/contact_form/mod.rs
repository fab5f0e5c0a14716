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

//! Contact form view.
//!
//! Holds one text input per visible field plus the hidden honeypot, the
//! inline validation errors and the status banner. Delivery itself happens on
//! the task worker; this view only tracks what the user sees.

mod event;
mod render;

use std::time::{Duration, Instant};

use tui_input::Input;

use crate::contact::{ContactForm, Field, ValidationErrors};

const COPIED_VISIBLE_FOR: Duration = Duration::from_millis(1800);

const SUCCESS_MESSAGE: &str = "Message sent. Thanks! I'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Banner {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactAction {
    Consumed,
    StartEditing,
    StopEditing,
    /// A field value changed and the draft should be saved.
    Changed,
    Submit,
    OpenMailClient,
    CopyEmail,
    ExportVCard,
    ClearForm,
}

pub(crate) struct ContactView {
    inputs: [Input; 4],
    website: String,
    pub(crate) focused: usize,
    pub(crate) errors: ValidationErrors,
    pub(crate) banner: Option<Banner>,
    pub(crate) sending: bool,
    pub(crate) editing: bool,
    copied_at: Option<Instant>,
}

impl ContactView {
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            website: String::new(),
            focused: 0,
            errors: ValidationErrors::default(),
            banner: None,
            sending: false,
            editing: false,
            copied_at: None,
        }
    }

    pub(crate) fn focused_field(&self) -> Field {
        Field::VISIBLE[self.focused]
    }

    pub(crate) fn input(&self, field: Field) -> Option<&Input> {
        Field::VISIBLE
            .iter()
            .position(|f| *f == field)
            .map(|i| &self.inputs[i])
    }

    pub(crate) fn form(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for (field, input) in Field::VISIBLE.iter().zip(&self.inputs) {
            form.set(*field, input.value().to_string());
        }
        form.website = self.website.clone();
        form
    }

    pub(crate) fn load_form(&mut self, form: ContactForm) {
        for (field, input) in Field::VISIBLE.iter().zip(self.inputs.iter_mut()) {
            *input = Input::new(form.get(*field).to_string());
        }
        self.website = form.website;
    }

    pub(crate) fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Validates the form and, when it passes, marks it as sending and hands
    /// back the form to deliver. Returns `None` while a request is in flight.
    pub(crate) fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.sending {
            return None;
        }

        let form = self.form();
        if let Err(errors) = form.validate() {
            self.show_errors(errors);
            return None;
        }

        self.errors = ValidationErrors::default();
        self.banner = None;
        self.sending = true;
        Some(form)
    }

    pub(crate) fn show_errors(&mut self, errors: ValidationErrors) {
        self.banner = Some(Banner::Error(errors.to_string()));
        if let Some(first) = errors
            .errors()
            .iter()
            .find_map(|e| Field::VISIBLE.iter().position(|f| *f == e.field()))
        {
            self.focused = first;
        }
        self.errors = errors;
        self.sending = false;
    }

    pub(crate) fn submission_succeeded(&mut self) {
        self.load_form(ContactForm::default());
        self.errors = ValidationErrors::default();
        self.focused = 0;
        self.sending = false;
        self.banner = Some(Banner::Success(SUCCESS_MESSAGE.to_string()));
    }

    pub(crate) fn submission_failed(&mut self, message: String) {
        self.sending = false;
        self.banner = Some(Banner::Error(message));
    }

    pub(crate) fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub(crate) fn clear(&mut self) {
        self.load_form(ContactForm::default());
        self.errors = ValidationErrors::default();
        self.banner = None;
        self.focused = 0;
    }

    pub(crate) fn show_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub(crate) fn copied_visible(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_VISIBLE_FOR)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::contact::FieldError;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Let's build something together.".into(),
            website: String::new(),
        }
    }

    #[test]
    fn form_round_trips_through_inputs() {
        let mut view = ContactView::new();
        view.load_form(filled());
        assert_eq!(view.form(), filled());
        assert_eq!(view.input(Field::Email).map(Input::value), Some("ada@example.com"));
        assert!(view.input(Field::Website).is_none());
    }

    #[test]
    fn invalid_submit_shows_errors_and_focuses_first() {
        let mut view = ContactView::new();
        view.load_form(ContactForm { email: "bad".into(), ..filled() });
        view.focused = 3;

        assert_eq!(view.begin_submit(), None);
        assert_eq!(view.errors.errors(), &[FieldError::EmailInvalid]);
        assert_eq!(view.focused_field(), Field::Email);
        assert_eq!(view.banner, Some(Banner::Error("Fix the errors before sending.".into())));
        assert!(!view.sending);
    }

    #[test]
    fn second_submit_is_ignored_while_sending() {
        let mut view = ContactView::new();
        view.load_form(filled());

        assert_eq!(view.begin_submit(), Some(filled()));
        assert!(view.sending);
        assert_eq!(view.begin_submit(), None);

        view.submission_failed("Could not send".into());
        assert!(!view.sending);
        assert_eq!(view.form(), filled());
    }

    #[test]
    fn success_resets_the_form() {
        let mut view = ContactView::new();
        view.load_form(filled());
        view.begin_submit();
        view.submission_succeeded();

        assert!(view.form().is_blank());
        assert!(matches!(view.banner, Some(Banner::Success(_))));
    }

    #[test]
    fn copied_indicator_expires() {
        let mut view = ContactView::new();
        let now = Instant::now();
        assert!(!view.copied_visible(now));

        view.show_copied(now);
        assert!(view.copied_visible(now + Duration::from_millis(1000)));
        assert!(!view.copied_visible(now + Duration::from_millis(1800)));
    }
}
