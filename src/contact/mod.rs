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

//! Contact form model and submission flow.
//!
//! A submission is a single linear attempt: the form is validated locally, one
//! request is made to the contact endpoint, and on any failure the user's mail
//! client is opened with a pre-filled message instead. There is no retry.
//!
//! # Sub-modules
//!
//! * [`draft`]: autosave of the in-progress form.
//! * [`mailto`]: `mailto:` URI and vCard composition.
//! * [`submit`]: the network attempt and the fallback timer.

pub(crate) mod draft;
pub(crate) mod mailto;
pub(crate) mod submit;

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    Name,
    Email,
    Subject,
    Message,
    Website,
}

impl Field {
    /// Fields shown to the user, in tab order. The honeypot is never listed.
    pub(crate) const VISIBLE: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject (optional)",
            Field::Message => "Message",
            Field::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,
    #[error("The message must be at least {MIN_MESSAGE_LEN} characters.")]
    MessageTooShort,
    #[error("Spam detected.")]
    Spam,
}

impl FieldError {
    pub(crate) fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageTooShort => Field::Message,
            FieldError::Spam => Field::Website,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    /// Drops the error for a field once the user starts correcting it.
    pub(crate) fn clear_field(&mut self, field: Field) {
        self.0.retain(|e| e.field() != field);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fix the errors before sending.")
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ContactForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
    /// Honeypot. Real users never see this field.
    pub(crate) website: String,
}

/// The JSON body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ContactPayload {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
}

impl ContactForm {
    pub(crate) fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Website => &self.website,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::Website => self.website = value,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = vec![];

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::EmailInvalid);
        }

        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort);
        }

        if !self.website.trim().is_empty() {
            errors.push(FieldError::Spam);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub(crate) fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        Field::VISIBLE.iter().all(|f| self.get(*f).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello there, let's talk.".into(),
            website: String::new(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn reports_one_error_per_failing_field() {
        let form = ContactForm {
            name: String::new(),
            email: "bad".into(),
            message: "short".into(),
            ..ContactForm::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.errors(),
            &[FieldError::NameRequired, FieldError::EmailInvalid, FieldError::MessageTooShort]
        );
        assert_eq!(errors.for_field(Field::Email), Some(&FieldError::EmailInvalid));
        assert_eq!(errors.for_field(Field::Subject), None);
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let form = ContactForm {
            name: "   ".into(),
            email: " \t".into(),
            message: "         a".into(),
            ..ContactForm::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[FieldError::NameRequired, FieldError::EmailRequired, FieldError::MessageTooShort]
        );
    }

    #[test]
    fn email_pattern() {
        let check = |email: &str| {
            let form = ContactForm { email: email.into(), ..valid_form() };
            form.validate().is_ok()
        };

        assert!(check("a@b.co"));
        assert!(check("  padded@example.org  "));
        assert!(!check("no-at.example.com"));
        assert!(!check("two@@example.com"));
        assert!(!check("missing@tld"));
        assert!(!check("spa ce@example.com"));
    }

    #[test]
    fn honeypot_blocks_submission() {
        let form = ContactForm { website: "http://spam".into(), ..valid_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors(), &[FieldError::Spam]);
    }

    #[test]
    fn payload_is_trimmed_and_skips_honeypot() {
        let form = ContactForm {
            name: " Ada ".into(),
            subject: " Hi ".into(),
            ..valid_form()
        };
        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Hello there, let's talk.",
            })
        );
    }
}
