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

//! Contact form autosave.
//!
//! The in-progress form is written to the local key-value store on every
//! change and read back once at startup. A second running instance writing
//! the same key simply replaces the draft.

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{contact::ContactForm, db};

pub(crate) const DRAFT_KEY: &str = "contact_form_autosave_v1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Draft {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) subject: String,
    #[serde(default)]
    pub(crate) message: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub(crate) saved_at: i64,
}

impl Draft {
    pub(crate) fn from_form(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            saved_at: Utc::now().timestamp_millis(),
        }
    }

    /// Copies the saved fields into a form. The honeypot is never restored.
    pub(crate) fn into_form(self) -> ContactForm {
        ContactForm {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            website: String::new(),
        }
    }
}

pub(crate) fn load(conn: &Connection) -> Result<Option<Draft>> {
    let Some(raw) = db::get_value(conn, DRAFT_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(draft) => Ok(Some(draft)),
        Err(e) => {
            warn!("Ignoring unreadable contact draft: {}", e);
            Ok(None)
        }
    }
}

pub(crate) fn save(conn: &Connection, draft: &Draft) -> Result<()> {
    let raw = serde_json::to_string(draft)?;
    db::put_value(conn, DRAFT_KEY, &raw)
}

pub(crate) fn clear(conn: &Connection) -> Result<()> {
    db::delete_value(conn, DRAFT_KEY)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn save_then_load_restores_fields() {
        let conn = db::init_memory_db().unwrap();
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Draft message".into(),
            website: "bot".into(),
        };

        save(&conn, &Draft::from_form(&form)).unwrap();
        let restored = load(&conn).unwrap().unwrap();
        assert!(restored.saved_at > 0);

        let restored = restored.into_form();
        assert_eq!(restored.name, "Ada");
        assert_eq!(restored.message, "Draft message");
        assert_eq!(restored.website, "");
    }

    #[test]
    fn stored_json_uses_saved_at_key() {
        let conn = db::init_memory_db().unwrap();
        let draft = Draft { name: "A".into(), saved_at: 42, ..Draft::default() };
        save(&conn, &draft).unwrap();

        let raw = db::get_value(&conn, DRAFT_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["savedAt"], 42);
        assert_eq!(json["name"], "A");
    }

    #[test]
    fn partial_and_corrupt_drafts() {
        let conn = db::init_memory_db().unwrap();

        db::put_value(&conn, DRAFT_KEY, r#"{"email":"x@y.z"}"#).unwrap();
        let draft = load(&conn).unwrap().unwrap();
        assert_eq!(draft.email, "x@y.z");
        assert_eq!(draft.name, "");

        db::put_value(&conn, DRAFT_KEY, "not json").unwrap();
        assert_eq!(load(&conn).unwrap(), None);
    }

    #[test]
    fn clear_removes_draft() {
        let conn = db::init_memory_db().unwrap();
        save(&conn, &Draft::default()).unwrap();
        clear(&conn).unwrap();
        assert_eq!(load(&conn).unwrap(), None);
    }
}
