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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, mouse), background worker updates (draft
//! store, contact delivery) and the UI rendering pipeline.
//!
//! # Organization
//!
//! * `handlers`: state changes for each application event and command.
//! * `key_handlers`: routing of keyboard and mouse input to the active view.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    commander::Command,
    contact::{ValidationErrors, draft::Draft},
    render::draw,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    None,
    SearchInput,
    ContactForm,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Tick,

    Command(Command),

    DraftLoaded(Option<Draft>),

    ValidationFailed(ValidationErrors),
    SubmissionSucceeded,
    SubmissionFailed(String),
    MailClientOpened,

    LinkOpened(String),
    ClipboardCopied,
    VCardExported(PathBuf),

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
            AppEvent::Tick => handle_tick(app),
            AppEvent::Command(command) => handle_command(app, command)?,
            AppEvent::DraftLoaded(draft) => handle_draft_loaded(app, draft),
            AppEvent::ValidationFailed(errors) => handle_validation_failed(app, errors),
            AppEvent::SubmissionSucceeded => handle_submission_succeeded(app),
            AppEvent::SubmissionFailed(banner) => handle_submission_failed(app, banner),
            AppEvent::MailClientOpened => handle_mail_client_opened(app),
            AppEvent::LinkOpened(url) => handle_link_opened(app, url),
            AppEvent::ClipboardCopied => handle_clipboard_copied(app),
            AppEvent::VCardExported(path) => handle_vcard_exported(app, path),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
