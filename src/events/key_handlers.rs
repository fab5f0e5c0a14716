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

//! Keyboard and mouse routing.
//!
//! Input goes first to the command line, then to the active view, and only
//! keys the view leaves alone reach the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};

use crate::{
    App, MainView,
    commander::Command,
    components::{ContactAction, ShowcaseAction},
    events::{AppEvent, Focus, handlers::*},
    tasks::AppTask,
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into view actions, commands and tasks.
///
/// # Errors
///
/// Returns an error if a task fails to send to the background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    // Text entry owns ':' while a field has focus
    if app.focus == Focus::None && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    match app.main_view {
        MainView::Projects => {
            let action = app
                .showcase_view
                .process_event(&event, &mut app.filter, app.focus);
            if let Some(action) = action {
                return handle_showcase_action(app, action);
            }
        }
        MainView::Contact => {
            if let Some(action) = app.contact_view.process_event(&event, app.focus) {
                return handle_contact_action(app, action);
            }
        }
        MainView::About => {
            if app.about_view.process_event(&event) {
                return Ok(());
            }
        }
        MainView::Home => {
            if process_home_key_event(app, key) {
                return Ok(());
            }
        }
    }

    process_global_key_event(app, key)
}

fn handle_showcase_action(app: &mut App, action: ShowcaseAction) -> Result<()> {
    match action {
        ShowcaseAction::Consumed => {}
        ShowcaseAction::FilterChanged => app.refilter(),
        ShowcaseAction::EnterSearch => app.focus = Focus::SearchInput,
        ShowcaseAction::LeaveSearch => app.focus = Focus::None,
        ShowcaseAction::OpenLink(position, kind) => open_project_link(app, position, kind)?,
    }

    Ok(())
}

fn handle_contact_action(app: &mut App, action: ContactAction) -> Result<()> {
    match action {
        ContactAction::Consumed => {}
        ContactAction::StartEditing => app.focus = Focus::ContactForm,
        ContactAction::StopEditing => app.focus = Focus::None,
        ContactAction::Changed => save_draft(app)?,
        ContactAction::Submit => submit_contact(app)?,
        ContactAction::OpenMailClient => open_mail_client(app)?,
        ContactAction::CopyEmail => copy_email(app)?,
        ContactAction::ExportVCard => app.task_tx.send(AppTask::ExportVCard)?,
        ContactAction::ClearForm => app.task_tx.send(AppTask::ClearDraft)?,
    }

    Ok(())
}

/// The hero's calls to action.
fn process_home_key_event(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') => set_main_view(app, MainView::Projects),
        KeyCode::Char('c') => set_main_view(app, MainView::Contact),
        _ => return false,
    }
    true
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            set_main_view(app, MainView::ALL[index]);
        }

        KeyCode::Tab => {
            let index = MainView::ALL.iter().position(|v| *v == app.main_view).unwrap_or(0);
            set_main_view(app, MainView::ALL[(index + 1) % MainView::ALL.len()]);
        }
        KeyCode::BackTab => {
            let index = MainView::ALL.iter().position(|v| *v == app.main_view).unwrap_or(0);
            let count = MainView::ALL.len();
            set_main_view(app, MainView::ALL[(index + count - 1) % count]);
        }

        KeyCode::Char('M') => handle_command(app, Command::Motion(None))?,

        KeyCode::Esc => app.notice = None,

        _ => {}
    }

    Ok(())
}

/// Hover, drag and wheel input over the carousel track.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.main_view == MainView::Projects && app.showcase_view.modal.is_none() {
        app.showcase_view.process_mouse(mouse);
    } else if app.showcase_view.carousel.is_dragging() {
        app.showcase_view.carousel.drag_end();
    }
}
