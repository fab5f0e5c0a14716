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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! draft persistence, the contact request and desktop integration from the
//! main UI thread. It provides a dedicated worker loop that translates
//! [`AppTask`] requests into those operations and broadcasts the results back
//! to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.

mod handlers;
use handlers::*;

use std::{
    path::PathBuf,
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::{Context, Result};
use arboard::Clipboard;
use rusqlite::Connection;
use tracing::error;

use crate::{
    config::AppConfig,
    contact::{
        ContactForm,
        draft::Draft,
        submit::{ContactTransport, HttpTransport, LinkLauncher, SystemLauncher},
    },
    db,
    events::AppEvent,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadDraft,
    SaveDraft(Draft),
    ClearDraft,

    Submit(ContactForm),

    OpenLink(String),
    CopyToClipboard(String),
    ExportVCard,
}

/// Spawns a background thread to process application tasks.
///
/// The draft database and HTTP client are opened up front so that a broken
/// setup is reported before the UI starts.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
///
/// # Errors
///
/// Returns an error if the draft database or the HTTP client cannot be
/// initialised.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let config = config.clone();

    let conn = db::init_db(&config.draft_database).context("Failed to initialise draft database")?;
    let transport = HttpTransport::new(&config.contact.endpoint, config.contact.request_timeout())?;
    let launcher: Arc<dyn LinkLauncher> = Arc::new(SystemLauncher);
    let export_dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    thread::spawn(move || {
        // Held for the life of the worker, some platforms drop clipboard
        // contents once their owner goes away
        let mut clipboard = None;

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                conn: &conn,
                transport: &transport,
                launcher: &launcher,
                clipboard: &mut clipboard,
                export_dir: &export_dir,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });

    Ok(())
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    conn: &'a Connection,
    transport: &'a dyn ContactTransport,
    launcher: &'a Arc<dyn LinkLauncher>,
    clipboard: &'a mut Option<Clipboard>,
    export_dir: &'a PathBuf,
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadDraft => load_draft(ctx),
        AppTask::SaveDraft(draft) => save_draft(ctx, &draft),
        AppTask::ClearDraft => clear_draft(ctx),

        AppTask::Submit(form) => submit_contact(ctx, &form),

        AppTask::OpenLink(url) => open_link(ctx, url),
        AppTask::CopyToClipboard(text) => copy_to_clipboard(ctx, text),
        AppTask::ExportVCard => export_vcard(ctx),
    }
}
