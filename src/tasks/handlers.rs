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

use std::fs;

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::{info, warn};

use crate::{
    contact::{
        ContactForm, draft,
        draft::Draft,
        mailto::{build_vcard, vcard_file_name},
        submit::{self, Delivery, schedule_fallback},
    },
    events::AppEvent,
    tasks::TaskContext,
};

pub(super) fn load_draft(ctx: &mut TaskContext) -> Result<()> {
    let draft = draft::load(ctx.conn)?;
    ctx.event_tx.send(AppEvent::DraftLoaded(draft))?;

    Ok(())
}

pub(super) fn save_draft(ctx: &mut TaskContext, draft: &Draft) -> Result<()> {
    draft::save(ctx.conn, draft)
}

pub(super) fn clear_draft(ctx: &mut TaskContext) -> Result<()> {
    draft::clear(ctx.conn)
}

/// Makes the single delivery attempt, falling back to the mail client after
/// the configured delay when it fails.
pub(super) fn submit_contact(ctx: &mut TaskContext, form: &ContactForm) -> Result<()> {
    let recipient = ctx.config.contact.recipient();

    match submit::submit(form, ctx.transport, &recipient) {
        Err(errors) => ctx.event_tx.send(AppEvent::ValidationFailed(errors))?,

        Ok(Delivery::Sent) => {
            if let Err(e) = draft::clear(ctx.conn) {
                warn!("Failed to clear contact draft: {:#}", e);
            }
            ctx.event_tx.send(AppEvent::SubmissionSucceeded)?;
        }

        Ok(Delivery::Fallback { reason, mailto }) => {
            ctx.event_tx
                .send(AppEvent::SubmissionFailed(reason.banner().to_string()))?;

            let event_tx = ctx.event_tx.clone();
            schedule_fallback(
                ctx.launcher.clone(),
                ctx.config.contact.fallback_delay(),
                mailto,
                move |outcome| {
                    let event = match outcome {
                        Ok(_) => AppEvent::MailClientOpened,
                        Err(e) => AppEvent::Error(format!("{e:#}")),
                    };
                    let _ = event_tx.send(event);
                },
            );
        }
    }

    Ok(())
}

pub(super) fn open_link(ctx: &mut TaskContext, url: String) -> Result<()> {
    ctx.launcher.open(&url)?;
    ctx.event_tx.send(AppEvent::LinkOpened(url))?;

    Ok(())
}

pub(super) fn copy_to_clipboard(ctx: &mut TaskContext, text: String) -> Result<()> {
    let mut clipboard = match ctx.clipboard.take() {
        Some(clipboard) => clipboard,
        None => Clipboard::new().context("Clipboard unavailable")?,
    };

    let copied = clipboard.set_text(text);
    *ctx.clipboard = Some(clipboard);
    copied.context("Failed to copy to clipboard")?;
    ctx.event_tx.send(AppEvent::ClipboardCopied)?;

    Ok(())
}

pub(super) fn export_vcard(ctx: &mut TaskContext) -> Result<()> {
    let contact = &ctx.config.contact;
    let path = ctx.export_dir.join(vcard_file_name(&contact.owner_name));

    fs::write(&path, build_vcard(&contact.owner_name, &contact.owner_email))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported contact card to {}", path.display());

    ctx.event_tx.send(AppEvent::VCardExported(path))?;

    Ok(())
}
