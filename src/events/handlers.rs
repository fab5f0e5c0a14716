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

//! State changes applied for each application event and command.

use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use tracing::{error, info};

use crate::{
    App, MainView, Notice,
    commander::Command,
    components::ShowcaseLayout,
    contact::{ValidationErrors, draft::Draft, mailto::build_mailto},
    events::{AppEvent, Focus},
    model::{LinkKind, filter},
    tasks::AppTask,
    util::format::format_speed,
};

pub(super) fn handle_tick(app: &mut App) {
    let now = Instant::now();
    let elapsed = now.duration_since(app.last_tick);
    app.last_tick = now;

    let in_view = app.main_view == MainView::Projects
        && app.showcase_view.layout == ShowcaseLayout::Carousel;

    let carousel = &mut app.showcase_view.carousel;
    carousel.set_in_view(in_view);
    carousel.tick(elapsed);
}

pub(super) fn set_main_view(app: &mut App, main_view: MainView) {
    match app.focus {
        Focus::SearchInput if main_view != MainView::Projects => app.focus = Focus::None,
        Focus::ContactForm if main_view != MainView::Contact => {
            app.contact_view.editing = false;
            app.focus = Focus::None;
        }
        _ => {}
    }
    app.main_view = main_view;
}

pub(super) fn handle_command(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        Command::View(view) => set_main_view(app, view),

        Command::Category(category) => {
            app.filter.category = category;
            filters_changed(app);
        }
        Command::Tag(tag) => {
            let known = app
                .showcase_view
                .tags
                .iter()
                .find(|t| t.eq_ignore_ascii_case(&tag))
                .cloned();
            match known {
                Some(known) => {
                    app.filter.tags.insert(known);
                    filters_changed(app);
                }
                None => notify_error(app, format!("Unknown tag: {tag}")),
            }
        }
        Command::Untag(tag) => {
            let before = app.filter.tags.len();
            app.filter.tags.retain(|t| !t.eq_ignore_ascii_case(&tag));
            if app.filter.tags.len() < before {
                filters_changed(app);
            } else {
                notify_error(app, format!("Tag not selected: {tag}"));
            }
        }
        Command::ListTags => {
            let tags = app.showcase_view.tags.join(", ");
            app.notice = Some(Notice::Info(format!("Tags: {tags}")));
        }
        Command::Search(text) => {
            app.showcase_view.set_search(&text);
            app.filter.search = text;
            filters_changed(app);
        }
        Command::Sort(sort) => {
            app.filter.sort = sort;
            filters_changed(app);
        }
        Command::ClearFilters => clear_filters(app),

        Command::Speed(speed) => {
            app.showcase_view.set_speed(speed);
            let label = format_speed(app.showcase_view.carousel.speed());
            app.notice = Some(Notice::Info(format!("Carousel speed {label}")));
        }
        Command::GoTo(position) => {
            if position < app.visible.len() {
                app.showcase_view.go_to(position);
                set_main_view(app, MainView::Projects);
            } else {
                notify_error(app, format!("No project at position {}", position + 1));
            }
        }
        Command::Layout(layout) => {
            match layout {
                Some(layout) => app.showcase_view.set_layout(layout),
                None => app.showcase_view.toggle_layout(),
            }
            set_main_view(app, MainView::Projects);
        }
        Command::Open(slug) => open_project(app, &slug),
        Command::Motion(enabled) => {
            let carousel = &mut app.showcase_view.carousel;
            let reduced = match enabled {
                Some(on) => !on,
                None => !carousel.reduced_motion(),
            };
            carousel.set_reduced_motion(reduced);
            let text = if reduced { "Motion reduced" } else { "Motion enabled" };
            app.notice = Some(Notice::Info(text.to_string()));
        }

        Command::Mail => open_mail_client(app)?,
        Command::Copy => copy_email(app)?,
        Command::VCard => app.task_tx.send(AppTask::ExportVCard)?,
        Command::Link(name) => open_social_link(app, &name)?,
    }

    Ok(())
}

/// Applies a filter change and brings the showcase into view.
pub(super) fn filters_changed(app: &mut App) {
    app.refilter();
    set_main_view(app, MainView::Projects);
}

pub(super) fn clear_filters(app: &mut App) {
    app.filter = filter::FilterState::default();
    app.showcase_view.set_search("");
    filters_changed(app);
}

fn open_project(app: &mut App, slug: &str) {
    let position = app
        .visible
        .iter()
        .position(|i| app.projects[*i].slug == slug);

    match position {
        Some(position) => {
            app.showcase_view.go_to(position);
            app.showcase_view.modal = Some(position);
            set_main_view(app, MainView::Projects);
        }
        None if filter::find_by_slug(&app.projects, slug).is_some() => {
            notify_error(app, format!("{slug} is hidden by the current filters"));
        }
        None => notify_error(app, format!("No project named {slug}")),
    }
}

pub(super) fn open_project_link(app: &mut App, position: usize, kind: LinkKind) -> Result<()> {
    let Some(project) = app.visible.get(position).map(|i| &app.projects[*i]) else {
        return Ok(());
    };

    match project.links.get(kind) {
        Some(link) => {
            let url = app.config.contact.resolve_link(link);
            app.task_tx.send(AppTask::OpenLink(url))?;
        }
        None => {
            let message = format!("{} has no {} link", project.title, kind.label());
            notify_error(app, message);
        }
    }

    Ok(())
}

pub(super) fn open_mail_client(app: &mut App) -> Result<()> {
    let contact = &app.config.contact;
    let uri = build_mailto(&contact.owner_email, &contact.owner_name, &app.contact_view.form());
    app.task_tx.send(AppTask::OpenLink(uri))?;

    Ok(())
}

pub(super) fn copy_email(app: &mut App) -> Result<()> {
    let email = app.config.contact.owner_email.clone();
    app.task_tx.send(AppTask::CopyToClipboard(email))?;

    Ok(())
}

fn open_social_link(app: &mut App, name: &str) -> Result<()> {
    let url = app
        .config
        .contact
        .links
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .map(|l| l.url.clone());

    match url {
        Some(url) => app.task_tx.send(AppTask::OpenLink(url))?,
        None => notify_error(app, format!("No link named {name}")),
    }

    Ok(())
}

/// Autosaves the contact form after an edit.
pub(super) fn save_draft(app: &mut App) -> Result<()> {
    let draft = Draft::from_form(&app.contact_view.form());
    app.task_tx.send(AppTask::SaveDraft(draft))?;

    Ok(())
}

pub(super) fn submit_contact(app: &mut App) -> Result<()> {
    if let Some(form) = app.contact_view.begin_submit() {
        app.task_tx.send(AppTask::Submit(form))?;
    }

    Ok(())
}

pub(super) fn handle_draft_loaded(app: &mut App, draft: Option<Draft>) {
    let Some(draft) = draft else {
        return;
    };

    // Never clobber anything typed while the draft was loading
    if app.contact_view.form().is_blank() {
        app.contact_view.load_form(draft.into_form());
        info!("Restored contact draft");
    }
}

pub(super) fn handle_validation_failed(app: &mut App, errors: ValidationErrors) {
    app.contact_view.show_errors(errors);
}

pub(super) fn handle_submission_succeeded(app: &mut App) {
    app.contact_view.submission_succeeded();
}

pub(super) fn handle_submission_failed(app: &mut App, banner: String) {
    app.contact_view.submission_failed(banner);
}

pub(super) fn handle_mail_client_opened(app: &mut App) {
    app.notice = Some(Notice::Info("Mail client opened".to_string()));
}

pub(super) fn handle_link_opened(app: &mut App, url: String) {
    app.notice = Some(Notice::Info(format!("Opened {url}")));
}

pub(super) fn handle_clipboard_copied(app: &mut App) {
    app.contact_view.show_copied(Instant::now());
    app.notice = Some(Notice::Info("Email copied to clipboard".to_string()));
}

pub(super) fn handle_vcard_exported(app: &mut App, path: PathBuf) {
    app.notice = Some(Notice::Info(format!("Contact card saved to {}", path.display())));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!("{}", message);
    app.notice = Some(Notice::Error(message));
}

fn notify_error(app: &mut App, message: String) {
    app.notice = Some(Notice::Error(message));
}
