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

//! # Portfolio TUI.
//!
//! A terminal rendition of a personal portfolio site: a hero section, an
//! about page, a filterable project showcase with an auto-scrolling carousel,
//! and a contact form that falls back to the mail client.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** handle draft persistence, contact delivery and
//!   desktop integration (browser, clipboard) via task processing.
//! * **Event Loops** capture user input and animation ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod carousel;
mod commander;
mod components;
mod config;
mod contact;
mod db;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use std::{
    ffi::OsStr,
    io,
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Instant,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    commander::Commander,
    components::{AboutView, ContactView, ShowcaseView},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::{
        Project, catalog,
        filter::{self, FilterState},
    },
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Home,
    About,
    Projects,
    Contact,
}

impl MainView {
    pub(crate) const ALL: [MainView; 4] = [
        MainView::Home,
        MainView::About,
        MainView::Projects,
        MainView::Contact,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            MainView::Home => "Home",
            MainView::About => "About",
            MainView::Projects => "Projects",
            MainView::Contact => "Contact",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "1" | "home" => Some(MainView::Home),
            "2" | "about" => Some(MainView::About),
            "3" | "projects" | "work" => Some(MainView::Projects),
            "4" | "contact" => Some(MainView::Contact),
            _ => None,
        }
    }
}

/// A one-line message for the footer, replaced by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Info(String),
    Error(String),
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub projects: Vec<Project>,
    pub filter: FilterState,
    /// Catalog positions of the projects passing the filters, in display
    /// order.
    pub visible: Vec<usize>,

    pub showcase_view: ShowcaseView,
    pub about_view: AboutView,
    pub contact_view: ContactView,

    pub commander: Commander,
    pub notice: Option<Notice>,

    pub last_tick: Instant,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let projects = catalog::projects();
        let filter = FilterState::default();
        let visible = filter::matching_indices(&projects, &filter);

        let showcase_view = ShowcaseView::new(
            &config.carousel,
            config.ui.reduced_motion,
            filter::all_tags(&projects),
            visible.len(),
        );

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Home,
            focus: Focus::None,
            event_tx,
            event_rx,
            task_tx,
            projects,
            filter,
            visible,
            showcase_view,
            about_view: AboutView::new(),
            contact_view: ContactView::new(),
            commander: Commander::new(),
            notice: None,
            last_tick: Instant::now(),
        }
    }

    /// Recomputes the visible projects after any filter change.
    ///
    /// An open modal stays on the same project at its new position, or closes
    /// when that project is filtered out.
    pub fn refilter(&mut self) {
        let modal_project = self
            .showcase_view
            .modal
            .and_then(|m| self.visible.get(m).copied());

        self.visible = filter::matching_indices(&self.projects, &self.filter);
        self.showcase_view.set_item_count(self.visible.len());

        let position = modal_project.and_then(|p| self.visible.iter().position(|v| *v == p));
        match position {
            Some(position) => {
                self.showcase_view.go_to(position);
                self.showcase_view.modal = Some(position);
            }
            None => self.showcase_view.close_modal(),
        }
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.visible.iter().map(|i| &self.projects[*i]).collect()
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = init_logging(&config).context("Failed to initialise logging")?;
    info!("Starting folio");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes `tracing` output to the configured log file.
///
/// The terminal belongs to the TUI, so nothing is ever logged to stdout. The
/// returned guard flushes the writer when dropped and must outlive the UI.
fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let path = Path::new(&config.log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path.file_name().unwrap_or(OsStr::new("folio.log"));

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and enables mouse
///   reporting, which the carousel needs for hover and drag.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort and
/// does not return a result, as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread driving the carousel animation and UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the task worker cannot be started or if the event
/// processing loop encounters an unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone())
        .context("Failed to start task worker")?;

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this drives
    // the carousel and is the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    let tick_interval = app.config.ui.tick_interval();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_interval);
        }
    });

    // Restore any contact draft left by a previous session
    app.task_tx.send(AppTask::LoadDraft)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
