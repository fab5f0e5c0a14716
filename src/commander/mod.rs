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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching the parsed [`Command`] as
//! an application event when typing is finished and a command is submitted.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView,
    components::ShowcaseLayout,
    events::AppEvent,
    model::filter::{CategoryFilter, SortKey},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Quit,
    View(MainView),

    Category(CategoryFilter),
    Tag(String),
    Untag(String),
    ListTags,
    Search(String),
    Sort(SortKey),
    ClearFilters,

    Speed(f64),
    /// Zero-based position in the visible list.
    GoTo(usize),
    Layout(Option<ShowcaseLayout>),
    Open(String),
    /// `None` toggles.
    Motion(Option<bool>),

    Mail,
    Copy,
    VCard,
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("Invalid value for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` when the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(e) => AppEvent::Error(e.to_string()),
                    };
                    let _ = event_tx.send(event);
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }
}

pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => Command::Quit,

        [view] if MainView::parse(view).is_some() => {
            Command::View(MainView::parse(view).ok_or(CommandError::Unknown(view.to_string()))?)
        }

        ["cat"] => return Err(CommandError::MissingArgument("cat")),
        ["cat", value] => Command::Category(CategoryFilter::parse(value).ok_or_else(|| {
            CommandError::InvalidArgument { command: "cat", value: value.to_string() }
        })?),

        ["tag"] => return Err(CommandError::MissingArgument("tag")),
        ["tag", rest @ ..] => Command::Tag(rest.join(" ").to_lowercase()),
        ["untag"] => return Err(CommandError::MissingArgument("untag")),
        ["untag", rest @ ..] => Command::Untag(rest.join(" ").to_lowercase()),
        ["tags"] => Command::ListTags,

        ["search"] => Command::Search(String::new()),
        ["search", rest @ ..] => Command::Search(rest.join(" ")),

        ["sort"] => return Err(CommandError::MissingArgument("sort")),
        ["sort", value] => Command::Sort(SortKey::parse(value).ok_or_else(|| {
            CommandError::InvalidArgument { command: "sort", value: value.to_string() }
        })?),

        ["clear"] => Command::ClearFilters,

        ["speed"] => return Err(CommandError::MissingArgument("speed")),
        ["speed", value] => {
            let speed = value
                .trim_end_matches('x')
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "speed",
                    value: value.to_string(),
                })?;
            Command::Speed(speed)
        }

        ["goto"] => return Err(CommandError::MissingArgument("goto")),
        ["goto", value] => {
            let position = value
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "goto",
                    value: value.to_string(),
                })?;
            Command::GoTo(position)
        }

        ["layout"] => Command::Layout(None),
        ["layout", value] => Command::Layout(Some(ShowcaseLayout::parse(value).ok_or_else(
            || CommandError::InvalidArgument { command: "layout", value: value.to_string() },
        )?)),

        ["open"] => return Err(CommandError::MissingArgument("open")),
        ["open", slug] => Command::Open(slug.to_string()),

        ["motion"] => Command::Motion(None),
        ["motion", "on"] => Command::Motion(Some(true)),
        ["motion", "off"] => Command::Motion(Some(false)),
        ["motion", value] => {
            return Err(CommandError::InvalidArgument { command: "motion", value: value.to_string() });
        }

        ["mail"] => Command::Mail,
        ["copy"] => Command::Copy,
        ["vcard"] => Command::VCard,

        ["link"] => return Err(CommandError::MissingArgument("link")),
        ["link", rest @ ..] => Command::Link(rest.join(" ")),

        [] => return Err(CommandError::Unknown(String::new())),
        [cmd, ..] => return Err(CommandError::Unknown(cmd.to_string())),
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Category;

    #[test]
    fn parses_views_and_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("3"), Ok(Command::View(MainView::Projects)));
        assert_eq!(parse_command("contact"), Ok(Command::View(MainView::Contact)));
    }

    #[test]
    fn parses_filters() {
        assert_eq!(
            parse_command("cat game"),
            Ok(Command::Category(CategoryFilter::Only(Category::Game)))
        );
        assert_eq!(parse_command("cat all"), Ok(Command::Category(CategoryFilter::All)));
        assert_eq!(parse_command("tag Unity"), Ok(Command::Tag("unity".to_string())));
        assert_eq!(parse_command("search  rust   tui"), Ok(Command::Search("rust tui".to_string())));
        assert_eq!(parse_command("search"), Ok(Command::Search(String::new())));
        assert_eq!(parse_command("sort a-z"), Ok(Command::Sort(SortKey::Alphabetical)));
    }

    #[test]
    fn parses_carousel_commands() {
        assert_eq!(parse_command("speed 2x"), Ok(Command::Speed(2.0)));
        assert_eq!(parse_command("speed 0.5"), Ok(Command::Speed(0.5)));
        assert_eq!(parse_command("goto 1"), Ok(Command::GoTo(0)));
        assert_eq!(parse_command("layout list"), Ok(Command::Layout(Some(ShowcaseLayout::List))));
        assert_eq!(parse_command("motion off"), Ok(Command::Motion(Some(false))));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(parse_command("goto 0"), Err(CommandError::InvalidArgument {
            command: "goto",
            value: "0".to_string()
        }));
        assert!(parse_command("speed -1").is_err());
        assert!(parse_command("speed fast").is_err());
        assert_eq!(parse_command("cat"), Err(CommandError::MissingArgument("cat")));
        assert_eq!(parse_command("sort sideways").unwrap_err().to_string(), "Invalid value for sort: sideways");
        assert_eq!(parse_command("frobnicate now"), Err(CommandError::Unknown("frobnicate".to_string())));
    }

    #[test]
    fn submitting_sends_the_parsed_command() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        for c in "copy".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx);
        }
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Command(Command::Copy))));
    }
}
