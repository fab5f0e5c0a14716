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

//! Render the command-line interface.
//!
//! The footer shows the command line while it is active. Otherwise it shows
//! the latest notice, or the key hints for the current section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, MainView, Notice, events::Focus};

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    if commander.active() {
        let line = Line::from(vec![Span::raw(":"), Span::raw(commander.input.value())]);
        f.render_widget(
            Paragraph::new(line).style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.gauge_track_colour),
            ),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let line = match &app.notice {
        Some(Notice::Info(message)) => Line::styled(message.as_str(), Style::default().fg(app.theme.success_fg)),
        Some(Notice::Error(message)) => Line::styled(message.as_str(), Style::default().fg(app.theme.error_fg)),
        None => Line::styled(key_hints(app), Style::default().fg(app.theme.muted_fg)),
    };
    f.render_widget(Paragraph::new(line), container[0]);
}

fn key_hints(app: &App) -> &'static str {
    match (app.main_view, app.focus) {
        (_, Focus::SearchInput) => "Type to search  Enter/Esc done",
        (_, Focus::ContactForm) => "Editing contact form  Esc done",
        (MainView::Home, _) => "Enter projects  c contact  1-4 sections  : command  q quit",
        (MainView::About, _) => "j/k select  Enter expand  1-4 sections  : command  q quit",
        (MainView::Projects, _) => {
            "h/l move  Enter details  / search  c category  s sort  [ ] t tags  x clear  v layout  > speed  p pin  M motion"
        }
        (MainView::Contact, _) => "Enter edit  s send  1-4 sections  : command  q quit",
    }
}
