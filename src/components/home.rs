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

//! The landing hero.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{model::profile::HERO, theme::Theme};

pub(crate) fn draw_home(f: &mut Frame, area: Rect, project_count: usize, theme: &Theme) {
    let height = 8 + HERO.highlights.len() as u16;
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)])
        .split(area);

    let mut lines = vec![
        Line::from(HERO.name).fg(theme.heading_fg).bold(),
        Line::from(HERO.role).fg(theme.accent_colour),
        Line::from(""),
        Line::from(HERO.tagline).fg(theme.text_fg),
        Line::from(""),
    ];
    lines.extend(
        HERO.highlights
            .iter()
            .map(|h| Line::from(vec![Span::styled("• ", Style::default().fg(theme.accent_colour)), Span::raw(*h)])),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)),
        Span::styled(format!(" View {project_count} projects   "), Style::default().fg(theme.text_fg)),
        Span::styled(" c ", Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)),
        Span::styled(" Get in touch", Style::default().fg(theme.text_fg)),
    ]));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        vertical[1],
    );
}
