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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};

use crate::{
    components::AboutView,
    model::profile::{INTRO, SKILLS, TIMELINE},
    theme::Theme,
};

impl AboutView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = vec![Line::from(INTRO).fg(theme.text_fg), Line::from("")];

        for (i, entry) in TIMELINE.iter().enumerate() {
            let selected = i == self.selected;
            let expanded = self.is_expanded(i);
            let marker = if expanded { "▾ " } else { "▸ " };

            let title_style = if selected {
                Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).bold()
            } else {
                Style::default().fg(theme.heading_fg).bold()
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent_colour)),
                Span::styled(entry.title, title_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(entry.organisation, Style::default().fg(theme.accent_colour)),
                Span::styled(format!("  {}  {}", entry.period, entry.kind.label()), Style::default().fg(theme.muted_fg)),
            ]));
            if expanded {
                lines.push(Line::from(format!("  {}", entry.description)).fg(theme.text_fg));
            }
            lines.push(Line::from(""));
        }

        let experience = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" About ")
                .title_bottom(Line::from(" j/k select  Enter expand ").fg(theme.muted_fg))
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(experience, columns[0]);

        let mut skills = vec![];
        for group in SKILLS {
            skills.push(Line::from(group.name).fg(theme.heading_fg).bold());
            skills.push(Line::from(
                group
                    .skills
                    .iter()
                    .map(|s| Span::styled(format!("{s}  "), Style::default().fg(theme.tag_fg)))
                    .collect::<Vec<_>>(),
            ));
            skills.push(Line::from(""));
        }

        let skills = Paragraph::new(skills).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Skills ")
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(skills, columns[1]);
    }
}
