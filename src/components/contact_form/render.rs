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

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};

use crate::{
    components::{Banner, ContactView},
    config::ContactConfig,
    contact::Field,
    events::Focus,
    theme::Theme,
};

impl ContactView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, contact: &ContactConfig, focus: Focus, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        self.draw_form(f, columns[0], focus, theme);
        self.draw_sidebar(f, columns[1], contact, theme);
    }

    fn draw_form(&self, f: &mut Frame, area: Rect, focus: Focus, theme: &Theme) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_colour))
            .title(Span::styled(" Send a message ", Style::default().fg(theme.heading_fg).bold()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_banner(f, rows[0], theme);

        for (i, field) in Field::VISIBLE.iter().enumerate() {
            self.draw_field(f, rows[1 + i * 2], rows[2 + i * 2], i, *field, focus, theme);
        }

        let hints = if focus == Focus::ContactForm {
            "Tab next field  Enter on message or Ctrl+S send  Ctrl+O mail client  Esc done"
        } else {
            "Enter edit  s send  m mail client  y copy email  v vCard  X clear"
        };
        f.render_widget(Paragraph::new(hints).fg(theme.muted_fg), rows[9]);
    }

    fn draw_banner(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = if self.sending {
            Line::from("Sending...").fg(theme.muted_fg)
        } else {
            match &self.banner {
                Some(Banner::Success(message)) => Line::from(message.as_str()).fg(theme.success_fg),
                Some(Banner::Error(message)) => {
                    Line::from(vec![Span::raw(message.as_str()), Span::raw("  (x to dismiss)").fg(theme.muted_fg)])
                        .fg(theme.error_fg)
                }
                None => Line::from(""),
            }
        };
        f.render_widget(Paragraph::new(line), area);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_field(
        &self,
        f: &mut Frame,
        area: Rect,
        error_area: Rect,
        index: usize,
        field: Field,
        focus: Focus,
        theme: &Theme,
    ) {
        let focused = index == self.focused;
        let error = self.errors.for_field(field);

        let border_colour = match (focused, error.is_some()) {
            (true, _) => theme.accent_colour,
            (false, true) => theme.error_fg,
            (false, false) => theme.border_colour,
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border_colour))
            .title(Span::styled(field.label(), Style::default().fg(theme.muted_fg)));
        let inner = block.inner(area);

        let input = &self.inputs[index];
        let width = usize::from(inner.width.max(1));
        let scroll = input.visual_scroll(width);

        // Only the message box is tall enough to wrap
        let text = if field == Field::Message {
            Paragraph::new(input.value()).wrap(Wrap { trim: false })
        } else {
            Paragraph::new(input.value()).scroll((0, scroll as u16))
        };
        let text = text.fg(theme.text_fg).block(block);
        f.render_widget(text, area);

        if let Some(error) = error {
            f.render_widget(Paragraph::new(error.to_string()).fg(theme.error_fg), error_area);
        }

        if focused && focus == Focus::ContactForm {
            let (x, y) = if field == Field::Message {
                let cursor = input.visual_cursor();
                (cursor % width, cursor / width)
            } else {
                (input.visual_cursor().saturating_sub(scroll), 0)
            };
            let y = (y as u16).min(inner.height.saturating_sub(1));
            f.set_cursor_position((inner.x + x as u16, inner.y + y));
        }
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect, contact: &ContactConfig, theme: &Theme) {
        let copied = if self.copied_visible(Instant::now()) {
            Span::styled("  Copied", Style::default().fg(theme.success_fg).bold())
        } else {
            Span::styled("  (y to copy)", Style::default().fg(theme.muted_fg))
        };

        let mut lines = vec![
            Line::from(contact.owner_name.as_str()).fg(theme.heading_fg).bold(),
            Line::from(""),
            Line::from(vec![
                Span::styled(contact.owner_email.as_str(), Style::default().fg(theme.accent_colour)),
                copied,
            ]),
            Line::from(""),
        ];

        if !contact.links.is_empty() {
            lines.push(Line::from("Elsewhere").fg(theme.heading_fg));
            for link in &contact.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<10}", link.name), Style::default().fg(theme.tag_fg)),
                    Span::styled(link.url.as_str(), Style::default().fg(theme.muted_fg)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(":link <name> opens one in the browser").fg(theme.muted_fg));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Contact ")
            .padding(Padding::horizontal(1));

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
    }
}
