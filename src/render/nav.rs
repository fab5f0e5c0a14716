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

//! Render the section tabs.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::{App, MainView};

pub(crate) fn draw_nav(f: &mut Frame, area: Rect, app: &App) {
    let titles = MainView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())));

    let selected = MainView::ALL
        .iter()
        .position(|v| *v == app.main_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(app.theme.muted_fg))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.border_colour))
                .title_top(Line::from(app.config.contact.owner_name.as_str()).right_aligned()),
        );

    f.render_widget(tabs, area);
}
